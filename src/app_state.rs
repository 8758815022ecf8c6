use crate::task_db::MongoDB;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub mongodb: Arc<MongoDB>,
}
