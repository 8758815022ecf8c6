// src/main.rs

mod app_state;
mod calendar;
mod categorize;
mod config;
mod models;
mod task;
mod task_db;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http, middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use crate::app_state::AppState;
use crate::task::{
    calendar_view, task_create, task_delete, task_edit, task_list, task_toggle_resolve,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = config::Config::from_env();
    let mongodb = Arc::new(task_db::MongoDB::init(&config.mongo_uri, &config.database_name).await);

    println!("Server running at http://{}", config.bind_addr);
    println!("Allowed CORS Origin: {}", config.frontend_origin);

    let bind_addr = config.bind_addr.clone();
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&config.frontend_origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![http::header::CONTENT_TYPE, http::header::ACCEPT])
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(AppState {
                mongodb: mongodb.clone(),
            }))
            .route("/", web::get().to(task_list))
            .route("/create/", web::post().to(task_create))
            .route("/edit/{task_id}/", web::put().to(task_edit))
            .route("/delete/{task_id}/", web::delete().to(task_delete))
            .route("/toggle/{task_id}/", web::post().to(task_toggle_resolve))
            .route("/calendar/", web::get().to(calendar_view))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
