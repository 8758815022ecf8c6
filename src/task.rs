// src/task.rs

use actix_web::{web, HttpResponse, Responder};
use chrono::{Datelike, Utc};
use futures_util::StreamExt;
use log::{error, info};
use mongodb::bson::doc;
use serde::Deserialize;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::calendar::build_calendar;
use crate::categorize::categorize;
use crate::models::task::{CreateTaskRequest, Task, UpdateTaskRequest};

/// Load every task, most recently created first.
async fn load_all_tasks(data: &AppState) -> Result<Vec<Task>, HttpResponse> {
    let tasks_coll = data.mongodb.tasks();
    let mut cursor = match tasks_coll.find(doc! {}).await {
        Ok(cur) => cur,
        Err(e) => {
            error!("Error fetching tasks: {}", e);
            return Err(HttpResponse::InternalServerError().body("Error fetching tasks"));
        }
    };

    let mut tasks = vec![];
    while let Some(task_res) = cursor.next().await {
        match task_res {
            Ok(task) => tasks.push(task),
            Err(e) => {
                error!("Error reading tasks: {}", e);
                return Err(HttpResponse::InternalServerError().body("Error reading tasks"));
            }
        }
    }
    tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(tasks)
}

/// GET / — all tasks grouped by urgency
pub async fn task_list(data: web::Data<AppState>) -> impl Responder {
    let tasks = match load_all_tasks(&data).await {
        Ok(tasks) => tasks,
        Err(resp) => return resp,
    };

    let today = Utc::now().date_naive();
    HttpResponse::Ok().json(categorize(tasks, today))
}

/// POST /create/ — create a new task
pub async fn task_create(
    data: web::Data<AppState>,
    payload: web::Json<CreateTaskRequest>,
) -> impl Responder {
    if payload.title.trim().is_empty() {
        return HttpResponse::BadRequest().body("Title must not be empty");
    }

    let now = Utc::now();
    let new_task = Task {
        task_id: Uuid::new_v4(),
        title: payload.title.clone(),
        description: payload.description.clone().unwrap_or_default(),
        due_date: payload.due_date,
        reminder_date: payload.reminder_date,
        is_resolved: false,
        created_at: now,
        updated_at: now,
    };

    let tasks_coll = data.mongodb.tasks();
    match tasks_coll.insert_one(&new_task).await {
        Ok(_) => {
            info!("Task created: {}", new_task.task_id);
            HttpResponse::Ok().json(&new_task)
        }
        Err(e) => {
            error!("Error inserting task: {}", e);
            HttpResponse::InternalServerError().body("Error inserting task")
        }
    }
}

/// PUT /edit/{task_id}/ — full replace of the editable fields
pub async fn task_edit(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateTaskRequest>,
) -> impl Responder {
    let task_id = path.into_inner();

    if payload.title.trim().is_empty() {
        return HttpResponse::BadRequest().body("Title must not be empty");
    }

    let tasks_coll = data.mongodb.tasks();
    let filter = doc! { "_id": task_id.to_string() };
    let mut task = match tasks_coll.find_one(filter.clone()).await {
        Ok(Some(task)) => task,
        Ok(None) => return HttpResponse::NotFound().body("Task not found"),
        Err(e) => {
            error!("Error fetching task {}: {}", task_id, e);
            return HttpResponse::InternalServerError().body("Error fetching task");
        }
    };

    task.title = payload.title.clone();
    task.description = payload.description.clone().unwrap_or_default();
    task.due_date = payload.due_date;
    task.reminder_date = payload.reminder_date;
    task.updated_at = Utc::now();

    match tasks_coll.replace_one(filter, &task).await {
        Ok(_) => HttpResponse::Ok().json(&task),
        Err(e) => {
            error!("Error updating task {}: {}", task_id, e);
            HttpResponse::InternalServerError().body("Error updating task")
        }
    }
}

/// POST /toggle/{task_id}/ — flip is_resolved
pub async fn task_toggle_resolve(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let task_id = path.into_inner();

    let tasks_coll = data.mongodb.tasks();
    let filter = doc! { "_id": task_id.to_string() };
    let mut task = match tasks_coll.find_one(filter.clone()).await {
        Ok(Some(task)) => task,
        Ok(None) => return HttpResponse::NotFound().body("Task not found"),
        Err(e) => {
            error!("Error fetching task {}: {}", task_id, e);
            return HttpResponse::InternalServerError().body("Error fetching task");
        }
    };

    task.is_resolved = !task.is_resolved;
    task.updated_at = Utc::now();

    match tasks_coll.replace_one(filter, &task).await {
        Ok(_) => HttpResponse::Ok().json(&task),
        Err(e) => {
            error!("Error toggling task {}: {}", task_id, e);
            HttpResponse::InternalServerError().body("Error toggling task")
        }
    }
}

/// DELETE /delete/{task_id}/ — hard delete
pub async fn task_delete(data: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let task_id = path.into_inner();

    let tasks_coll = data.mongodb.tasks();
    let filter = doc! { "_id": task_id.to_string() };
    match tasks_coll.delete_one(filter).await {
        Ok(res) => {
            if res.deleted_count == 0 {
                HttpResponse::NotFound().body("Task not found or already deleted")
            } else {
                info!("Task deleted: {}", task_id);
                HttpResponse::Ok().json(serde_json::json!({ "status": "Task deleted" }))
            }
        }
        Err(e) => {
            error!("Error deleting task {}: {}", task_id, e);
            HttpResponse::InternalServerError().body("Error deleting task")
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// GET /calendar/ — month grid plus tasks grouped by due day. Defaults to
/// the current month when year/month are not given.
pub async fn calendar_view(
    data: web::Data<AppState>,
    query: web::Query<CalendarQuery>,
) -> impl Responder {
    let now = Utc::now();
    let year = query.year.unwrap_or_else(|| now.year());
    let month = query.month.unwrap_or_else(|| now.month());

    let tasks = match load_all_tasks(&data).await {
        Ok(tasks) => tasks,
        Err(resp) => return resp,
    };

    match build_calendar(year, month, tasks) {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
    }
}
