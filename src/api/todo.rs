use crate::domain::todo::driving_ports::{TodoError, TodoPort};
use crate::dto::todo::{NewTodo, Todo, UpdateTodo};
use crate::external_connections::ExternalConnectivity;
use crate::persistence::db_todo_driven_ports::{DbTodoReader, DbTodoWriter};
use crate::routing_utils::{
    GenericErrorResponse, Json, NotFoundResponse, Path, ValidationErrorResponse,
};
use crate::{AppState, SharedData, domain};
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderName, StatusCode, header};
use axum::response::{ErrorResponse, IntoResponse, Response};
use axum::routing::get;
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;
use validator::Validate;

#[derive(OpenApi)]
#[openapi(paths(
    get_todos,
    get_todo,
    create_todo,
    update_todo,
    delete_todo,
    mark_todo_done,
    change_todo_percentage,
    get_incoming_todos,
))]
/// Defines the OpenAPI documentation for the todo API
pub struct TodoApi;

/// Constant used to group todo endpoints in OpenAPI documentation
pub const TODO_API_GROUP: &str = "Todos";
/// Where the todo routes are mounted
pub const TODO_API_ROOT: &str = "/api/todo";

const PERCENTAGE_PREFIX: &str = "percentage=";

/// Builds a router for all the todo routes
pub fn todo_routes() -> Router<Arc<SharedData>> {
    Router::new()
        .route(
            "/",
            get(|State(app_state): AppState| async move {
                let mut ext_cxn = app_state.ext_cxn.clone();
                let todo_service = domain::todo::TodoService {};

                get_todos(&mut ext_cxn, &todo_service).await
            })
            .post(
                |State(app_state): AppState, Json(new_todo): Json<NewTodo>| async move {
                    let mut ext_cxn = app_state.ext_cxn.clone();
                    let todo_service = domain::todo::TodoService {};

                    create_todo(new_todo, &mut ext_cxn, &todo_service).await
                },
            ),
        )
        .route(
            "/:id",
            get(|State(app_state): AppState, Path(id): Path<i32>| async move {
                let mut ext_cxn = app_state.ext_cxn.clone();
                let todo_service = domain::todo::TodoService {};

                get_todo(id, &mut ext_cxn, &todo_service).await
            })
            .put(
                |State(app_state): AppState,
                 Path(id): Path<i32>,
                 Json(update): Json<UpdateTodo>| async move {
                    let mut ext_cxn = app_state.ext_cxn.clone();
                    let todo_service = domain::todo::TodoService {};

                    update_todo(id, update, &mut ext_cxn, &todo_service).await
                },
            )
            .delete(|State(app_state): AppState, Path(id): Path<i32>| async move {
                let mut ext_cxn = app_state.ext_cxn.clone();
                let todo_service = domain::todo::TodoService {};

                delete_todo(id, &mut ext_cxn, &todo_service).await
            }),
        )
        .route(
            "/:id/:percentage_setting",
            get(
                |State(app_state): AppState,
                 Path((id, percentage_setting)): Path<(i32, String)>| async move {
                    let mut ext_cxn = app_state.ext_cxn.clone();
                    let todo_service = domain::todo::TodoService {};

                    change_todo_percentage(id, &percentage_setting, &mut ext_cxn, &todo_service)
                        .await
                },
            ),
        )
        .route(
            "/mark_done/:id",
            get(|State(app_state): AppState, Path(id): Path<i32>| async move {
                let mut ext_cxn = app_state.ext_cxn.clone();
                let todo_service = domain::todo::TodoService {};

                mark_todo_done(id, &mut ext_cxn, &todo_service).await
            }),
        )
        .route(
            "/incoming/:days",
            get(|State(app_state): AppState, Path(days): Path<f64>| async move {
                let mut ext_cxn = app_state.ext_cxn.clone();
                let todo_service = domain::todo::TodoService {};

                get_incoming_todos(days, &mut ext_cxn, &todo_service).await
            }),
        )
}

/// Response type that turns domain failures into
/// [BasicErrorResponse][crate::routing_utils::BasicErrorResponse]s
struct TodoErrorResponse(TodoError);

impl IntoResponse for TodoErrorResponse {
    fn into_response(self) -> Response {
        match self.0 {
            TodoError::TodoDoesNotExist(id) => {
                info!("Todo {id} does not exist");
                NotFoundResponse.into_response()
            }
            TodoError::InvalidPercentage(_) => {
                ValidationErrorResponse::for_field("percentage", "range").into_response()
            }
            TodoError::InvalidDayCount(_) => {
                ValidationErrorResponse::for_field("days", "out_of_bounds").into_response()
            }
            TodoError::PortError(err) => GenericErrorResponse(err).into_response(),
        }
    }
}

/// Pulls the percentage out of a "percentage=N" path segment. A segment without the
/// "percentage=" prefix names a route that doesn't exist.
fn parse_percentage_setting(percentage_setting: &str) -> Result<i32, ErrorResponse> {
    let Some(raw_percentage) = percentage_setting.strip_prefix(PERCENTAGE_PREFIX) else {
        return Err(NotFoundResponse.into());
    };

    raw_percentage
        .parse()
        .map_err(|_| ValidationErrorResponse::for_field("percentage", "not_an_integer").into())
}

#[utoipa::path(
    get,
    path = "/api/todo",
    tag = TODO_API_GROUP,
    responses(
        (status = 200, description = "Every todo in the system", body = [Todo]),
        (status = 500, description = "The todos could not be read", body = BasicErrorResponse),
    ),
)]
/// Retrieves every todo
async fn get_todos(
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
) -> Result<Json<Vec<Todo>>, ErrorResponse> {
    info!("Requested all todos");
    let todo_reader = DbTodoReader;

    let todos = todo_service
        .all_todos(&mut *ext_cxn, &todo_reader)
        .await
        .map_err(GenericErrorResponse)?;

    Ok(Json(todos.into_iter().map(Todo::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/todo/{id}",
    tag = TODO_API_GROUP,
    params(("id" = i32, Path, description = "ID of the todo")),
    responses(
        (status = 200, description = "The requested todo", body = Todo),
        (status = 404, description = "No todo has that ID", body = BasicErrorResponse),
        (status = 500, description = "The todo could not be read", body = BasicErrorResponse),
    ),
)]
/// Retrieves a single todo
async fn get_todo(
    id: i32,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
) -> Result<Json<Todo>, ErrorResponse> {
    info!("Requested todo {id}");
    let todo_reader = DbTodoReader;

    let todo = todo_service
        .todo_by_id(id, &mut *ext_cxn, &todo_reader)
        .await
        .map_err(GenericErrorResponse)?
        .ok_or(NotFoundResponse)?;

    Ok(Json(todo.into()))
}

#[utoipa::path(
    post,
    path = "/api/todo",
    tag = TODO_API_GROUP,
    request_body = NewTodo,
    responses(
        (status = 201, description = "The todo was created", body = Todo,
            headers(("Location" = String, description = "Where the new todo can be fetched"))),
        (status = 400, description = "The todo was invalid or the body was malformed", body = BasicErrorResponse),
        (status = 500, description = "The todo could not be stored", body = BasicErrorResponse),
    ),
)]
/// Creates a todo
async fn create_todo(
    new_todo: NewTodo,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Todo>), ErrorResponse> {
    info!("Attempt to create todo: {new_todo}");
    new_todo
        .validate()
        .map_err(ValidationErrorResponse::from)?;

    let domain_todo = domain::todo::NewTodo::from(new_todo);
    let todo_writer = DbTodoWriter;

    let created = todo_service
        .create_todo(&domain_todo, &mut *ext_cxn, &todo_writer)
        .await
        .map_err(GenericErrorResponse)?;
    let location = format!("{TODO_API_ROOT}/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created.into()),
    ))
}

#[utoipa::path(
    put,
    path = "/api/todo/{id}",
    tag = TODO_API_GROUP,
    params(("id" = i32, Path, description = "ID of the todo, which must match the body")),
    request_body = UpdateTodo,
    responses(
        (status = 200, description = "The todo was replaced", body = Todo),
        (status = 400, description = "The IDs didn't match or the percentage was out of range", body = BasicErrorResponse),
        (status = 500, description = "The todo could not be stored", body = BasicErrorResponse),
    ),
)]
/// Replaces the full content of a todo
async fn update_todo(
    id: i32,
    update: UpdateTodo,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
) -> Result<Json<Todo>, ErrorResponse> {
    info!("Updating todo {id}");
    update
        .validate_for(id)
        .map_err(ValidationErrorResponse::from)?;

    let domain_todo = domain::todo::Todo::from(update);
    let todo_writer = DbTodoWriter;

    let updated = todo_service
        .update_todo(&domain_todo, &mut *ext_cxn, &todo_writer)
        .await
        .map_err(GenericErrorResponse)?;

    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/api/todo/{id}",
    tag = TODO_API_GROUP,
    params(("id" = i32, Path, description = "ID of the todo")),
    responses(
        (status = 200, description = "The todo was deleted"),
        (status = 404, description = "No todo has that ID", body = BasicErrorResponse),
        (status = 500, description = "The todo could not be deleted", body = BasicErrorResponse),
    ),
)]
/// Deletes a todo
async fn delete_todo(
    id: i32,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
) -> Result<StatusCode, ErrorResponse> {
    info!("Deleting todo {id}");
    let todo_reader = DbTodoReader;
    let todo_writer = DbTodoWriter;

    todo_service
        .delete_todo(id, &mut *ext_cxn, &todo_reader, &todo_writer)
        .await
        .map_err(TodoErrorResponse)?;

    Ok(StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/api/todo/mark_done/{id}",
    tag = TODO_API_GROUP,
    params(("id" = i32, Path, description = "ID of the todo")),
    responses(
        (status = 200, description = "The todo is now 100% complete", body = Todo),
        (status = 404, description = "No todo has that ID", body = BasicErrorResponse),
        (status = 500, description = "The todo could not be updated", body = BasicErrorResponse),
    ),
)]
/// Marks a todo as fully complete
async fn mark_todo_done(
    id: i32,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
) -> Result<Json<Todo>, ErrorResponse> {
    info!("Marking todo {id} as done");
    let todo_reader = DbTodoReader;
    let todo_writer = DbTodoWriter;

    let todo = todo_service
        .mark_todo_done(id, &mut *ext_cxn, &todo_reader, &todo_writer)
        .await
        .map_err(TodoErrorResponse)?;

    Ok(Json(todo.into()))
}

#[utoipa::path(
    get,
    path = "/api/todo/{id}/percentage={percentage}",
    tag = TODO_API_GROUP,
    params(
        ("id" = i32, Path, description = "ID of the todo"),
        ("percentage" = i32, Path, description = "New completion percentage, from 0 to 100"),
    ),
    responses(
        (status = 200, description = "The todo with its new percentage", body = Todo),
        (status = 400, description = "The percentage was not an integer from 0 to 100", body = BasicErrorResponse),
        (status = 404, description = "No todo has that ID", body = BasicErrorResponse),
        (status = 500, description = "The todo could not be updated", body = BasicErrorResponse),
    ),
)]
/// Sets how far along a todo is
async fn change_todo_percentage(
    id: i32,
    percentage_setting: &str,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
) -> Result<Json<Todo>, ErrorResponse> {
    let percentage = parse_percentage_setting(percentage_setting)?;
    info!("Setting todo {id} to {percentage}% complete");
    let todo_reader = DbTodoReader;
    let todo_writer = DbTodoWriter;

    let todo = todo_service
        .change_todo_percentage(id, percentage, &mut *ext_cxn, &todo_reader, &todo_writer)
        .await
        .map_err(TodoErrorResponse)?;

    Ok(Json(todo.into()))
}

#[utoipa::path(
    get,
    path = "/api/todo/incoming/{days}",
    tag = TODO_API_GROUP,
    params(("days" = f64, Path, description = "How many days past today to look ahead. 0 means the rest of today")),
    responses(
        (status = 200, description = "Todos expiring between now and the end of the window", body = [Todo]),
        (status = 400, description = "The day count was not a usable number", body = BasicErrorResponse),
        (status = 500, description = "The todos could not be read", body = BasicErrorResponse),
    ),
)]
/// Retrieves todos which expire soon
async fn get_incoming_todos(
    days: f64,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
) -> Result<Json<Vec<Todo>>, ErrorResponse> {
    info!("Requested todos expiring within {days} days");
    let todo_reader = DbTodoReader;

    let todos = todo_service
        .incoming_todos(days, &mut *ext_cxn, &todo_reader)
        .await
        .map_err(TodoErrorResponse)?;

    Ok(Json(todos.into_iter().map(Todo::from).collect()))
}
