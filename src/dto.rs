pub mod todo;

use crate::routing_utils::{BasicErrorResponse, ExtraInfo, ValidationErrorSchema};
use utoipa::OpenApi;

/// Component schemas shared across the API documentation
#[derive(OpenApi)]
#[openapi(components(schemas(
    todo::Todo,
    todo::NewTodo,
    todo::UpdateTodo,
    BasicErrorResponse,
    ExtraInfo,
    ValidationErrorSchema,
)))]
pub struct OpenApiSchemas;
