use crate::domain;
use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// DTO for a todo returned from the API
#[derive(Serialize, ToSchema)]
#[cfg_attr(test, derive(Deserialize, PartialEq, Eq, Debug))]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[schema(example = 3)]
    pub id: i32,
    #[schema(example = "Water the plants")]
    pub title: String,
    #[schema(example = "The ones on the balcony too")]
    pub description: Option<String>,
    #[schema(example = "2030-06-15T12:00:00Z")]
    pub expiration_date: DateTime<Utc>,
    #[schema(example = 40)]
    pub percentage_of_completion: i32,
}

impl From<domain::todo::Todo> for Todo {
    fn from(value: domain::todo::Todo) -> Self {
        Todo {
            id: value.id,
            title: value.title,
            description: value.description,
            expiration_date: value.expiration_date,
            percentage_of_completion: value.percentage_of_completion,
        }
    }
}

/// DTO for creating a todo via the API. Any "id" in the body is ignored.
#[derive(Deserialize, Display, Validate, ToSchema)]
#[display("\"{title}\" due {expiration_date}")]
#[cfg_attr(test, derive(Serialize))]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    #[validate(length(min = 1))]
    #[schema(example = "Water the plants")]
    pub title: String,
    #[schema(example = "The ones on the balcony too")]
    pub description: Option<String>,
    #[validate(custom = "not_before_today")]
    #[schema(example = "2030-06-15T12:00:00Z")]
    pub expiration_date: DateTime<Utc>,
    #[validate(range(min = 0, max = 100))]
    #[serde(default)]
    #[schema(example = 0)]
    pub percentage_of_completion: i32,
}

impl From<NewTodo> for domain::todo::NewTodo {
    fn from(value: NewTodo) -> Self {
        domain::todo::NewTodo {
            title: value.title,
            description: value.description,
            expiration_date: value.expiration_date,
            percentage_of_completion: value.percentage_of_completion,
        }
    }
}

/// DTO replacing the full content of a todo via the API
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[cfg_attr(test, derive(Serialize, Clone))]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    /// Must match the ID in the request path
    #[schema(example = 3)]
    pub id: i32,
    #[schema(example = "Water the plants")]
    pub title: String,
    #[schema(example = "The ones on the balcony too")]
    pub description: Option<String>,
    #[schema(example = "2030-06-15T12:00:00Z")]
    pub expiration_date: DateTime<Utc>,
    #[validate(range(min = 0, max = 100))]
    #[serde(default)]
    #[schema(example = 40)]
    pub percentage_of_completion: i32,
}

impl UpdateTodo {
    /// Runs field validation and makes sure the body describes the todo at [path_id]
    pub fn validate_for(&self, path_id: i32) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        if self.id != path_id {
            let mut mismatch = ValidationError::new("id_mismatch");
            mismatch.add_param("path_id".into(), &path_id);
            errors.add("id", mismatch);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl From<UpdateTodo> for domain::todo::Todo {
    fn from(value: UpdateTodo) -> Self {
        domain::todo::Todo {
            id: value.id,
            title: value.title,
            description: value.description,
            expiration_date: value.expiration_date,
            percentage_of_completion: value.percentage_of_completion,
        }
    }
}

/// Expiration dates may fall later today, but not on an earlier day
fn not_before_today(expiration_date: &DateTime<Utc>) -> Result<(), ValidationError> {
    if expiration_date.date_naive() < Utc::now().date_naive() {
        return Err(ValidationError::new("before_today"));
    }

    Ok(())
}
