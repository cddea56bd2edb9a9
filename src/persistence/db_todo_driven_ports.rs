use crate::domain;
use crate::domain::todo::{NewTodo, Todo};
use crate::external_connections::{ConnectionHandle, ExternalConnectivity};
use anyhow::{Context, Error};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, query, query_as};

pub struct DbTodoReader;

#[derive(FromRow)]
struct TodoRow {
    id: i32,
    title: String,
    description: Option<String>,
    expiration_date: DateTime<Utc>,
    percentage_of_completion: i32,
}

impl From<TodoRow> for domain::todo::Todo {
    fn from(value: TodoRow) -> Self {
        Todo {
            id: value.id,
            title: value.title,
            description: value.description,
            expiration_date: value.expiration_date,
            percentage_of_completion: value.percentage_of_completion,
        }
    }
}

impl domain::todo::driven_ports::TodoReader for DbTodoReader {
    async fn all_todos(&self, ext_cxn: &mut impl ExternalConnectivity) -> Result<Vec<Todo>, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let todos: Vec<Todo> = query_as::<_, TodoRow>("SELECT * FROM todo")
            .fetch_all(cxn.borrow_connection())
            .await
            .context("trying to fetch all todos")?
            .into_iter()
            .map(Todo::from)
            .collect();

        Ok(todos)
    }

    async fn todo_by_id(
        &self,
        id: i32,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<Option<Todo>, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let todo = query_as::<_, TodoRow>("SELECT * FROM todo t WHERE t.id = $1")
            .bind(id)
            .fetch_optional(cxn.borrow_connection())
            .await
            .context("trying to fetch a todo by ID")?
            .map(Todo::from);

        Ok(todo)
    }

    async fn todos_expiring_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<Vec<Todo>, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let todos: Vec<Todo> = query_as::<_, TodoRow>(
            "SELECT * FROM todo t WHERE t.expiration_date BETWEEN $1 AND $2",
        )
        .bind(start)
        .bind(end)
        .fetch_all(cxn.borrow_connection())
        .await
        .context("trying to fetch todos expiring within a time window")?
        .into_iter()
        .map(Todo::from)
        .collect();

        Ok(todos)
    }
}

pub struct DbTodoWriter;

impl domain::todo::driven_ports::TodoWriter for DbTodoWriter {
    async fn create_todo(
        &self,
        new_todo: &NewTodo,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<i32, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let new_id = query_as::<_, super::NewId>(
            "INSERT INTO todo(title, description, expiration_date, percentage_of_completion) \
             VALUES ($1, $2, $3, $4) RETURNING todo.id",
        )
        .bind(&new_todo.title)
        .bind(&new_todo.description)
        .bind(new_todo.expiration_date)
        .bind(new_todo.percentage_of_completion)
        .fetch_one(cxn.borrow_connection())
        .await
        .context("trying to insert a new todo into the database")?;

        Ok(new_id.id)
    }

    async fn update_todo(
        &self,
        todo: &Todo,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<(), Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        query(
            "UPDATE todo SET title = $1, description = $2, expiration_date = $3, \
             percentage_of_completion = $4 WHERE id = $5",
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.expiration_date)
        .bind(todo.percentage_of_completion)
        .bind(todo.id)
        .execute(cxn.borrow_connection())
        .await
        .context("trying to update a todo in the database")?;

        Ok(())
    }

    async fn delete_todo(&self, id: i32, ext_cxn: &mut impl ExternalConnectivity) -> Result<(), Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        query("DELETE FROM todo WHERE id = $1")
            .bind(id)
            .execute(cxn.borrow_connection())
            .await
            .context("trying to remove a todo from the database")?;

        Ok(())
    }

    async fn set_percentage(
        &self,
        id: i32,
        percentage: i32,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<(), Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        query("UPDATE todo SET percentage_of_completion = $1 WHERE id = $2")
            .bind(percentage)
            .bind(id)
            .execute(cxn.borrow_connection())
            .await
            .context("trying to update a todo's completion percentage")?;

        Ok(())
    }
}
