use crate::domain::todo::driven_ports::{TodoReader, TodoWriter};
use crate::domain::todo::driving_ports::TodoError;
use crate::external_connections::ExternalConnectivity;
use anyhow::{Context, Error};
use chrono::{DateTime, NaiveTime, TimeDelta, Utc};
use tracing::info;

/// Lowest allowed completion percentage
pub const MIN_PERCENTAGE: i32 = 0;
/// Completion percentage of a finished todo
pub const MAX_PERCENTAGE: i32 = 100;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub expiration_date: DateTime<Utc>,
    pub percentage_of_completion: i32,
}

/// A todo which hasn't been stored yet, so it has no ID
#[derive(Debug)]
#[cfg_attr(test, derive(Clone, PartialEq))]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub expiration_date: DateTime<Utc>,
    pub percentage_of_completion: i32,
}

impl NewTodo {
    fn with_id(&self, id: i32) -> Todo {
        Todo {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            expiration_date: self.expiration_date,
            percentage_of_completion: self.percentage_of_completion,
        }
    }
}

/// Whether a completion percentage may be stored on a todo
pub fn percentage_in_range(percentage: i32) -> bool {
    (MIN_PERCENTAGE..=MAX_PERCENTAGE).contains(&percentage)
}

/// Computes the time range "incoming" todos must expire within: from [now] until the end of
/// the day that is [days] days after today. Zero days means "the rest of today", and fractional
/// days extend the window part of the way into the following day.
pub fn incoming_window(
    now: DateTime<Utc>,
    days: f64,
) -> Result<(DateTime<Utc>, DateTime<Utc>), TodoError> {
    if !days.is_finite() {
        return Err(TodoError::InvalidDayCount(days));
    }

    let start_of_today = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    let window_end = TimeDelta::try_milliseconds(((days + 1.0) * MILLIS_PER_DAY) as i64)
        .and_then(|look_ahead| start_of_today.checked_add_signed(look_ahead))
        .ok_or(TodoError::InvalidDayCount(days))?;

    Ok((now, window_end))
}

pub mod driven_ports {
    use super::*;

    pub trait TodoReader {
        async fn all_todos(
            &self,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<Vec<Todo>, anyhow::Error>;
        async fn todo_by_id(
            &self,
            id: i32,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<Option<Todo>, anyhow::Error>;
        /// Todos expiring between [start] and [end], both ends included
        async fn todos_expiring_between(
            &self,
            start: DateTime<Utc>,
            end: DateTime<Utc>,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<Vec<Todo>, anyhow::Error>;
    }

    pub trait TodoWriter {
        async fn create_todo(
            &self,
            new_todo: &NewTodo,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<i32, anyhow::Error>;

        /// Overwrites every field of the todo with the matching ID. Writing to an ID that
        /// doesn't exist changes nothing and is not an error.
        async fn update_todo(
            &self,
            todo: &Todo,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<(), anyhow::Error>;

        async fn delete_todo(
            &self,
            id: i32,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<(), anyhow::Error>;

        async fn set_percentage(
            &self,
            id: i32,
            percentage: i32,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<(), anyhow::Error>;
    }
}

pub mod driving_ports {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum TodoError {
        #[error("todo {0} does not exist")]
        TodoDoesNotExist(i32),
        #[error("completion percentage {0} is outside the range 0-100")]
        InvalidPercentage(i32),
        #[error("cannot look {0} days ahead for incoming todos")]
        InvalidDayCount(f64),
        #[error(transparent)]
        PortError(#[from] anyhow::Error),
    }

    #[cfg(test)]
    #[allow(clippy::items_after_test_module)]
    mod todo_error_clone {
        use super::TodoError;
        use anyhow::anyhow;

        impl Clone for TodoError {
            fn clone(&self) -> Self {
                match self {
                    Self::TodoDoesNotExist(id) => Self::TodoDoesNotExist(*id),
                    Self::InvalidPercentage(percentage) => Self::InvalidPercentage(*percentage),
                    Self::InvalidDayCount(days) => Self::InvalidDayCount(*days),
                    Self::PortError(err) => Self::PortError(anyhow!(format!("{err}"))),
                }
            }
        }
    }

    pub trait TodoPort {
        async fn all_todos(
            &self,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_read: &impl TodoReader,
        ) -> Result<Vec<Todo>, anyhow::Error>;
        async fn todo_by_id(
            &self,
            id: i32,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_read: &impl TodoReader,
        ) -> Result<Option<Todo>, anyhow::Error>;
        async fn create_todo(
            &self,
            new_todo: &NewTodo,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_write: &impl TodoWriter,
        ) -> Result<Todo, anyhow::Error>;
        async fn update_todo(
            &self,
            todo: &Todo,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_write: &impl TodoWriter,
        ) -> Result<Todo, anyhow::Error>;
        async fn delete_todo(
            &self,
            id: i32,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_read: &impl TodoReader,
            todo_write: &impl TodoWriter,
        ) -> Result<(), TodoError>;
        async fn mark_todo_done(
            &self,
            id: i32,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_read: &impl TodoReader,
            todo_write: &impl TodoWriter,
        ) -> Result<Todo, TodoError>;
        async fn change_todo_percentage(
            &self,
            id: i32,
            percentage: i32,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_read: &impl TodoReader,
            todo_write: &impl TodoWriter,
        ) -> Result<Todo, TodoError>;
        async fn incoming_todos(
            &self,
            days: f64,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_read: &impl TodoReader,
        ) -> Result<Vec<Todo>, TodoError>;
    }
}

pub struct TodoService {}

impl TodoService {
    async fn existing_todo(
        id: i32,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_read: &impl TodoReader,
    ) -> Result<Todo, TodoError> {
        todo_read
            .todo_by_id(id, &mut *ext_cxn)
            .await
            .context("looking up a todo")?
            .ok_or(TodoError::TodoDoesNotExist(id))
    }

    async fn store_percentage(
        mut todo: Todo,
        percentage: i32,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_write: &impl TodoWriter,
    ) -> Result<Todo, TodoError> {
        todo_write
            .set_percentage(todo.id, percentage, &mut *ext_cxn)
            .await
            .context("storing a todo's completion percentage")?;
        todo.percentage_of_completion = percentage;

        Ok(todo)
    }
}

impl driving_ports::TodoPort for TodoService {
    async fn all_todos(
        &self,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_read: &impl TodoReader,
    ) -> Result<Vec<Todo>, Error> {
        todo_read
            .all_todos(&mut *ext_cxn)
            .await
            .context("fetching all todos")
    }

    async fn todo_by_id(
        &self,
        id: i32,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_read: &impl TodoReader,
    ) -> Result<Option<Todo>, Error> {
        todo_read
            .todo_by_id(id, &mut *ext_cxn)
            .await
            .context("fetching a todo by ID")
    }

    async fn create_todo(
        &self,
        new_todo: &NewTodo,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_write: &impl TodoWriter,
    ) -> Result<Todo, Error> {
        let new_id = todo_write
            .create_todo(new_todo, &mut *ext_cxn)
            .await
            .context("creating a todo")?;

        Ok(new_todo.with_id(new_id))
    }

    async fn update_todo(
        &self,
        todo: &Todo,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_write: &impl TodoWriter,
    ) -> Result<Todo, Error> {
        todo_write
            .update_todo(todo, &mut *ext_cxn)
            .await
            .context("updating a todo")?;

        Ok(todo.clone())
    }

    async fn delete_todo(
        &self,
        id: i32,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_read: &impl TodoReader,
        todo_write: &impl TodoWriter,
    ) -> Result<(), TodoError> {
        let todo = Self::existing_todo(id, &mut *ext_cxn, todo_read).await?;
        todo_write
            .delete_todo(todo.id, &mut *ext_cxn)
            .await
            .context("deleting a todo")?;

        Ok(())
    }

    async fn mark_todo_done(
        &self,
        id: i32,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_read: &impl TodoReader,
        todo_write: &impl TodoWriter,
    ) -> Result<Todo, TodoError> {
        let todo = Self::existing_todo(id, &mut *ext_cxn, todo_read).await?;

        Self::store_percentage(todo, MAX_PERCENTAGE, &mut *ext_cxn, todo_write).await
    }

    #[tracing::instrument(skip(self, ext_cxn, todo_read, todo_write))]
    async fn change_todo_percentage(
        &self,
        id: i32,
        percentage: i32,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_read: &impl TodoReader,
        todo_write: &impl TodoWriter,
    ) -> Result<Todo, TodoError> {
        // A missing todo takes priority over a bad percentage
        let todo = Self::existing_todo(id, &mut *ext_cxn, todo_read).await?;
        if !percentage_in_range(percentage) {
            return Err(TodoError::InvalidPercentage(percentage));
        }

        Self::store_percentage(todo, percentage, &mut *ext_cxn, todo_write).await
    }

    #[tracing::instrument(skip(self, ext_cxn, todo_read))]
    async fn incoming_todos(
        &self,
        days: f64,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_read: &impl TodoReader,
    ) -> Result<Vec<Todo>, TodoError> {
        let (start, end) = incoming_window(Utc::now(), days)?;
        info!(%start, %end, "Searching for incoming todos");

        let todos = todo_read
            .todos_expiring_between(start, end, &mut *ext_cxn)
            .await
            .context("fetching incoming todos")?;

        Ok(todos)
    }
}

#[cfg(test)]
mod tests {
    use super::test_util::*;
    use super::*;
    use crate::domain::test_util::Connectivity;
    use crate::domain::todo::driving_ports::TodoPort;
    use crate::external_connections;
    use chrono::TimeZone;
    use speculoos::prelude::*;
    use std::sync::RwLock;

    mod incoming_window {
        use super::*;

        fn morning() -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2030, 5, 1, 8, 0, 0).unwrap()
        }

        #[test]
        fn zero_days_covers_the_rest_of_today() {
            let window = incoming_window(morning(), 0.0);
            assert_that!(window).is_ok().is_equal_to((
                morning(),
                Utc.with_ymd_and_hms(2030, 5, 2, 0, 0, 0).unwrap(),
            ));
        }

        #[test]
        fn whole_days_extend_to_the_end_of_that_day() {
            let (_, end) = incoming_window(morning(), 3.0).unwrap();
            assert_eq!(Utc.with_ymd_and_hms(2030, 5, 5, 0, 0, 0).unwrap(), end);
        }

        #[test]
        fn fractional_days_extend_part_way() {
            let (_, end) = incoming_window(morning(), 0.5).unwrap();
            assert_eq!(Utc.with_ymd_and_hms(2030, 5, 2, 12, 0, 0).unwrap(), end);
        }

        #[test]
        fn rejects_non_finite_days() {
            assert!(matches!(
                incoming_window(morning(), f64::NAN),
                Err(TodoError::InvalidDayCount(_))
            ));
            assert!(matches!(
                incoming_window(morning(), f64::INFINITY),
                Err(TodoError::InvalidDayCount(_))
            ));
        }

        #[test]
        fn rejects_windows_past_the_calendar() {
            let window = incoming_window(morning(), 1e15);
            assert!(matches!(window, Err(TodoError::InvalidDayCount(_))));
        }
    }

    mod all_todos {
        use super::*;

        #[tokio::test]
        async fn happy_path() {
            let persist = RwLock::new(InMemoryTodoPersistence::new_with_todos(&[
                new_todo_default(),
                new_todo_titled("Second"),
            ]));
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            let todos = TodoService {}.all_todos(&mut ext_cxn, &persist).await;
            assert_that!(todos).is_ok().matches(|todos| {
                matches!(todos.as_slice(), [
                    Todo { id: 1, .. },
                    Todo { id: 2, title, .. },
                ] if title == "Second")
            });
        }

        #[tokio::test]
        async fn returns_port_err() {
            let mut raw_persist = InMemoryTodoPersistence::new();
            raw_persist.connected = Connectivity::Disconnected;
            let persist = RwLock::new(raw_persist);
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            let todos = TodoService {}.all_todos(&mut ext_cxn, &persist).await;
            assert_that!(todos).is_err();
        }
    }

    mod todo_by_id {
        use super::*;

        #[tokio::test]
        async fn happy_path() {
            let persist = RwLock::new(InMemoryTodoPersistence::new_with_todos(&[
                new_todo_default(),
                new_todo_titled("Find me"),
            ]));
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            let todo = TodoService {}.todo_by_id(2, &mut ext_cxn, &persist).await;
            assert_that!(todo)
                .is_ok()
                .is_some()
                .matches(|todo| todo.id == 2 && todo.title == "Find me");
        }

        #[tokio::test]
        async fn happy_path_not_found() {
            let persist = InMemoryTodoPersistence::new_locked();
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            let todo = TodoService {}.todo_by_id(7, &mut ext_cxn, &persist).await;
            assert_that!(todo).is_ok().is_none();
        }
    }

    mod create_todo {
        use super::*;

        #[tokio::test]
        async fn happy_path() {
            let persist = InMemoryTodoPersistence::new_locked();
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();
            let new_todo = new_todo_default();

            let created = TodoService {}
                .create_todo(&new_todo, &mut ext_cxn, &persist)
                .await;
            assert_that!(created)
                .is_ok()
                .is_equal_to(new_todo.with_id(1));

            let locked_persist = persist.read().expect("todo persist rw lock poisoned");
            assert_eq!(vec![new_todo.with_id(1)], locked_persist.todos);
        }

        #[tokio::test]
        async fn returns_port_err() {
            let mut raw_persist = InMemoryTodoPersistence::new();
            raw_persist.connected = Connectivity::Disconnected;
            let persist = RwLock::new(raw_persist);
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            let created = TodoService {}
                .create_todo(&new_todo_default(), &mut ext_cxn, &persist)
                .await;
            assert_that!(created).is_err();
        }
    }

    mod update_todo {
        use super::*;

        #[tokio::test]
        async fn happy_path() {
            let persist = RwLock::new(InMemoryTodoPersistence::new_with_todos(&[
                new_todo_default(),
                new_todo_default(),
            ]));
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();
            let replacement = Todo {
                id: 2,
                title: "Replaced".to_owned(),
                description: None,
                expiration_date: Utc.with_ymd_and_hms(2031, 1, 1, 0, 0, 0).unwrap(),
                percentage_of_completion: 40,
            };

            let updated = TodoService {}
                .update_todo(&replacement, &mut ext_cxn, &persist)
                .await;
            assert_that!(updated).is_ok().is_equal_to(&replacement);

            let locked_persist = persist.read().expect("todo persist rw lock poisoned");
            assert_eq!(replacement, locked_persist.todos[1]);
        }

        #[tokio::test]
        async fn happy_path_todo_doesnt_exist() {
            let persist = InMemoryTodoPersistence::new_locked();
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();
            let ghost = new_todo_default().with_id(12);

            let updated = TodoService {}
                .update_todo(&ghost, &mut ext_cxn, &persist)
                .await;
            assert_that!(updated).is_ok();

            let locked_persist = persist.read().expect("todo persist rw lock poisoned");
            assert!(locked_persist.todos.is_empty());
        }
    }

    mod delete_todo {
        use super::*;

        #[tokio::test]
        async fn happy_path() {
            let persist = RwLock::new(InMemoryTodoPersistence::new_with_todos(&[
                new_todo_titled("Keep"),
                new_todo_titled("Remove"),
            ]));
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            let delete_result = TodoService {}
                .delete_todo(2, &mut ext_cxn, &persist, &persist)
                .await;
            assert_that!(delete_result).is_ok();

            let lookup = TodoService {}.todo_by_id(2, &mut ext_cxn, &persist).await;
            assert_that!(lookup).is_ok().is_none();

            let locked_persist = persist.read().expect("todo persist rw lock poisoned");
            assert!(matches!(locked_persist.todos.as_slice(), [
                Todo { id: 1, title, .. }
            ] if title == "Keep"));
        }

        #[tokio::test]
        async fn fails_if_todo_doesnt_exist() {
            let persist = InMemoryTodoPersistence::new_locked();
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            let delete_result = TodoService {}
                .delete_todo(5, &mut ext_cxn, &persist, &persist)
                .await;
            let Err(TodoError::TodoDoesNotExist(5)) = delete_result else {
                panic!("Did not get expected error, instead got this: {delete_result:#?}");
            };
        }

        #[tokio::test]
        async fn returns_port_err() {
            let persist = RwLock::new(InMemoryTodoPersistence::new_with_todos(&[
                new_todo_default(),
            ]));
            {
                let mut locked_persist = persist.write().expect("todo persist rw lock poisoned");
                locked_persist.connected = Connectivity::Disconnected;
            }
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            let delete_result = TodoService {}
                .delete_todo(1, &mut ext_cxn, &persist, &persist)
                .await;
            assert!(matches!(delete_result, Err(TodoError::PortError(_))));
        }
    }

    mod mark_todo_done {
        use super::*;

        #[tokio::test]
        async fn happy_path() {
            let mut halfway = new_todo_default();
            halfway.percentage_of_completion = 55;
            let persist = RwLock::new(InMemoryTodoPersistence::new_with_todos(&[halfway]));
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            let marked = TodoService {}
                .mark_todo_done(1, &mut ext_cxn, &persist, &persist)
                .await;
            assert_that!(marked)
                .is_ok()
                .matches(|todo| todo.percentage_of_completion == 100);

            let locked_persist = persist.read().expect("todo persist rw lock poisoned");
            assert_eq!(100, locked_persist.todos[0].percentage_of_completion);
        }

        #[tokio::test]
        async fn fails_if_todo_doesnt_exist() {
            let persist = InMemoryTodoPersistence::new_locked();
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            let marked = TodoService {}
                .mark_todo_done(3, &mut ext_cxn, &persist, &persist)
                .await;
            assert!(matches!(marked, Err(TodoError::TodoDoesNotExist(3))));
        }
    }

    mod change_todo_percentage {
        use super::*;

        #[tokio::test]
        async fn happy_path() {
            let original = new_todo_default();
            let persist = RwLock::new(InMemoryTodoPersistence::new_with_todos(&[
                original.clone()
            ]));
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            let changed = TodoService {}
                .change_todo_percentage(1, 20, &mut ext_cxn, &persist, &persist)
                .await;

            let mut expected = original.with_id(1);
            expected.percentage_of_completion = 20;
            assert_that!(changed).is_ok().is_equal_to(&expected);

            let locked_persist = persist.read().expect("todo persist rw lock poisoned");
            assert_eq!(expected, locked_persist.todos[0]);
        }

        #[tokio::test]
        async fn rejects_percentage_over_100() {
            let persist = RwLock::new(InMemoryTodoPersistence::new_with_todos(&[
                new_todo_default(),
            ]));
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            let changed = TodoService {}
                .change_todo_percentage(1, 120, &mut ext_cxn, &persist, &persist)
                .await;
            assert!(matches!(changed, Err(TodoError::InvalidPercentage(120))));

            let locked_persist = persist.read().expect("todo persist rw lock poisoned");
            assert_eq!(0, locked_persist.todos[0].percentage_of_completion);
        }

        #[tokio::test]
        async fn rejects_negative_percentage() {
            let persist = RwLock::new(InMemoryTodoPersistence::new_with_todos(&[
                new_todo_default(),
            ]));
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            let changed = TodoService {}
                .change_todo_percentage(1, -1, &mut ext_cxn, &persist, &persist)
                .await;
            assert!(matches!(changed, Err(TodoError::InvalidPercentage(-1))));
        }

        #[tokio::test]
        async fn missing_todo_wins_over_bad_percentage() {
            let persist = InMemoryTodoPersistence::new_locked();
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            let changed = TodoService {}
                .change_todo_percentage(9, 120, &mut ext_cxn, &persist, &persist)
                .await;
            assert!(matches!(changed, Err(TodoError::TodoDoesNotExist(9))));
        }
    }

    mod incoming_todos {
        use super::*;

        #[tokio::test]
        async fn finds_todos_expiring_soon() {
            let now = Utc::now();
            let mut soon = new_todo_titled("Soon");
            // Stays inside today no matter when the test runs
            soon.expiration_date = now + (incoming_window(now, 0.0).unwrap().1 - now) / 2;
            let mut later = new_todo_titled("Later");
            later.expiration_date = now + TimeDelta::days(10);
            let mut overdue = new_todo_titled("Overdue");
            overdue.expiration_date = now - TimeDelta::hours(1);

            let persist = RwLock::new(InMemoryTodoPersistence::new_with_todos(&[
                soon, later, overdue,
            ]));
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            let incoming = TodoService {}
                .incoming_todos(0.0, &mut ext_cxn, &persist)
                .await;
            assert_that!(incoming).is_ok().matches(|todos| {
                matches!(todos.as_slice(), [Todo { title, .. }] if title == "Soon")
            });
        }

        #[tokio::test]
        async fn longer_windows_include_later_todos() {
            let now = Utc::now();
            let mut later = new_todo_titled("Later");
            later.expiration_date = now + TimeDelta::days(10);
            let persist = RwLock::new(InMemoryTodoPersistence::new_with_todos(&[later]));
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            let incoming = TodoService {}
                .incoming_todos(10.0, &mut ext_cxn, &persist)
                .await;
            assert_that!(incoming).is_ok().has_length(1);
        }

        #[tokio::test]
        async fn rejects_bad_day_count() {
            let persist = InMemoryTodoPersistence::new_locked();
            let mut ext_cxn = external_connections::test_util::FakeExternalConnectivity::new();

            let incoming = TodoService {}
                .incoming_todos(f64::NAN, &mut ext_cxn, &persist)
                .await;
            assert!(matches!(incoming, Err(TodoError::InvalidDayCount(_))));
        }
    }
}
