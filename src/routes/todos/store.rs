use async_trait::async_trait;
use chrono::Utc;
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

use crate::error::AppError;
use super::model::{NewTodo, Todo};

/// Persistence for todos. Every method is a single atomic read or write.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Succeeds when the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;

    async fn create(&self, new_todo: NewTodo) -> Result<Todo, AppError>;

    /// All todos in creation order.
    async fn list(&self) -> Result<Vec<Todo>, AppError>;

    /// Fails with [`AppError::NotFound`] when no todo has this id.
    async fn set_completed(&self, id: Uuid, completed: bool) -> Result<Todo, AppError>;

    /// Returns whether a todo was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}

/// Keeps todos in process memory; used for tests and when no database is configured.
#[derive(Default)]
pub struct InMemoryTodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn create(&self, new_todo: NewTodo) -> Result<Todo, AppError> {
        let now = Utc::now();
        let todo = Todo {
            id: Uuid::new_v4(),
            title: new_todo.title,
            due_date: new_todo.due_date,
            completed: new_todo.completed,
            created_at: now,
            updated_at: now,
        };

        self.todos
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(todo.clone());

        Ok(todo)
    }

    async fn list(&self) -> Result<Vec<Todo>, AppError> {
        Ok(self
            .todos
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    async fn set_completed(&self, id: Uuid, completed: bool) -> Result<Todo, AppError> {
        let mut todos = self.todos.write().unwrap_or_else(PoisonError::into_inner);
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(AppError::NotFound)?;

        todo.completed = completed;
        todo.updated_at = Utc::now();

        Ok(todo.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut todos = self.todos.write().unwrap_or_else(PoisonError::into_inner);
        let before = todos.len();
        todos.retain(|t| t.id != id);

        Ok(todos.len() < before)
    }
}
