use std::sync::Arc;

use crate::routes::todos::store::TodoStore;

#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(todos: impl TodoStore + 'static) -> Self {
        Self { todos: Arc::new(todos) }
    }
}
