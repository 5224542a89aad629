use askama::Template;

use crate::error::AppError;
use super::grouping::GroupedTodos;
use super::model::Todo;

pub struct Section<'a> {
    pub id: &'static str,
    pub heading: &'static str,
    pub items: &'a [Todo],
}

/// Front page: the four buckets plus a create form carrying the anti-forgery token.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub csrf_token: &'a str,
    pub sections: [Section<'a>; 4],
}

impl<'a> IndexPage<'a> {
    pub fn new(grouped: &'a GroupedTodos, csrf_token: &'a str) -> Self {
        Self {
            csrf_token,
            sections: [
                Section { id: "overdue", heading: "Overdue", items: &grouped.overdue_items },
                Section { id: "due-today", heading: "Due Today", items: &grouped.due_today_items },
                Section { id: "due-later", heading: "Due Later", items: &grouped.due_later_items },
                Section { id: "completed", heading: "Completed Items", items: &grouped.completed_items },
            ],
        }
    }
}

pub fn render(grouped: &GroupedTodos, csrf_token: &str) -> Result<String, AppError> {
    IndexPage::new(grouped, csrf_token).render().map_err(|e| {
        tracing::error!("Failed to render front page: {:?}", e);
        AppError::Render(e)
    })
}
