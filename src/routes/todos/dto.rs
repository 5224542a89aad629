use chrono::{DateTime, Datelike, NaiveDate};
use std::ops::RangeInclusive;
use serde::Deserialize;

use crate::error::AppError;
use crate::routes::csrf::CarriesCsrfToken;
use super::model::NewTodo;

#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "dueDate")]
    pub due_date: String,
    pub completed: Option<bool>,
    #[serde(rename = "_csrf")]
    pub csrf: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub completed: bool,
    #[serde(rename = "_csrf")]
    pub csrf: Option<String>,
}

/// Body of routes that take no input besides the anti-forgery token.
#[derive(Debug, Default, Deserialize)]
pub struct TokenOnly {
    #[serde(rename = "_csrf")]
    pub csrf: Option<String>,
}

impl CreateTodo {
    pub fn validate(self) -> Result<NewTodo, AppError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(AppError::Validation("title cannot be empty".to_string()));
        }

        let due_date = parse_due_date(&self.due_date).ok_or_else(|| {
            AppError::Validation(format!("invalid due date {:?}", self.due_date))
        })?;

        Ok(NewTodo {
            title: title.to_string(),
            due_date,
            completed: self.completed.unwrap_or(false),
        })
    }
}

/// Years a Postgres `DATE` column stores without error.
const STORABLE_YEARS: RangeInclusive<i32> = 1..=9999;

/// Accepts a calendar date (`2024-05-01`) or an RFC 3339 timestamp, whose UTC date is used.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|ts| ts.naive_utc().date())
    })?;

    STORABLE_YEARS.contains(&date.year()).then_some(date)
}

impl CarriesCsrfToken for CreateTodo {
    fn csrf_token(&self) -> Option<&str> {
        self.csrf.as_deref()
    }
}

impl CarriesCsrfToken for UpdateTodo {
    fn csrf_token(&self) -> Option<&str> {
        self.csrf.as_deref()
    }
}

impl CarriesCsrfToken for TokenOnly {
    fn csrf_token(&self) -> Option<&str> {
        self.csrf.as_deref()
    }
}
