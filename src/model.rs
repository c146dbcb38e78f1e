//! Model types for study-planner API requests and responses
//!
//! The backend speaks camelCase JSON and keys both resources by ISO dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A planned study session
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: i64,
    pub date: NaiveDate,
    pub subject_id: i64,
    pub duration_minutes: u32,
    #[serde(default)]
    pub notes: String,
}

/// Payload for creating a session; the server assigns the id
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub date: NaiveDate,
    pub subject_id: i64,
    pub duration_minutes: u32,
    #[serde(default)]
    pub notes: String,
}

/// A subject scheduled for study on a given date
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
}

/// Payload for creating a subject; the server assigns the id
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubject {
    pub name: String,
    pub date: NaiveDate,
}
