//! Typed API client for study-planner operations
//!
//! One method per REST endpoint. All methods return the tagged [`Result`]
//! type; callers that want fallbacks instead of errors use
//! [`crate::resilient::ResilientClient`].

use chrono::NaiveDate;

use crate::config::HttpClientConfig;
use crate::error::Result;
use crate::http::StudyPlanHttpClient;
use crate::model::{NewSession, NewSubject, Session, Subject};
use crate::paths::api_path;

/// API client providing typed access to the study-planner backend
pub struct StudyPlanClient {
    http_client: StudyPlanHttpClient,
}

impl StudyPlanClient {
    /// Create a new API client with the given configuration
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let http_client = StudyPlanHttpClient::new(config)?;
        Ok(Self { http_client })
    }

    /// Create a new API client from a base URL, with default timeouts
    pub fn from_base_url(base_url: &str) -> Result<Self> {
        Self::new(HttpClientConfig::new(base_url))
    }

    /// Create a new API client around an existing HTTP client
    pub fn from_http_client(http_client: StudyPlanHttpClient) -> Self {
        Self { http_client }
    }

    /// Get the underlying HTTP client
    pub fn http_client(&self) -> &StudyPlanHttpClient {
        &self.http_client
    }

    // ============== Session APIs ==============

    /// List all sessions
    pub async fn sessions(&self) -> Result<Vec<Session>> {
        self.http_client.get(api_path::SESSION).await
    }

    /// List sessions planned for a date
    pub async fn sessions_by_date(&self, date: NaiveDate) -> Result<Vec<Session>> {
        let path = format!("{}/{}", api_path::SESSION, date);
        self.http_client.get(&path).await
    }

    /// Create a new session, returning the created record
    pub async fn create_session(&self, session: &NewSession) -> Result<Session> {
        self.http_client.post_json(api_path::SESSION, session).await
    }

    // ============== Subject APIs ==============

    /// List all subjects
    pub async fn subjects(&self) -> Result<Vec<Subject>> {
        self.http_client.get(api_path::SUBJECT).await
    }

    /// List subjects scheduled for a date
    pub async fn subjects_by_date(&self, date: NaiveDate) -> Result<Vec<Subject>> {
        let path = format!("{}/{}", api_path::SUBJECT_BY_DATE, date);
        self.http_client.get(&path).await
    }

    /// Create a new subject, returning the created record
    pub async fn create_subject(&self, subject: &NewSubject) -> Result<Subject> {
        self.http_client.post_json(api_path::SUBJECT, subject).await
    }

    /// Delete a subject by id
    pub async fn delete_subject(&self, subject_id: i64) -> Result<()> {
        let path = format!("{}/{}", api_path::SUBJECT, subject_id);
        self.http_client.delete(&path).await
    }
}
