//! Resilient service layer with fallback values
//!
//! Wraps [`StudyPlanClient`] for callers that must never see an error: each
//! failed operation is logged, reported to the user exactly once through the
//! injected [`Notifier`], and replaced with a safe fallback (empty list,
//! `None`, or `false`).

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::error;

use crate::api::StudyPlanClient;
use crate::error::ClientError;
use crate::model::{NewSession, NewSubject, Session, Subject};
use crate::notify::{LogNotifier, Notifier};

/// Service layer that swallows errors into fallbacks and user notifications
pub struct ResilientClient {
    api: StudyPlanClient,
    notifier: Arc<dyn Notifier>,
}

impl ResilientClient {
    /// Create a resilient client reporting failures to the given notifier
    pub fn new(api: StudyPlanClient, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, notifier }
    }

    /// Create a resilient client that reports failures to the log only
    pub fn with_log_notifier(api: StudyPlanClient) -> Self {
        Self::new(api, Arc::new(LogNotifier))
    }

    /// Get the underlying typed API client
    pub fn api(&self) -> &StudyPlanClient {
        &self.api
    }

    // ============== Session APIs ==============

    /// List all sessions; empty on failure
    pub async fn sessions(&self) -> Vec<Session> {
        match self.api.sessions().await {
            Ok(sessions) => sessions,
            Err(e) => {
                self.report("failed to load sessions", &e);
                Vec::new()
            }
        }
    }

    /// List sessions planned for a date; empty on failure
    pub async fn sessions_by_date(&self, date: NaiveDate) -> Vec<Session> {
        match self.api.sessions_by_date(date).await {
            Ok(sessions) => sessions,
            Err(e) => {
                self.report("failed to load sessions", &e);
                Vec::new()
            }
        }
    }

    /// Create a session; `None` on failure
    pub async fn create_session(&self, session: &NewSession) -> Option<Session> {
        match self.api.create_session(session).await {
            Ok(created) => Some(created),
            Err(e) => {
                self.report("failed to create session", &e);
                None
            }
        }
    }

    // ============== Subject APIs ==============

    /// List all subjects; empty on failure
    pub async fn subjects(&self) -> Vec<Subject> {
        match self.api.subjects().await {
            Ok(subjects) => subjects,
            Err(e) => {
                self.report("failed to load subjects", &e);
                Vec::new()
            }
        }
    }

    /// List subjects scheduled for a date; empty on failure
    pub async fn subjects_by_date(&self, date: NaiveDate) -> Vec<Subject> {
        match self.api.subjects_by_date(date).await {
            Ok(subjects) => subjects,
            Err(e) => {
                self.report("failed to load subjects", &e);
                Vec::new()
            }
        }
    }

    /// Create a subject; `None` on failure
    pub async fn create_subject(&self, subject: &NewSubject) -> Option<Subject> {
        match self.api.create_subject(subject).await {
            Ok(created) => Some(created),
            Err(e) => {
                self.report("failed to create subject", &e);
                None
            }
        }
    }

    /// Delete a subject by id; `false` on failure
    pub async fn delete_subject(&self, subject_id: i64) -> bool {
        match self.api.delete_subject(subject_id).await {
            Ok(()) => true,
            Err(e) => {
                self.report("failed to delete subject", &e);
                false
            }
        }
    }

    /// Log the failure and notify the user once
    fn report(&self, what: &str, err: &ClientError) {
        error!("{what}: {err}");
        self.notifier.notify_error(&format!("{what}: {err}"));
    }
}
