//! studyplan-client - Rust SDK for the study-planner backend
//!
//! This crate provides:
//! - A shared pre-configured HTTP client (JSON content type, fixed timeouts)
//! - A typed API client with one method per REST endpoint
//! - Model types for sessions and subjects
//! - A resilient layer that reports failures through a pluggable notifier
//!   and returns safe fallbacks instead of propagating errors

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod notify;
pub mod paths;
pub mod resilient;

pub use api::StudyPlanClient;
pub use config::HttpClientConfig;
pub use error::{ClientError, Result};
pub use http::StudyPlanHttpClient;
pub use model::{NewSession, NewSubject, Session, Subject};
pub use notify::{LogNotifier, Notifier};
pub use resilient::ResilientClient;
