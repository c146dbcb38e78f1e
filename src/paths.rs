// REST path constants for the study-planner backend

pub mod api_path {
    // Session
    pub const SESSION: &str = "/session";

    // Subject
    pub const SUBJECT: &str = "/subject";
    pub const SUBJECT_BY_DATE: &str = "/subject/bydate";
}
