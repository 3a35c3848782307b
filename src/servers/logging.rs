/// Target used by the API server in its log records.
pub const API_LOG_TARGET: &str = "API";

/// This is the prefix used in logs to identify a started service.
///
/// For example:
///
/// ```text
/// 2024-06-25T12:36:25.025527Z  INFO API: Started on: http://0.0.0.0:8000
/// ```
pub const STARTED_ON: &str = "Started on";
