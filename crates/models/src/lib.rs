//! Response payloads shared between the server and its clients.

use serde::{Deserialize, Serialize};

pub const GREETING: &str = "Good Morning!";
pub const HEALTHY: &str = "OK";

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

impl RootResponse {
    pub fn good_morning() -> Self {
        Self {
            message: GREETING.to_owned(),
        }
    }
}

/// Body of `GET /health`
///
/// This is a liveness probe only: a process that can answer at all reports `OK`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: HEALTHY.to_owned(),
        }
    }
}
