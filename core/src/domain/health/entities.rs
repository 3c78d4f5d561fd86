use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub status: String,
    /// Round-trip of `SELECT 1` in milliseconds.
    pub latency_ms: u64,
}
