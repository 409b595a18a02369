use serde::Serialize;

/// Store acknowledgment for update operations, mirroring the counts the
/// store reported.
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}
