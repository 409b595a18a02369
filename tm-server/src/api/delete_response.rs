use serde::Serialize;

/// Store acknowledgment for delete operations. A count of zero means the
/// row was already gone, which is not an error.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted_count: u64,
}
