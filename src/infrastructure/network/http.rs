// HTTP client utilities
use crate::domain::error::WorkflowError;
use reqwest::Client;

/// Create the HTTP client shared by all providers of one aggregation run.
///
/// The per-request deadline is enforced by the aggregator; this client
/// timeout is only a backstop for runs with a misconfigured deadline.
pub fn create_client() -> Result<Client, WorkflowError> {
    Ok(Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .user_agent("alfred-workflows/0.1.0")
        .build()?)
}
