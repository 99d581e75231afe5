use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActivitiesError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    // Displays the bare message: callers show these strings as-is, both the
    // fixed literals and whatever the server put in its `error` field.
    #[error("{0}")]
    Api(String),
}
