use crate::auth;
use crate::config::Config;
use crate::error::ActivitiesError;
use crate::types::Activity;
use crate::Result;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;

/// Body message the server puts on a 404 when the requested day simply has
/// no activities. This is a normal empty-result signal, not a failure.
const NO_ACTIVITIES_MESSAGE: &str = "No activities found for the given day";

/// The main client for interacting with the activities API.
#[derive(Debug, Clone)]
pub struct ActivitiesClient {
    http_client: Client,
    base_url: String,
}

impl ActivitiesClient {
    /// Creates a new `ActivitiesClient` from a given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            http_client: Client::new(),
            base_url: config.api_base_url,
        }
    }

    /// Creates a new `ActivitiesClient` with a custom `reqwest::Client`, for
    /// callers that bring their own timeouts or proxy settings.
    pub fn with_client(client: Client, api_base_url: impl Into<String>) -> Self {
        Self {
            http_client: client,
            base_url: api_base_url.into(),
        }
    }

    // Every call carries both headers, GET and DELETE included.
    fn add_headers(&self, builder: RequestBuilder, access_token: Option<&str>) -> RequestBuilder {
        builder
            .header(AUTHORIZATION, auth::bearer_header(access_token))
            .header(CONTENT_TYPE, "application/json")
    }

    /// Lists the activities recorded for `selected_day`. An empty
    /// `selected_day` short-circuits to an empty list without a network
    /// call, and a 404 reporting no activities for the day is likewise a
    /// normal empty result rather than an error.
    pub async fn fetch_activities(
        &self,
        selected_day: &str,
        access_token: Option<&str>,
        cognito_username: &str,
    ) -> Result<Vec<Activity>> {
        if selected_day.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/api/activities/{}/day/{}",
            self.base_url, cognito_username, selected_day
        );

        let response = self
            .add_headers(self.http_client.get(&url), access_token)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            let body = response.text().await?;
            let value: Value = serde_json::from_str(&body)?;
            if value.get("message").and_then(Value::as_str) == Some(NO_ACTIVITIES_MESSAGE) {
                return Ok(Vec::new());
            }
            return Err(ActivitiesError::Api(
                "Failed to fetch activities".to_string(),
            ));
        }

        if !response.status().is_success() {
            return Err(ActivitiesError::Api(
                "Failed to fetch activities".to_string(),
            ));
        }

        let body = response.text().await?;
        let activities = serde_json::from_str(&body)?;
        Ok(activities)
    }

    /// Creates a new activity for the given user and returns the server's
    /// representation of it.
    pub async fn create_activity(
        &self,
        activity: &Activity,
        access_token: Option<&str>,
        cognito_username: &str,
    ) -> Result<Activity> {
        self.create_activity_inner(activity, access_token, cognito_username)
            .await
            .map_err(|err| {
                tracing::error!("Error creating activity");
                err
            })
    }

    async fn create_activity_inner(
        &self,
        activity: &Activity,
        access_token: Option<&str>,
        cognito_username: &str,
    ) -> Result<Activity> {
        let url = format!("{}/api/activities", self.base_url);
        let request_body = serde_json::json!({
            "userId": cognito_username,
            "endDate": activity.end_date,
            "data": activity,
        });

        let response = self
            .add_headers(self.http_client.post(&url), access_token)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response, "Failed to create driver").await);
        }

        let body = response.text().await?;
        let created = serde_json::from_str(&body)?;
        Ok(created)
    }

    /// Removes the activity identified by `end_date` + `activity_id` and
    /// returns the server's representation of the removed record.
    pub async fn remove_activity(
        &self,
        end_date: &str,
        activity_id: &str,
        access_token: Option<&str>,
        cognito_username: &str,
    ) -> Result<Activity> {
        self.remove_activity_inner(end_date, activity_id, access_token, cognito_username)
            .await
            .map_err(|err| {
                tracing::error!("Error removing activity");
                err
            })
    }

    async fn remove_activity_inner(
        &self,
        end_date: &str,
        activity_id: &str,
        access_token: Option<&str>,
        cognito_username: &str,
    ) -> Result<Activity> {
        let url = format!(
            "{}/api/activities/{}/{}/{}",
            self.base_url, cognito_username, end_date, activity_id
        );

        let response = self
            .add_headers(self.http_client.delete(&url), access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response, "Failed to remove driver").await);
        }

        let body = response.text().await?;
        let removed = serde_json::from_str(&body)?;
        Ok(removed)
    }
}

/// Builds the error for a failed create/remove response. The server reports
/// failures as `{"error": "..."}`; a missing, non-string, or empty field
/// falls back to `default_message`, while a body that is not JSON at all
/// surfaces as a parse error instead.
async fn api_error(response: Response, default_message: &str) -> ActivitiesError {
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => return ActivitiesError::Http(err),
    };
    let value: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(err) => return ActivitiesError::Json(err),
    };
    let message = value
        .get("error")
        .and_then(Value::as_str)
        .filter(|error| !error.is_empty())
        .unwrap_or(default_message);
    ActivitiesError::Api(message.to_string())
}
