use crate::config::ApiSettings;
use crate::models::{Exercise, UserPreferences, WorkoutPlan};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the workout service
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP client could not be built: {0}")]
    Client(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned status {0}")]
    Status(StatusCode),

    #[error("Invalid response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

/// Anything that can turn preferences into a plan.
///
/// Implementations are called from a worker thread, never from the UI thread.
pub trait PlanGenerator: Send + Sync {
    fn generate_plan(&self, preferences: &UserPreferences) -> Result<WorkoutPlan, ApiError>;
}

/// Client for the workout planning service
///
/// The base endpoint is fixed when the client is built.
pub struct WorkoutApi {
    base_url: String,
    client: Client,
}

impl WorkoutApi {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        // `None` disables reqwest's built-in 30s default.
        let timeout = settings.timeout_secs.map(Duration::from_secs);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST {base}/generate-plan
    pub fn generate_workout_plan(
        &self,
        preferences: &UserPreferences,
    ) -> Result<WorkoutPlan, ApiError> {
        let url = format!("{}/generate-plan", self.base_url);

        tracing::debug!(
            "Requesting plan from {} (level: {:?}, days: {}, goals: {})",
            url,
            preferences.level,
            preferences.days.count(),
            preferences.goals.len()
        );

        let response = self.client.post(&url).json(preferences).send()?;
        read_json(response)
    }

    /// GET {base}/exercises
    pub fn list_exercises(&self) -> Result<Vec<Exercise>, ApiError> {
        let url = format!("{}/exercises", self.base_url);
        tracing::debug!("Fetching exercises from: {}", url);

        let response = self.client.get(&url).send()?;
        read_json(response)
    }

    /// GET {base}/exercises/muscle/{group}
    ///
    /// The group is inserted into the path as given.
    pub fn exercises_by_muscle(&self, muscle_group: &str) -> Result<Vec<Exercise>, ApiError> {
        let url = format!("{}/exercises/muscle/{}", self.base_url, muscle_group);
        tracing::debug!("Fetching {} exercises from: {}", muscle_group, url);

        let response = self.client.get(&url).send()?;
        read_json(response)
    }
}

impl PlanGenerator for WorkoutApi {
    fn generate_plan(&self, preferences: &UserPreferences) -> Result<WorkoutPlan, ApiError> {
        self.generate_workout_plan(preferences)
    }
}

fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_else(|_| "Unable to read body".to_string());
        tracing::debug!("Service answered {}: {}", status, body);
        return Err(ApiError::Status(status));
    }

    let body = response.text()?;
    Ok(serde_json::from_str(&body)?)
}
