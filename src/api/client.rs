//! HTTP client for the course backend.
//!
//! One method per REST endpoint. Each call makes exactly one request,
//! logs any failure with its operation label and hands the error back
//! unchanged. Nothing is retried or cached.

use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::endpoints;
use super::tracker::RequestTracker;
use crate::adapters::ReqwestHttpClient;
use crate::config::ClientConfig;
use crate::error::{classify_http_error, extract_server_message, ApiError, ConfigError, ShapeError};
use crate::models::{CareerPath, Course, CourseDetails, CoursesReport, PatchCourseProgressParams, RoadMap};
use crate::traits::{Headers, HttpClient, Response};

/// Acknowledgment of an enrollment request.
///
/// The backend's enrollment response is not documented, so the status and
/// raw body are kept as they arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentAck {
    pub status: u16,
    pub body: String,
}

impl EnrollmentAck {
    /// Body parsed as JSON, if it is JSON.
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }
}

#[derive(Debug, Clone, Copy)]
enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }
}

/// Client for the course, roadmap and career path endpoints.
#[derive(Clone)]
pub struct CoursesClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
    tracker: RequestTracker,
    headers: Headers,
}

impl std::fmt::Debug for CoursesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoursesClient")
            .field("base_url", &self.base_url)
            .field("in_flight", &self.tracker.in_flight())
            .finish()
    }
}

impl CoursesClient {
    /// Create a client backed by reqwest with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, Arc::new(ReqwestHttpClient::new()))
    }

    /// Create a client over any [`HttpClient`].
    pub fn with_http(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tracker: RequestTracker::new(),
            headers,
        }
    }

    /// Create a reqwest-backed client from loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        let http = ReqwestHttpClient::with_timeout(config.timeout)
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self::with_http(config.base_url.clone(), Arc::new(http)))
    }

    /// Share an existing tracker, so several clients feed one indicator.
    pub fn with_tracker(mut self, tracker: RequestTracker) -> Self {
        self.tracker = tracker;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Tracker counting this client's in-flight reads and progress updates.
    pub fn tracker(&self) -> &RequestTracker {
        &self.tracker
    }

    // ------------------------------------------------------------------
    // Career paths and roadmaps
    // ------------------------------------------------------------------

    pub async fn list_career_paths(&self) -> Result<Vec<CareerPath>, ApiError> {
        self.fetch("list_career_paths", "CareerPath list", &endpoints::career_paths())
            .await
    }

    pub async fn get_career_path(&self, id: &str) -> Result<CareerPath, ApiError> {
        self.fetch("get_career_path", "CareerPath", &endpoints::career_path(id))
            .await
    }

    pub async fn list_road_maps(&self) -> Result<Vec<RoadMap>, ApiError> {
        self.fetch("list_road_maps", "RoadMap list", &endpoints::road_maps())
            .await
    }

    pub async fn get_road_map(&self, id: &str) -> Result<RoadMap, ApiError> {
        self.fetch("get_road_map", "RoadMap", &endpoints::road_map(id))
            .await
    }

    // ------------------------------------------------------------------
    // Courses
    // ------------------------------------------------------------------

    pub async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.fetch("list_courses", "Course list", &endpoints::courses())
            .await
    }

    /// Fetch a course with its full module tree.
    pub async fn get_course(&self, id: &str) -> Result<CourseDetails, ApiError> {
        self.fetch("get_course", "CourseDetails", &endpoints::course(id))
            .await
    }

    pub async fn get_course_report(&self) -> Result<CoursesReport, ApiError> {
        self.fetch("get_course_report", "CoursesReport", &endpoints::course_report())
            .await
    }

    // ------------------------------------------------------------------
    // Enrollment (untracked)
    // ------------------------------------------------------------------

    pub async fn enroll_course(&self, id: &str) -> Result<EnrollmentAck, ApiError> {
        self.enroll("enroll_course", &endpoints::enroll_course(id))
            .await
    }

    pub async fn enroll_road_map(&self, id: &str) -> Result<EnrollmentAck, ApiError> {
        self.enroll("enroll_road_map", &endpoints::enroll_road_map(id))
            .await
    }

    pub async fn enroll_career_path(&self, id: &str) -> Result<EnrollmentAck, ApiError> {
        self.enroll("enroll_career_path", &endpoints::enroll_career_path(id))
            .await
    }

    // ------------------------------------------------------------------
    // Progress
    // ------------------------------------------------------------------

    /// Update a material's progress for a user. Returns whatever the
    /// server sent back; an empty body yields `Value::Null`.
    pub async fn patch_course_progress(
        &self,
        params: &PatchCourseProgressParams,
    ) -> Result<serde_json::Value, ApiError> {
        const OPERATION: &str = "patch_course_progress";
        let _guard = self.tracker.track(OPERATION);
        let body = serde_json::to_string(&params.material).map_err(|e| {
            log_failure(ApiError::Shape {
                operation: OPERATION,
                source: ShapeError::from_json("MaterialPatch", &e),
            })
        })?;
        let response = self
            .send(OPERATION, Method::Patch, &endpoints::course_progress(params), Some(&body))
            .await?;
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::Value::Null);
        }
        decode(OPERATION, "progress response", &response)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    async fn fetch<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        entity: &'static str,
        path: &str,
    ) -> Result<T, ApiError> {
        let _guard = self.tracker.track(operation);
        let response = self.send(operation, Method::Get, path, None).await?;
        decode(operation, entity, &response)
    }

    async fn enroll(&self, operation: &'static str, path: &str) -> Result<EnrollmentAck, ApiError> {
        let response = self.send(operation, Method::Post, path, Some("{}")).await?;
        let ack = EnrollmentAck {
            status: response.status,
            body: String::from_utf8_lossy(&response.body).into_owned(),
        };
        tracing::info!(operation, status = ack.status, "enrollment accepted");
        Ok(ack)
    }

    /// Issue one request. Transport failures and non-2xx statuses become
    /// `ApiError`s, logged here.
    async fn send(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: Option<&str>,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(operation, method = method.as_str(), %url, "sending request");

        let result = match method {
            Method::Get => self.http.get(&url, &self.headers).await,
            Method::Post => self.http.post(&url, body.unwrap_or(""), &self.headers).await,
            Method::Patch => self.http.patch(&url, body.unwrap_or(""), &self.headers).await,
        };

        let response = result.map_err(|e| {
            log_failure(ApiError::Transport {
                operation,
                source: classify_http_error(&e, &url),
            })
        })?;

        if !response.is_success() {
            return Err(log_failure(ApiError::Http {
                operation,
                status: response.status,
                message: extract_server_message(&response.body),
            }));
        }

        tracing::debug!(operation, status = response.status, bytes = response.body.len(), "response received");
        Ok(response)
    }
}

fn decode<T: DeserializeOwned>(
    operation: &'static str,
    entity: &'static str,
    response: &Response,
) -> Result<T, ApiError> {
    response.json::<T>().map_err(|e| {
        log_failure(ApiError::Shape {
            operation,
            source: ShapeError::from_json(entity, &e),
        })
    })
}

fn log_failure(err: ApiError) -> ApiError {
    tracing::error!(
        operation = err.operation(),
        code = err.error_code(),
        status = err.status(),
        error = %err,
        "API request failed"
    );
    err
}
