// src/api.rs

//! Request/response contract of the schedule endpoint.
//!
//! The HTTP server itself lives elsewhere; this module holds what it needs:
//! - reject an empty request before the scheduler is called
//! - fill in missing due dates with the caller's "now"
//! - run the scheduler
//! - map every failure to a status code and a short message
//!
//! Bodies use the endpoint's JSON shape: `{"recommendedOrder": [...]}` on
//! success, `{"message": "..."}` on failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::ScheduleRequest;
use crate::dag::{DependencyScheduler, TaskName};
use crate::errors::{DuedagError, SchedulingError};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub recommended_order: Vec<TaskName>,
}

/// A rejected request: status code plus user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message} (status {status})")]
pub struct ApiError {
    #[serde(skip)]
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<&SchedulingError> for ApiError {
    fn from(err: &SchedulingError) -> Self {
        match err {
            SchedulingError::EmptyInput => ApiError::bad_request("No tasks provided"),
            SchedulingError::CyclicDependency { .. } => {
                ApiError::bad_request("Cyclic dependency detected")
            }
            SchedulingError::UnknownDependency { task, dependency } => ApiError::bad_request(
                format!("Unknown dependency '{dependency}' for task '{task}'"),
            ),
            SchedulingError::DuplicateTitle { title } => {
                ApiError::bad_request(format!("Duplicate task title '{title}'"))
            }
        }
    }
}

impl From<&DuedagError> for ApiError {
    fn from(err: &DuedagError) -> Self {
        match err {
            DuedagError::Scheduling(inner) => inner.into(),
            other => ApiError::bad_request(other.to_string()),
        }
    }
}

/// Status code and JSON body, ready to be written by an HTTP layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: Value,
}

/// The schedule endpoint, minus the transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleEndpoint {
    scheduler: DependencyScheduler,
}

impl ScheduleEndpoint {
    pub fn new(scheduler: DependencyScheduler) -> Self {
        Self { scheduler }
    }

    /// Handle a deserialized request. `now` is the due date given to tasks
    /// that do not carry one.
    pub fn handle(
        &self,
        request: ScheduleRequest,
        now: DateTime<Utc>,
    ) -> Result<ScheduleResponse, ApiError> {
        if request.tasks.is_empty() {
            warn!("schedule request rejected: no tasks provided");
            return Err(ApiError::from(&SchedulingError::EmptyInput));
        }

        let task_count = request.tasks.len();
        let descriptors = request.into_descriptors(now).map_err(|err| {
            warn!(error = %err, "schedule request rejected while reading tasks");
            ApiError::from(&err)
        })?;

        match self.scheduler.schedule(&descriptors) {
            Ok(order) => {
                info!(tasks = task_count, "schedule request ordered");
                Ok(ScheduleResponse {
                    recommended_order: order,
                })
            }
            Err(err) => {
                warn!(error = %err, kind = ?err.kind(), "schedule request rejected");
                Err(ApiError::from(&err))
            }
        }
    }

    /// Handle a raw JSON body and produce status + JSON reply.
    pub fn handle_json(&self, body: &str, now: DateTime<Utc>) -> ApiReply {
        let request: ScheduleRequest = match serde_json::from_str(body) {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "schedule request body is not valid JSON");
                return error_reply(&ApiError::bad_request(format!("Invalid request body: {err}")));
            }
        };

        match self.handle(request, now) {
            Ok(response) => ApiReply {
                status: STATUS_OK,
                body: json!({ "recommendedOrder": response.recommended_order }),
            },
            Err(err) => error_reply(&err),
        }
    }
}

fn error_reply(err: &ApiError) -> ApiReply {
    ApiReply {
        status: err.status,
        body: json!({ "message": err.message }),
    }
}
