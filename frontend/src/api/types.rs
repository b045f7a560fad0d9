use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{collections::BTreeMap, fmt, str::FromStr};

pub const CODE_VALIDATION: &str = "VALIDATION_ERROR";
pub const CODE_HTTP: &str = "HTTP_ERROR";
pub const CODE_REQUEST_FAILED: &str = "REQUEST_FAILED";
pub const CODE_PARSE: &str = "PARSE_ERROR";
pub const CODE_UNKNOWN: &str = "UNKNOWN";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Employee,
    Manager,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Employee => "EMPLOYEE",
            Role::Manager => "MANAGER",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::Manager => "Manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "EMPLOYEE" => Ok(Role::Employee),
            "MANAGER" => Ok(Role::Manager),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveType {
    Medical,
    #[default]
    Sick,
    Privileged,
}

impl LeaveType {
    pub const ALL: [LeaveType; 3] = [LeaveType::Medical, LeaveType::Sick, LeaveType::Privileged];

    pub fn as_str(self) -> &'static str {
        match self {
            LeaveType::Medical => "MEDICAL",
            LeaveType::Sick => "SICK",
            LeaveType::Privileged => "PRIVILEGED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LeaveType::Medical => "Medical",
            LeaveType::Sick => "Sick",
            LeaveType::Privileged => "Privileged",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "MEDICAL" => Ok(LeaveType::Medical),
            "SICK" => Ok(LeaveType::Sick),
            "PRIVILEGED" => Ok(LeaveType::Privileged),
            other => Err(format!("unknown leave type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLeaveRequest {
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A leave row as returned by `/leaves/mine`, `/leaves/pending` and
/// `POST /leaves`. Each endpoint fills a different subset of the fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRecord {
    pub id: i64,
    #[serde(rename = "type")]
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub decision_remark: Option<String>,
    #[serde(default)]
    pub employee_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRequest {
    pub remark: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEntry {
    pub allowed: i64,
    pub taken: i64,
    pub remaining: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    pub user_id: i64,
    #[serde(default)]
    pub name: String,
    pub year: i32,
    #[serde(default)]
    pub balances: BTreeMap<String, BalanceEntry>,
}

/// Structured body of a 400 answer to `POST /leaves` when the requested days
/// exceed what is left for the leave type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BalanceShortfall {
    #[serde(rename = "type", default)]
    pub leave_type: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub allowed: Option<i64>,
    #[serde(default)]
    pub taken: Option<i64>,
    pub remaining: i64,
    pub requested: i64,
}

impl BalanceShortfall {
    pub fn from_body(body: &Value) -> Option<Self> {
        if body.get("remaining").is_none() || body.get("requested").is_none() {
            return None;
        }
        serde_json::from_value(body.clone()).ok()
    }

    pub fn message(&self) -> String {
        format!(
            "Insufficient balance ({}): Allowed {}, Taken {}, Remaining {}, Requested {}.",
            self.leave_type.as_deref().unwrap_or("-"),
            display_count(self.allowed),
            display_count(self.taken),
            self.remaining,
            self.requested
        )
    }
}

fn display_count(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: CODE_VALIDATION.to_string(),
            status: None,
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: CODE_UNKNOWN.to_string(),
            status: None,
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: CODE_REQUEST_FAILED.to_string(),
            status: None,
            details: None,
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: CODE_PARSE.to_string(),
            status: None,
            details: None,
        }
    }

    /// Non-2xx answer. `body` is the decoded JSON payload, if any.
    pub fn http(status: u16, body: Option<Value>) -> Self {
        let message = body
            .as_ref()
            .and_then(body_message)
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status));
        Self {
            error: message,
            code: CODE_HTTP.to_string(),
            status: Some(status),
            details: body,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.code == CODE_VALIDATION
    }

    /// The `message` (or `error`) field of the server's error body.
    pub fn server_message(&self) -> Option<&str> {
        self.details.as_ref().and_then(body_message)
    }

    /// Text shown to the user: local validation text, else the server's
    /// message, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        if self.is_validation() {
            return self.error.clone();
        }
        self.server_message().unwrap_or(fallback).to_string()
    }
}

fn body_message(body: &Value) -> Option<&str> {
    ["message", "error"]
        .iter()
        .filter_map(|key| body.get(*key).and_then(Value::as_str))
        .find(|msg| !msg.trim().is_empty())
}
