// This defines the JSON shapes the EASEL backend returns
// Parse them and turn the envelope into a Result the editor can use

use easel_model::{Design, NewProject};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Standard envelope around every backend response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            data: None,
            error: Some(ApiErrorBody {
                code: code.into(),
                message: message.into(),
                details: None,
            }),
        }
    }

    /// Unwrap the envelope: the payload on success, the remote error otherwise.
    pub fn into_result(self) -> Result<T, ApiError> {
        match (self.status, self.data, self.error) {
            (ResponseStatus::Success, Some(data), _) => Ok(data),
            (ResponseStatus::Success, None, _) => Err(ApiError::MissingData),
            (ResponseStatus::Error, _, Some(e)) => Err(ApiError::Remote {
                code: e.code,
                message: e.message,
            }),
            (ResponseStatus::Error, _, None) => Err(ApiError::Remote {
                code: "unknown".into(),
                message: "request failed without an error body".into(),
            }),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("server error {code}: {message}")]
    Remote { code: String, message: String },

    #[error("successful response carried no data")]
    MissingData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub total_items: u64,
    pub items_per_page: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl PaginationMeta {
    /// Derive page counts from totals. Pages are 1-based; a zero page size
    /// is treated as a single page holding everything.
    pub fn new(total_items: u64, items_per_page: u64, current_page: u64) -> Self {
        let total_pages = if items_per_page == 0 {
            u64::from(total_items > 0)
        } else {
            total_items.div_ceil(items_per_page)
        };
        let current_page = current_page.max(1);

        Self {
            total_items,
            items_per_page,
            current_page,
            total_pages,
            has_next_page: current_page < total_pages,
            has_prev_page: current_page > 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaginatedApiResponse<T> {
    pub status: ResponseStatus,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<T>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PaginationMeta>,
}

impl<T> PaginatedApiResponse<T> {
    /// Items plus pagination (if the server sent any).
    pub fn into_page(self) -> Result<(Vec<T>, Option<PaginationMeta>), ApiError> {
        let meta = self.meta;
        let items = ApiResponse {
            status: self.status,
            data: self.data,
            error: self.error,
        }
        .into_result()?;
        Ok((items, meta))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Free,
    Pro,
    Business,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub is_active: bool,
    pub plan: Plan,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_period_end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub subscription: Subscription,
}

/// A saved project. `json` is the canvas snapshot the editor last saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub json: String,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

impl Project {
    /// Parse the stored canvas state as a design.
    pub fn design(&self) -> anyhow::Result<Design> {
        Design::from_json(&self.json)
    }

    /// Request body to create a copy of this project's frame.
    pub fn as_new_project(&self) -> NewProject {
        NewProject::new(self.name.clone(), self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub json: String,
    pub preview_url: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl Template {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingInterval {
    Month,
    Year,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub interval: BillingInterval,
    pub features: Vec<String>,
}
