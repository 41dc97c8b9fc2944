use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use log::debug;
use serde::de::DeserializeOwned;
use shared::{
    Category, CategoryCriteria, CategoryUpsertRequest, Expense, ExpenseCriteria,
    ExpenseUpsertRequest, Page, User,
};

use super::error::ApiError;
use crate::config::DEFAULT_API_URL;

/// Expense endpoints of the REST API
#[async_trait(?Send)]
pub trait ExpenseApi {
    async fn list_expenses(&self, criteria: &ExpenseCriteria) -> Result<Page<Expense>, ApiError>;

    /// Create when `request.id` is absent, update otherwise
    async fn upsert_expense(&self, request: &ExpenseUpsertRequest) -> Result<Expense, ApiError>;

    async fn delete_expense(&self, id: &str) -> Result<(), ApiError>;
}

/// Category endpoints of the REST API
#[async_trait(?Send)]
pub trait CategoryApi {
    async fn list_categories(&self, criteria: &CategoryCriteria) -> Result<Vec<Category>, ApiError>;

    async fn upsert_category(&self, request: &CategoryUpsertRequest) -> Result<Category, ApiError>;

    async fn delete_category(&self, id: &str) -> Result<(), ApiError>;
}

/// API client for communicating with the expense backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The signed-in user, or `None` when the API answers 401/403
    pub async fn current_user(&self) -> Result<Option<User>, ApiError> {
        let url = format!("{}/auth/me", self.base_url);
        let response = Request::get(&url).send().await.map_err(network_error)?;

        match response.status() {
            401 | 403 => Ok(None),
            _ => parse_json(response).await.map(Some),
        }
    }

    fn expenses_url(&self) -> String {
        format!("{}/expenses", self.base_url)
    }

    fn categories_url(&self) -> String {
        format!("{}/categories", self.base_url)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ExpenseApi for ApiClient {
    async fn list_expenses(&self, criteria: &ExpenseCriteria) -> Result<Page<Expense>, ApiError> {
        let params = criteria.query_pairs();
        debug!("GET /expenses {:?}", params);

        let response = Request::get(&self.expenses_url())
            .query(params.iter().map(|(key, value)| (*key, value.as_str())))
            .send()
            .await
            .map_err(network_error)?;

        parse_json(response).await
    }

    async fn upsert_expense(&self, request: &ExpenseUpsertRequest) -> Result<Expense, ApiError> {
        request.validate().map_err(ApiError::InvalidInput)?;
        debug!("PUT /expenses id={:?}", request.id);

        let response = Request::put(&self.expenses_url())
            .json(request)
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(network_error)?;

        parse_json(response).await
    }

    async fn delete_expense(&self, id: &str) -> Result<(), ApiError> {
        debug!("DELETE /expenses/{}", id);
        let url = format!("{}/{}", self.expenses_url(), id);
        let response = Request::delete(&url).send().await.map_err(network_error)?;
        expect_success(response).await
    }
}

#[async_trait(?Send)]
impl CategoryApi for ApiClient {
    async fn list_categories(&self, criteria: &CategoryCriteria) -> Result<Vec<Category>, ApiError> {
        let params = criteria.query_pairs();
        let response = Request::get(&self.categories_url())
            .query(params.iter().map(|(key, value)| (*key, value.as_str())))
            .send()
            .await
            .map_err(network_error)?;

        parse_json(response).await
    }

    async fn upsert_category(&self, request: &CategoryUpsertRequest) -> Result<Category, ApiError> {
        request.validate().map_err(ApiError::InvalidCategory)?;

        let response = Request::put(&self.categories_url())
            .json(request)
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(network_error)?;

        parse_json(response).await
    }

    async fn delete_category(&self, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/{}", self.categories_url(), id);
        let response = Request::delete(&url).send().await.map_err(network_error)?;
        expect_success(response).await
    }
}

fn network_error(error: gloo::net::Error) -> ApiError {
    ApiError::Network(error.to_string())
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn expect_success(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::from_status(status, &body)
}
