//! reqwest-backed client for the REST surface under `/api`.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;
use crate::models::{Product, ProductPayload, RawMaterial, RawMaterialPayload, SuggestionReport};

/// Remote operations the entity stores depend on.
///
/// Every call is single-shot; retry policy, if any, belongs to the caller.
#[async_trait]
pub trait ProductionApi: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;
    async fn get_product(&self, id: i64) -> Result<Product, ApiError>;
    async fn create_product(&self, payload: &ProductPayload) -> Result<Product, ApiError>;
    async fn update_product(&self, id: i64, payload: &ProductPayload)
        -> Result<Product, ApiError>;
    async fn delete_product(&self, id: i64) -> Result<(), ApiError>;
    async fn get_suggestions(&self) -> Result<SuggestionReport, ApiError>;

    async fn list_raw_materials(&self) -> Result<Vec<RawMaterial>, ApiError>;
    async fn get_raw_material(&self, id: i64) -> Result<RawMaterial, ApiError>;
    async fn create_raw_material(
        &self,
        payload: &RawMaterialPayload,
    ) -> Result<RawMaterial, ApiError>;
    async fn update_raw_material(
        &self,
        id: i64,
        payload: &RawMaterialPayload,
    ) -> Result<RawMaterial, ApiError>;
    async fn delete_raw_material(&self, id: i64) -> Result<(), ApiError>;
}

/// HTTP client for the production-management API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    /// Creates a client against a base URL such as `http://localhost:8080/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turns a response into `Ok(Some(value))`, `Ok(None)` for a no-content
    /// acknowledgment, or a normalized failure.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<Option<T>, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "request failed: {}", text);
            return Err(ApiError::from_response(status.as_u16(), &text));
        }
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(None);
        }
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        tracing::debug!(path, "GET");
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        tracing::debug!(path, "POST");
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn put<T, B>(&self, path: &str, body: &B) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        tracing::debug!(path, "PUT");
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        tracing::debug!(path, "DELETE");
        let response = self.http.delete(self.url(path)).send().await?;
        Self::decode::<serde_json::Value>(response).await?;
        Ok(())
    }

    fn require<T>(value: Option<T>) -> Result<T, ApiError> {
        value.ok_or_else(|| ApiError::Decode("server returned an empty body".to_string()))
    }
}

#[async_trait]
impl ProductionApi for ApiClient {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        Ok(self.get("/products").await?.unwrap_or_default())
    }

    async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        Self::require(self.get(&format!("/products/{}", id)).await?)
    }

    async fn create_product(&self, payload: &ProductPayload) -> Result<Product, ApiError> {
        Self::require(self.post("/products", payload).await?)
    }

    async fn update_product(
        &self,
        id: i64,
        payload: &ProductPayload,
    ) -> Result<Product, ApiError> {
        Self::require(self.put(&format!("/products/{}", id), payload).await?)
    }

    async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/products/{}", id)).await
    }

    async fn get_suggestions(&self) -> Result<SuggestionReport, ApiError> {
        Self::require(self.get("/products/suggestions").await?)
    }

    async fn list_raw_materials(&self) -> Result<Vec<RawMaterial>, ApiError> {
        Ok(self.get("/raw-materials").await?.unwrap_or_default())
    }

    async fn get_raw_material(&self, id: i64) -> Result<RawMaterial, ApiError> {
        Self::require(self.get(&format!("/raw-materials/{}", id)).await?)
    }

    async fn create_raw_material(
        &self,
        payload: &RawMaterialPayload,
    ) -> Result<RawMaterial, ApiError> {
        Self::require(self.post("/raw-materials", payload).await?)
    }

    async fn update_raw_material(
        &self,
        id: i64,
        payload: &RawMaterialPayload,
    ) -> Result<RawMaterial, ApiError> {
        Self::require(self.put(&format!("/raw-materials/{}", id), payload).await?)
    }

    async fn delete_raw_material(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/raw-materials/{}", id)).await
    }
}
