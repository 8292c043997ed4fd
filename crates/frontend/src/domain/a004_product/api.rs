//! REST access for the product editor and list.
//!
//! `ProductGateway` is the seam the editor talks to; `HttpProductGateway`
//! is the browser implementation over `gloo-net`.

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{api_url, auth_header};
use async_trait::async_trait;
use contracts::domain::a001_category::Category;
use contracts::domain::a002_product_type::ProductType;
use contracts::domain::a003_color::Color;
use contracts::domain::common::AggregateId;
use contracts::domain::a004_product::{
    CreateProductResponse, ProductDetails, ProductDto, ProductGroupId, ProductListItem,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[async_trait(?Send)]
pub trait ProductGateway {
    async fn list_enabled_categories(&self) -> Result<Vec<Category>, ApiError>;

    async fn list_enabled_product_types(
        &self,
        category_id: i64,
    ) -> Result<Vec<ProductType>, ApiError>;

    async fn list_enabled_colors(&self) -> Result<Vec<Color>, ApiError>;

    async fn get_product_details(&self, id: ProductGroupId) -> Result<ProductDetails, ApiError>;

    /// Returns the identity assigned by the server, when its answer carries one.
    /// A 2xx answer always means the record exists.
    async fn create_product(
        &self,
        payload: &ProductDto,
    ) -> Result<Option<ProductGroupId>, ApiError>;

    async fn update_product(&self, id: ProductGroupId, payload: &ProductDto)
        -> Result<(), ApiError>;

    async fn list_products(&self) -> Result<Vec<ProductListItem>, ApiError>;
}

#[derive(Serialize)]
struct ProductTypeQuery {
    #[serde(rename = "categoryId")]
    category_id: i64,
}

fn product_types_path(category_id: i64) -> Result<String, ApiError> {
    let query = serde_qs::to_string(&ProductTypeQuery { category_id })
        .map_err(|e| ApiError::Serialize(e.to_string()))?;
    Ok(format!("/api/product-types/enabled?{}", query))
}

fn product_path(id: ProductGroupId) -> String {
    format!("/api/products/{}", id.as_string())
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("Accept", "application/json");
    match auth_header() {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

async fn checked(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Http { status, body })
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", path);
    let response = with_auth(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    checked(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn send_json(builder: RequestBuilder, body: &ProductDto) -> Result<Response, ApiError> {
    let request = with_auth(builder)
        .json(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    checked(response).await
}

/// Id from a successful create answer. An unexpected body is only logged: the
/// record was created either way.
fn created_id(body: &str) -> Option<ProductGroupId> {
    match serde_json::from_str::<CreateProductResponse>(body) {
        Ok(created) => Some(created.id),
        Err(e) => {
            log::warn!("product created but response body was not understood: {}", e);
            None
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HttpProductGateway;

#[async_trait(?Send)]
impl ProductGateway for HttpProductGateway {
    async fn list_enabled_categories(&self) -> Result<Vec<Category>, ApiError> {
        get_json("/api/categories/enabled").await
    }

    async fn list_enabled_product_types(
        &self,
        category_id: i64,
    ) -> Result<Vec<ProductType>, ApiError> {
        get_json(&product_types_path(category_id)?).await
    }

    async fn list_enabled_colors(&self) -> Result<Vec<Color>, ApiError> {
        get_json("/api/colors/enabled").await
    }

    async fn get_product_details(&self, id: ProductGroupId) -> Result<ProductDetails, ApiError> {
        get_json(&product_path(id)).await
    }

    async fn create_product(
        &self,
        payload: &ProductDto,
    ) -> Result<Option<ProductGroupId>, ApiError> {
        log::debug!("POST /api/products");
        let response = send_json(Request::post(&api_url("/api/products")), payload).await?;
        let body = response.text().await.unwrap_or_default();
        Ok(created_id(&body))
    }

    async fn update_product(
        &self,
        id: ProductGroupId,
        payload: &ProductDto,
    ) -> Result<(), ApiError> {
        let path = product_path(id);
        log::debug!("PUT {}", path);
        send_json(Request::put(&api_url(&path)), payload).await?;
        Ok(())
    }

    async fn list_products(&self) -> Result<Vec<ProductListItem>, ApiError> {
        get_json("/api/products").await
    }
}
