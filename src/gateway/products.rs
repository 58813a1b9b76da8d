//! Product routes: REST to ProductService translation.

use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::proto::product::{
    CreateProductRequest, DeleteProductRequest, GetProductRequest, GetProductsRequest, Product,
    UpdateProductRequest,
};

use super::{flagged, page_params, GatewayError, Upstreams};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductDto {
    id: String,
    name: String,
    description: String,
    price: f64,
    quantity: i32,
    category: String,
    created_at: String,
    updated_at: String,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
            category: product.category,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ProductEnvelope {
    product: Option<ProductDto>,
    success: bool,
    message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct DeleteEnvelope {
    success: bool,
    message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProductListEnvelope {
    products: Vec<ProductDto>,
    total: i32,
    page: i32,
    limit: i32,
}

/// Create/update share a field set; both replace every mutable field.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ProductBody {
    name: String,
    description: String,
    price: f64,
    quantity: i32,
    category: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ListProductsQuery {
    page: Option<String>,
    limit: Option<String>,
    category: Option<String>,
}

fn envelope(
    product: Option<Product>,
    success: bool,
    message: String,
) -> ProductEnvelope {
    ProductEnvelope {
        product: product.map(ProductDto::from),
        success,
        message,
    }
}

pub(crate) async fn create(
    State(upstreams): State<Upstreams>,
    Json(body): Json<ProductBody>,
) -> Result<Response, GatewayError> {
    let response = upstreams
        .products()
        .create_product(CreateProductRequest {
            name: body.name,
            description: body.description,
            price: body.price,
            quantity: body.quantity,
            category: body.category,
        })
        .await?
        .into_inner();

    Ok(flagged(
        response.success,
        envelope(response.product, response.success, response.message),
    ))
}

pub(crate) async fn get(
    State(upstreams): State<Upstreams>,
    Path(id): Path<String>,
) -> Result<Response, GatewayError> {
    let response = upstreams
        .products()
        .get_product(GetProductRequest { id })
        .await?
        .into_inner();

    Ok(flagged(
        response.success,
        envelope(response.product, response.success, response.message),
    ))
}

pub(crate) async fn update(
    State(upstreams): State<Upstreams>,
    Path(id): Path<String>,
    Json(body): Json<ProductBody>,
) -> Result<Response, GatewayError> {
    let response = upstreams
        .products()
        .update_product(UpdateProductRequest {
            id,
            name: body.name,
            description: body.description,
            price: body.price,
            quantity: body.quantity,
            category: body.category,
        })
        .await?
        .into_inner();

    Ok(flagged(
        response.success,
        envelope(response.product, response.success, response.message),
    ))
}

pub(crate) async fn delete(
    State(upstreams): State<Upstreams>,
    Path(id): Path<String>,
) -> Result<Response, GatewayError> {
    let response = upstreams
        .products()
        .delete_product(DeleteProductRequest { id })
        .await?
        .into_inner();

    Ok(flagged(
        response.success,
        DeleteEnvelope {
            success: response.success,
            message: response.message,
        },
    ))
}

pub(crate) async fn list(
    State(upstreams): State<Upstreams>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<ProductListEnvelope>, GatewayError> {
    let (page, limit) = page_params(query.page.as_deref(), query.limit.as_deref());

    let response = upstreams
        .products()
        .get_products(GetProductsRequest {
            page,
            limit,
            category: query.category.unwrap_or_default(),
        })
        .await?
        .into_inner();

    Ok(Json(ProductListEnvelope {
        products: response.products.into_iter().map(ProductDto::from).collect(),
        total: response.total,
        page: response.page,
        limit: response.limit,
    }))
}
