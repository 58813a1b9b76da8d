//! Order routes: REST to OrderService translation.
//!
//! Order wire shapes are snake_case end to end, matching the proto field
//! names rather than the camelCase of the other two domains.

use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::proto::order::{
    CreateOrderRequest, DeleteOrderRequest, GetOrderRequest, GetOrdersRequest, Order, OrderItem,
    UpdateOrderRequest,
};

use super::{flagged, page_params, GatewayError, Upstreams};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct OrderItemDto {
    product_id: String,
    product_name: String,
    quantity: i32,
    price: f64,
}

impl From<OrderItem> for OrderItemDto {
    fn from(item: OrderItem) -> Self {
        Self {
            product_id: item.product_id,
            product_name: item.product_name,
            quantity: item.quantity,
            price: item.price,
        }
    }
}

impl From<OrderItemDto> for OrderItem {
    fn from(item: OrderItemDto) -> Self {
        Self {
            product_id: item.product_id,
            product_name: item.product_name,
            quantity: item.quantity,
            price: item.price,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct OrderDto {
    id: String,
    user_id: String,
    items: Vec<OrderItemDto>,
    total_amount: f64,
    status: String,
    created_at: String,
    updated_at: String,
}

impl From<Order> for OrderDto {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            items: order.items.into_iter().map(OrderItemDto::from).collect(),
            total_amount: order.total_amount,
            status: order.status,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct OrderEnvelope {
    order: Option<OrderDto>,
    success: bool,
    message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct DeleteEnvelope {
    success: bool,
    message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct OrderListEnvelope {
    orders: Vec<OrderDto>,
    total: i32,
    page: i32,
    limit: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CreateOrderBody {
    user_id: String,
    items: Vec<OrderItemDto>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct UpdateOrderBody {
    status: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ListOrdersQuery {
    page: Option<String>,
    limit: Option<String>,
    user_id: Option<String>,
}

fn envelope(order: Option<Order>, success: bool, message: String) -> OrderEnvelope {
    OrderEnvelope {
        order: order.map(OrderDto::from),
        success,
        message,
    }
}

pub(crate) async fn create(
    State(upstreams): State<Upstreams>,
    Json(body): Json<CreateOrderBody>,
) -> Result<Response, GatewayError> {
    let response = upstreams
        .orders()
        .create_order(CreateOrderRequest {
            user_id: body.user_id,
            items: body.items.into_iter().map(OrderItem::from).collect(),
        })
        .await?
        .into_inner();

    Ok(flagged(
        response.success,
        envelope(response.order, response.success, response.message),
    ))
}

pub(crate) async fn get(
    State(upstreams): State<Upstreams>,
    Path(id): Path<String>,
) -> Result<Response, GatewayError> {
    let response = upstreams
        .orders()
        .get_order(GetOrderRequest { id })
        .await?
        .into_inner();

    Ok(flagged(
        response.success,
        envelope(response.order, response.success, response.message),
    ))
}

pub(crate) async fn update(
    State(upstreams): State<Upstreams>,
    Path(id): Path<String>,
    Json(body): Json<UpdateOrderBody>,
) -> Result<Response, GatewayError> {
    let response = upstreams
        .orders()
        .update_order(UpdateOrderRequest {
            id,
            status: body.status,
        })
        .await?
        .into_inner();

    Ok(flagged(
        response.success,
        envelope(response.order, response.success, response.message),
    ))
}

pub(crate) async fn delete(
    State(upstreams): State<Upstreams>,
    Path(id): Path<String>,
) -> Result<Response, GatewayError> {
    let response = upstreams
        .orders()
        .delete_order(DeleteOrderRequest { id })
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
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<OrderListEnvelope>, GatewayError> {
    let (page, limit) = page_params(query.page.as_deref(), query.limit.as_deref());

    let response = upstreams
        .orders()
        .get_orders(GetOrdersRequest {
            page,
            limit,
            user_id: query.user_id.unwrap_or_default(),
        })
        .await?
        .into_inner();

    Ok(Json(OrderListEnvelope {
        orders: response.orders.into_iter().map(OrderDto::from).collect(),
        total: response.total,
        page: response.page,
        limit: response.limit,
    }))
}
