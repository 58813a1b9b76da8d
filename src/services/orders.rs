//! Order backend service.

use tokio::sync::RwLock;
use tonic::{Request, Response, Status};

use crate::proto::order::order_service_server::OrderService;
use crate::proto::order::{
    CreateOrderRequest, DeleteOrderRequest, DeleteOrderResponse, GetOrderRequest,
    GetOrdersRequest, GetOrdersResponse, Order, OrderItem, OrderResponse, UpdateOrderRequest,
};
use crate::store::{self, OrderStore};

use super::format_timestamp;

/// gRPC adapter over the order store.
pub struct OrdersService {
    store: RwLock<OrderStore>,
}

impl OrdersService {
    /// Create a service over an empty store.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(OrderStore::new()),
        }
    }

    /// Create a service over a store preloaded with demo records.
    pub fn with_seed_data() -> Self {
        Self {
            store: RwLock::new(OrderStore::with_seed_data()),
        }
    }
}

impl Default for OrdersService {
    fn default() -> Self {
        Self::new()
    }
}

fn item_to_store(item: OrderItem) -> store::OrderItem {
    store::OrderItem {
        product_id: item.product_id,
        product_name: item.product_name,
        quantity: item.quantity,
        price: item.price,
    }
}

fn to_proto(order: &store::Order) -> Order {
    Order {
        id: order.id.clone(),
        user_id: order.user_id.clone(),
        items: order
            .items
            .iter()
            .map(|i| OrderItem {
                product_id: i.product_id.clone(),
                product_name: i.product_name.clone(),
                quantity: i.quantity,
                price: i.price,
            })
            .collect(),
        total_amount: order.total_amount,
        status: order.status.clone(),
        created_at: format_timestamp(order.created_at),
        updated_at: format_timestamp(order.updated_at),
    }
}

fn not_found() -> OrderResponse {
    OrderResponse {
        order: None,
        success: false,
        message: "Order not found".to_string(),
    }
}

#[tonic::async_trait]
impl OrderService for OrdersService {
    async fn create_order(
        &self,
        request: Request<CreateOrderRequest>,
    ) -> Result<Response<OrderResponse>, Status> {
        let req = request.into_inner();
        let items = req.items.into_iter().map(item_to_store).collect();
        let order = self.store.write().await.create(req.user_id, items);

        Ok(Response::new(OrderResponse {
            order: Some(to_proto(&order)),
            success: true,
            message: "Order created successfully".to_string(),
        }))
    }

    async fn get_order(
        &self,
        request: Request<GetOrderRequest>,
    ) -> Result<Response<OrderResponse>, Status> {
        let req = request.into_inner();
        let store = self.store.read().await;

        let response = match store.get(&req.id) {
            Some(order) => OrderResponse {
                order: Some(to_proto(order)),
                success: true,
                message: "Order retrieved successfully".to_string(),
            },
            None => not_found(),
        };

        Ok(Response::new(response))
    }

    async fn update_order(
        &self,
        request: Request<UpdateOrderRequest>,
    ) -> Result<Response<OrderResponse>, Status> {
        let req = request.into_inner();
        let mut store = self.store.write().await;

        let response = match store.update(&req.id, &req.status) {
            Some(order) => OrderResponse {
                order: Some(to_proto(&order)),
                success: true,
                message: "Order updated successfully".to_string(),
            },
            None => not_found(),
        };

        Ok(Response::new(response))
    }

    async fn delete_order(
        &self,
        request: Request<DeleteOrderRequest>,
    ) -> Result<Response<DeleteOrderResponse>, Status> {
        let req = request.into_inner();
        let mut store = self.store.write().await;

        let response = if store.delete(&req.id) {
            DeleteOrderResponse {
                success: true,
                message: "Order deleted successfully".to_string(),
            }
        } else {
            DeleteOrderResponse {
                success: false,
                message: "Order not found".to_string(),
            }
        };

        Ok(Response::new(response))
    }

    async fn get_orders(
        &self,
        request: Request<GetOrdersRequest>,
    ) -> Result<Response<GetOrdersResponse>, Status> {
        let req = request.into_inner();
        let store = self.store.read().await;

        let listing = store.list(req.page, req.limit, &req.user_id);

        Ok(Response::new(GetOrdersResponse {
            orders: listing.items.iter().map(to_proto).collect(),
            total: listing.total,
            page: listing.page,
            limit: listing.limit,
        }))
    }
}
