//! Product backend service.

use tokio::sync::RwLock;
use tonic::{Request, Response, Status};

use crate::proto::product::product_service_server::ProductService;
use crate::proto::product::{
    CreateProductRequest, DeleteProductRequest, DeleteProductResponse, GetProductRequest,
    GetProductsRequest, GetProductsResponse, Product, ProductResponse, UpdateProductRequest,
};
use crate::store::{self, ProductFields, ProductStore};

use super::format_timestamp;

/// gRPC adapter over the product store.
pub struct ProductsService {
    store: RwLock<ProductStore>,
}

impl ProductsService {
    /// Create a service over an empty store.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(ProductStore::new()),
        }
    }

    /// Create a service over a store preloaded with demo records.
    pub fn with_seed_data() -> Self {
        Self {
            store: RwLock::new(ProductStore::with_seed_data()),
        }
    }
}

impl Default for ProductsService {
    fn default() -> Self {
        Self::new()
    }
}

fn to_proto(product: &store::Product) -> Product {
    Product {
        id: product.id.clone(),
        name: product.name.clone(),
        description: product.description.clone(),
        price: product.price,
        quantity: product.quantity,
        category: product.category.clone(),
        created_at: format_timestamp(product.created_at),
        updated_at: format_timestamp(product.updated_at),
    }
}

fn not_found() -> ProductResponse {
    ProductResponse {
        product: None,
        success: false,
        message: "Product not found".to_string(),
    }
}

#[tonic::async_trait]
impl ProductService for ProductsService {
    async fn create_product(
        &self,
        request: Request<CreateProductRequest>,
    ) -> Result<Response<ProductResponse>, Status> {
        let req = request.into_inner();
        let product = self.store.write().await.create(ProductFields {
            name: req.name,
            description: req.description,
            price: req.price,
            quantity: req.quantity,
            category: req.category,
        });

        Ok(Response::new(ProductResponse {
            product: Some(to_proto(&product)),
            success: true,
            message: "Product created successfully".to_string(),
        }))
    }

    async fn get_product(
        &self,
        request: Request<GetProductRequest>,
    ) -> Result<Response<ProductResponse>, Status> {
        let req = request.into_inner();
        let store = self.store.read().await;

        let response = match store.get(&req.id) {
            Some(product) => ProductResponse {
                product: Some(to_proto(product)),
                success: true,
                message: "Product retrieved successfully".to_string(),
            },
            None => not_found(),
        };

        Ok(Response::new(response))
    }

    async fn update_product(
        &self,
        request: Request<UpdateProductRequest>,
    ) -> Result<Response<ProductResponse>, Status> {
        let req = request.into_inner();
        let mut store = self.store.write().await;

        let fields = ProductFields {
            name: req.name,
            description: req.description,
            price: req.price,
            quantity: req.quantity,
            category: req.category,
        };

        let response = match store.update(&req.id, fields) {
            Some(product) => ProductResponse {
                product: Some(to_proto(&product)),
                success: true,
                message: "Product updated successfully".to_string(),
            },
            None => not_found(),
        };

        Ok(Response::new(response))
    }

    async fn delete_product(
        &self,
        request: Request<DeleteProductRequest>,
    ) -> Result<Response<DeleteProductResponse>, Status> {
        let req = request.into_inner();
        let mut store = self.store.write().await;

        let response = if store.delete(&req.id) {
            DeleteProductResponse {
                success: true,
                message: "Product deleted successfully".to_string(),
            }
        } else {
            DeleteProductResponse {
                success: false,
                message: "Product not found".to_string(),
            }
        };

        Ok(Response::new(response))
    }

    async fn get_products(
        &self,
        request: Request<GetProductsRequest>,
    ) -> Result<Response<GetProductsResponse>, Status> {
        let req = request.into_inner();
        let store = self.store.read().await;

        let listing = store.list(req.page, req.limit, &req.category);

        Ok(Response::new(GetProductsResponse {
            products: listing.items.iter().map(to_proto).collect(),
            total: listing.total,
            page: listing.page,
            limit: listing.limit,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_req(name: &str, category: &str) -> Request<CreateProductRequest> {
        Request::new(CreateProductRequest {
            name: name.to_string(),
            description: format!("{name} description"),
            price: 1.5,
            quantity: 100,
            category: category.to_string(),
        })
    }

    #[tokio::test]
    async fn test_create_echoes_fields() {
        let service = ProductsService::new();

        let response = service
            .create_product(create_req("Pen", "Office"))
            .await
            .unwrap()
            .into_inner();
        assert!(response.success);
        let product = response.product.unwrap();
        assert!(!product.id.is_empty());
        assert_eq!(product.name, "Pen");
        assert_eq!(product.price, 1.5);
        assert_eq!(product.quantity, 100);
        assert_eq!(product.category, "Office");
    }

    #[tokio::test]
    async fn test_list_filters_case_insensitively() {
        let service = ProductsService::new();
        service.create_product(create_req("Pen", "Office")).await.unwrap();
        service.create_product(create_req("Desk", "Furniture")).await.unwrap();

        let listing = service
            .get_products(Request::new(GetProductsRequest {
                page: 1,
                limit: 10,
                category: "office".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(listing.products.len(), 1);
        assert_eq!(listing.total, 1);
        assert_eq!(listing.products[0].name, "Pen");
    }

    #[tokio::test]
    async fn test_update_missing_is_flagged() {
        let service = ProductsService::new();

        let response = service
            .update_product(Request::new(UpdateProductRequest {
                id: "999".to_string(),
                name: "X".to_string(),
                description: String::new(),
                price: 0.0,
                quantity: 0,
                category: String::new(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(!response.success);
        assert!(response.product.is_none());
        assert_eq!(response.message, "Product not found");
    }
}
