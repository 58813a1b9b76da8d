//! User backend service.

use tokio::sync::RwLock;
use tonic::{Request, Response, Status};

use crate::proto::user::user_service_server::UserService;
use crate::proto::user::{
    CreateUserRequest, DeleteUserRequest, DeleteUserResponse, GetUserRequest, GetUsersRequest,
    GetUsersResponse, UpdateUserRequest, User, UserResponse,
};
use crate::store::{self, UserStore};

use super::format_timestamp;

/// gRPC adapter over the user store.
pub struct UsersService {
    store: RwLock<UserStore>,
}

impl UsersService {
    /// Create a service over an empty store.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(UserStore::new()),
        }
    }

    /// Create a service over a store preloaded with demo records.
    pub fn with_seed_data() -> Self {
        Self {
            store: RwLock::new(UserStore::with_seed_data()),
        }
    }
}

impl Default for UsersService {
    fn default() -> Self {
        Self::new()
    }
}

fn to_proto(user: &store::User) -> User {
    User {
        id: user.id.clone(),
        email: user.email.clone(),
        name: user.name.clone(),
        created_at: format_timestamp(user.created_at),
        updated_at: format_timestamp(user.updated_at),
    }
}

fn not_found() -> UserResponse {
    UserResponse {
        user: None,
        success: false,
        message: "User not found".to_string(),
    }
}

#[tonic::async_trait]
impl UserService for UsersService {
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let req = request.into_inner();
        // The password field is accepted but never stored.
        let user = self.store.write().await.create(req.email, req.name);

        Ok(Response::new(UserResponse {
            user: Some(to_proto(&user)),
            success: true,
            message: "User created successfully".to_string(),
        }))
    }

    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let req = request.into_inner();
        let store = self.store.read().await;

        let response = match store.get(&req.id) {
            Some(user) => UserResponse {
                user: Some(to_proto(user)),
                success: true,
                message: "User retrieved successfully".to_string(),
            },
            None => not_found(),
        };

        Ok(Response::new(response))
    }

    async fn update_user(
        &self,
        request: Request<UpdateUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let req = request.into_inner();
        let mut store = self.store.write().await;

        let response = match store.update(&req.id, req.email, req.name) {
            Some(user) => UserResponse {
                user: Some(to_proto(&user)),
                success: true,
                message: "User updated successfully".to_string(),
            },
            None => not_found(),
        };

        Ok(Response::new(response))
    }

    async fn delete_user(
        &self,
        request: Request<DeleteUserRequest>,
    ) -> Result<Response<DeleteUserResponse>, Status> {
        let req = request.into_inner();
        let mut store = self.store.write().await;

        let response = if store.delete(&req.id) {
            DeleteUserResponse {
                success: true,
                message: "User deleted successfully".to_string(),
            }
        } else {
            DeleteUserResponse {
                success: false,
                message: "User not found".to_string(),
            }
        };

        Ok(Response::new(response))
    }

    async fn get_users(
        &self,
        request: Request<GetUsersRequest>,
    ) -> Result<Response<GetUsersResponse>, Status> {
        let req = request.into_inner();
        let store = self.store.read().await;

        let listing = store.list(req.page, req.limit);

        Ok(Response::new(GetUsersResponse {
            users: listing.items.iter().map(to_proto).collect(),
            total: listing.total,
            page: listing.page,
            limit: listing.limit,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_req(email: &str, name: &str) -> Request<CreateUserRequest> {
        Request::new(CreateUserRequest {
            email: email.to_string(),
            name: name.to_string(),
            password: "hunter2".to_string(),
        })
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let service = UsersService::new();

        let created = service
            .create_user(create_req("a@example.com", "A"))
            .await
            .unwrap()
            .into_inner();
        assert!(created.success);
        let user = created.user.unwrap();
        assert!(!user.id.is_empty());

        let fetched = service
            .get_user(Request::new(GetUserRequest { id: user.id.clone() }))
            .await
            .unwrap()
            .into_inner();
        assert!(fetched.success);
        assert_eq!(fetched.user.unwrap(), user);
    }

    #[tokio::test]
    async fn test_get_missing_is_flagged_not_errored() {
        let service = UsersService::new();

        let response = service
            .get_user(Request::new(GetUserRequest {
                id: "999".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(!response.success);
        assert!(response.user.is_none());
        assert_eq!(response.message, "User not found");
    }

    #[tokio::test]
    async fn test_delete_missing_is_flagged() {
        let service = UsersService::new();

        let response = service
            .delete_user(Request::new(DeleteUserRequest {
                id: "999".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(!response.success);
        assert_eq!(response.message, "User not found");
    }

    #[tokio::test]
    async fn test_list_defaults_and_pagination() {
        let service = UsersService::new();
        for i in 0..15 {
            service
                .create_user(create_req(&format!("u{i}@example.com"), "U"))
                .await
                .unwrap();
        }

        // Zero page/limit degrade to the 1/10 defaults
        let first = service
            .get_users(Request::new(GetUsersRequest { page: 0, limit: 0 }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(first.users.len(), 10);
        assert_eq!(first.total, 15);
        assert_eq!(first.page, 1);
        assert_eq!(first.limit, 10);

        let second = service
            .get_users(Request::new(GetUsersRequest { page: 2, limit: 10 }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(second.users.len(), 5);
        assert_eq!(second.total, 15);
    }
}
