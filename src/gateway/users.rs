//! User routes: REST to UserService translation.

use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::proto::user::{
    CreateUserRequest, DeleteUserRequest, GetUserRequest, GetUsersRequest, UpdateUserRequest, User,
};

use super::{flagged, page_params, GatewayError, Upstreams};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserDto {
    id: String,
    email: String,
    name: String,
    created_at: String,
    updated_at: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UserEnvelope {
    user: Option<UserDto>,
    success: bool,
    message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct DeleteEnvelope {
    success: bool,
    message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct UserListEnvelope {
    users: Vec<UserDto>,
    total: i32,
    page: i32,
    limit: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CreateUserBody {
    email: String,
    name: String,
    password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct UpdateUserBody {
    email: String,
    name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ListUsersQuery {
    page: Option<String>,
    limit: Option<String>,
}

pub(crate) async fn create(
    State(upstreams): State<Upstreams>,
    Json(body): Json<CreateUserBody>,
) -> Result<Response, GatewayError> {
    let response = upstreams
        .users()
        .create_user(CreateUserRequest {
            email: body.email,
            name: body.name,
            password: body.password,
        })
        .await?
        .into_inner();

    Ok(flagged(
        response.success,
        UserEnvelope {
            user: response.user.map(UserDto::from),
            success: response.success,
            message: response.message,
        },
    ))
}

pub(crate) async fn get(
    State(upstreams): State<Upstreams>,
    Path(id): Path<String>,
) -> Result<Response, GatewayError> {
    let response = upstreams
        .users()
        .get_user(GetUserRequest { id })
        .await?
        .into_inner();

    Ok(flagged(
        response.success,
        UserEnvelope {
            user: response.user.map(UserDto::from),
            success: response.success,
            message: response.message,
        },
    ))
}

pub(crate) async fn update(
    State(upstreams): State<Upstreams>,
    Path(id): Path<String>,
    Json(body): Json<UpdateUserBody>,
) -> Result<Response, GatewayError> {
    let response = upstreams
        .users()
        .update_user(UpdateUserRequest {
            id,
            email: body.email,
            name: body.name,
        })
        .await?
        .into_inner();

    Ok(flagged(
        response.success,
        UserEnvelope {
            user: response.user.map(UserDto::from),
            success: response.success,
            message: response.message,
        },
    ))
}

pub(crate) async fn delete(
    State(upstreams): State<Upstreams>,
    Path(id): Path<String>,
) -> Result<Response, GatewayError> {
    let response = upstreams
        .users()
        .delete_user(DeleteUserRequest { id })
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
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<UserListEnvelope>, GatewayError> {
    let (page, limit) = page_params(query.page.as_deref(), query.limit.as_deref());

    let response = upstreams
        .users()
        .get_users(GetUsersRequest { page, limit })
        .await?
        .into_inner();

    Ok(Json(UserListEnvelope {
        users: response.users.into_iter().map(UserDto::from).collect(),
        total: response.total,
        page: response.page,
        limit: response.limit,
    }))
}
