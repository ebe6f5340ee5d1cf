//! User management handlers (admin).

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use chordbook_core::types::pagination::{PageRequest, PageResponse};

use crate::dto::request::{SetRoleRequest, UserListQuery};
use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<UserListQuery>,
) -> Result<Json<PageResponse<UserResponse>>, ApiError> {
    let page = PageRequest::new(query.page.unwrap_or(1), query.page_size.unwrap_or(25));

    let users = state.admin_user_service.list_users(&auth, page).await?;

    let items: Vec<UserResponse> = users.items.into_iter().map(UserResponse::from).collect();
    Ok(Json(PageResponse::new(
        items,
        users.page,
        users.page_size,
        users.total_items,
    )))
}

/// PUT /api/users/{id}/role
pub async fn set_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
    Json(req): Json<SetRoleRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .admin_user_service
        .set_role(&auth, user_id, req.role)
        .await?;

    Ok(Json(UserResponse::from(user)))
}
