use crate::{
    api::models::*,
    core::{
        models::{Debt, Expense, Group},
        services::LedgerService,
    },
    infrastructure::storage::in_memory::InMemoryStorage,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use std::sync::Arc;
use uuid::Uuid;

pub type SharedService = Arc<LedgerService<InMemoryStorage>>;

// Define API routes
pub fn api_routes(service: SharedService) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/groups", get(list_groups).post(create_group))
        .route("/groups/{group_id}", get(get_group))
        .route(
            "/groups/{group_id}/expenses",
            get(get_group_expenses).post(add_expense),
        )
        .route("/groups/{group_id}/balances", get(get_group_balances))
        .with_state(service)
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Splitledger API is running".to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/groups",
    request_body = CreateGroupRequest,
    responses(
        (status = 200, description = "Group created successfully", body = Group),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn create_group(
    State(service): State<SharedService>,
    Json(req): Json<CreateGroupRequest>,
) -> Result<Json<Group>, ApiError> {
    let member_names = req.users.into_iter().map(|u| u.name).collect();
    let group = service.create_group(req.name, member_names).await?;
    Ok(Json(group))
}

#[utoipa::path(
    get,
    path = "/groups",
    responses(
        (status = 200, description = "All groups with their members", body = [Group]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_groups(State(service): State<SharedService>) -> Result<Json<Vec<Group>>, ApiError> {
    let groups = service.list_groups().await?;
    Ok(Json(groups))
}

#[utoipa::path(
    get,
    path = "/groups/{group_id}",
    params(
        ("group_id" = Uuid, Path, description = "ID of the group to retrieve")
    ),
    responses(
        (status = 200, description = "Group retrieved successfully", body = Group),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_group(
    State(service): State<SharedService>,
    Path(group_id): Path<Uuid>,
) -> Result<Json<Group>, ApiError> {
    let group = service.get_group(group_id).await?;
    Ok(Json(group))
}

#[utoipa::path(
    post,
    path = "/groups/{group_id}/expenses",
    params(
        ("group_id" = Uuid, Path, description = "ID of the group the expense belongs to")
    ),
    request_body = AddExpenseRequest,
    responses(
        (status = 200, description = "Expense recorded with its splits", body = Expense),
        (status = 400, description = "Invalid split or input", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn add_expense(
    State(service): State<SharedService>,
    Path(group_id): Path<Uuid>,
    Json(req): Json<AddExpenseRequest>,
) -> Result<Json<Expense>, ApiError> {
    // an unknown group is reported before an unknown split type
    service.get_group(group_id).await?;
    let new_expense = req.into_new_expense()?;
    let expense = service.add_expense(group_id, new_expense).await?;
    Ok(Json(expense))
}

#[utoipa::path(
    get,
    path = "/groups/{group_id}/expenses",
    params(
        ("group_id" = Uuid, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Expenses of the group in creation order", body = [Expense]),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_group_expenses(
    State(service): State<SharedService>,
    Path(group_id): Path<Uuid>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    let expenses = service.get_group_expenses(group_id).await?;
    Ok(Json(expenses))
}

#[utoipa::path(
    get,
    path = "/groups/{group_id}/balances",
    params(
        ("group_id" = Uuid, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Net debts between group members", body = [Debt]),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_group_balances(
    State(service): State<SharedService>,
    Path(group_id): Path<Uuid>,
) -> Result<Json<Vec<Debt>>, ApiError> {
    let debts = service.get_group_balances(group_id).await?;
    Ok(Json(debts))
}
