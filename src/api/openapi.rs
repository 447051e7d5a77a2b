use utoipa::OpenApi;

use crate::{
    api::models::{AddExpenseRequest, CreateGroupRequest, ErrorResponse, HealthResponse, SplitRatio, UserInGroup},
    core::models::{Debt, Expense, Group, Split, SplitPolicy, User},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::health,
        super::handlers::create_group,
        super::handlers::list_groups,
        super::handlers::get_group,
        super::handlers::add_expense,
        super::handlers::get_group_expenses,
        super::handlers::get_group_balances
    ),
    components(schemas(
        CreateGroupRequest,
        UserInGroup,
        AddExpenseRequest,
        SplitRatio,
        HealthResponse,
        ErrorResponse,
        User,
        Group,
        Expense,
        Split,
        SplitPolicy,
        Debt
    )),
    info(
        title = "Splitledger API",
        description = "API for recording shared group expenses and computing who owes whom",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
