use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use service::order::{self, NewOrder, OrderView};

use crate::errors::JsonApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    pub customer_id: Option<i32>,
}

#[utoipa::path(
    get, path = "/orders", tag = "orders",
    params(ListQuery),
    responses((status = 200, description = "Orders, newest first", body = [crate::openapi::OrderViewDoc]))
)]
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<OrderView>>, JsonApiError> {
    let Query(q) = query?;
    let rows = order::list_orders(&state.db, q.customer_id).await?;
    info!(count = rows.len(), "list orders");
    Ok(Json(rows))
}

#[utoipa::path(
    post, path = "/orders", tag = "orders",
    request_body = crate::openapi::NewOrderDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::OrderViewDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Unknown customer", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewOrder>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderView>), JsonApiError> {
    let Json(input) = body?;
    let o = order::create_order(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(o)))
}
