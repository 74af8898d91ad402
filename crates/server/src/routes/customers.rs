use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use service::customer::domain::{CustomerDetail, CustomerPatch, CustomerSummary, DeleteAck, NewCustomer};
use service::errors::ServiceError;
use service::pagination::{Page, Pagination};

use crate::errors::JsonApiError;
use crate::metrics::record_customer_op;
use crate::state::AppState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page; enables pagination when present
    pub page: Option<u32>,
    /// Page size, clamped to 1..=100
    pub per_page: Option<u32>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteQuery {
    pub id: Option<i32>,
}

/// Either the full list or one page of it, depending on the query.
#[derive(Debug, serde::Serialize)]
#[serde(untagged)]
pub enum CustomerListing {
    All(Vec<CustomerSummary>),
    Paged(Page<CustomerSummary>),
}

fn observe<T>(op: &str, res: Result<T, ServiceError>) -> Result<T, JsonApiError> {
    record_customer_op(op, &res, ServiceError::kind);
    res.map_err(JsonApiError::from)
}

#[utoipa::path(
    get, path = "/customers", tag = "customers",
    params(ListQuery),
    responses(
        (status = 200, description = "Customers with order totals, newest first; a page object when page or per_page is given", body = crate::openapi::CustomerListingDoc),
        (status = 400, description = "Malformed query", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<CustomerListing>, JsonApiError> {
    let Query(q) = query?;
    match Pagination::from_query(q.page, q.per_page) {
        Some(p) => {
            let page = observe("list", state.customers.list_page(p).await)?;
            Ok(Json(CustomerListing::Paged(page)))
        }
        None => {
            let all = observe("list", state.customers.list_all().await)?;
            Ok(Json(CustomerListing::All(all)))
        }
    }
}

#[utoipa::path(
    get, path = "/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer record", body = crate::openapi::CustomerDetailDoc),
        (status = 404, description = "No such customer", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, id: Result<Path<i32>, PathRejection>) -> Result<Json<CustomerDetail>, JsonApiError> {
    let Path(id) = id?;
    let c = observe("get", state.customers.get_one(id).await)?;
    Ok(Json(c))
}

#[utoipa::path(
    post, path = "/customers", tag = "customers",
    request_body = crate::openapi::NewCustomerDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CustomerDetailDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewCustomer>, JsonRejection>,
) -> Result<(StatusCode, Json<CustomerDetail>), JsonApiError> {
    let Json(input) = body?;
    let c = observe("create", state.customers.create(input).await)?;
    info!(id = c.id, "created customer");
    Ok((StatusCode::CREATED, Json(c)))
}

#[utoipa::path(
    put, path = "/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    request_body = crate::openapi::CustomerPatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CustomerDetailDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "No such customer", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<CustomerPatch>, JsonRejection>,
) -> Result<Json<CustomerDetail>, JsonApiError> {
    let Path(id) = id?;
    let Json(patch) = body?;
    let c = observe("update", state.customers.update(id, patch).await)?;
    Ok(Json(c))
}

#[utoipa::path(
    delete, path = "/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::DeleteAckDoc),
        (status = 404, description = "No such customer", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, id: Result<Path<i32>, PathRejection>) -> Result<Json<DeleteAck>, JsonApiError> {
    let Path(id) = id?;
    let ack = observe("delete", state.customers.remove(id).await)?;
    Ok(Json(ack))
}

#[utoipa::path(
    delete, path = "/customers", tag = "customers",
    params(DeleteQuery),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::DeleteAckDoc),
        (status = 400, description = "Missing id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "No such customer", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_by_query(
    State(state): State<AppState>,
    query: Result<Query<DeleteQuery>, QueryRejection>,
) -> Result<Json<DeleteAck>, JsonApiError> {
    let Query(q) = query?;
    let Some(id) = q.id else {
        return Err(JsonApiError::bad_request("customer id is required"));
    };
    let ack = observe("delete", state.customers.remove(id).await)?;
    Ok(Json(ack))
}
