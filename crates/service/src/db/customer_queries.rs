use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, DatabaseConnection, DbErr, EntityTrait, ItemsAndPagesNumber,
    PaginatorTrait, QueryOrder, Set,
};
use models::{customer, customer_stats};
use crate::customer::domain::{CustomerPatch, NewCustomer};
use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};

/// Every customer from the stats view, newest id first.
pub async fn list_customer_stats(db: &DatabaseConnection) -> Result<Vec<customer_stats::Model>, ServiceError> {
    let rows = customer_stats::Entity::find()
        .order_by_desc(customer_stats::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// One page of the stats view, same ordering as the full list.
pub async fn list_customer_stats_paginated(
    db: &DatabaseConnection,
    opts: Pagination,
) -> Result<Page<customer_stats::Model>, ServiceError> {
    let (page_idx, per_page) = opts.normalize();
    let paginator = customer_stats::Entity::find()
        .order_by_desc(customer_stats::Column::Id)
        .paginate(db, per_page);
    let ItemsAndPagesNumber { number_of_items, number_of_pages } = paginator.num_items_and_pages().await?;
    let items = paginator.fetch_page(page_idx).await?;
    Ok(Page { items, page: page_idx + 1, per_page, total_items: number_of_items, total_pages: number_of_pages })
}

/// Get a customer row by id.
pub async fn get_customer(db: &DatabaseConnection, id: i32) -> Result<customer::Model, ServiceError> {
    customer::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("customer", id))
}

/// Surrounding whitespace is not part of an address.
fn trim_email(email: Option<String>) -> Option<String> {
    email.map(|e| e.trim().to_string())
}

fn validate_new(input: &NewCustomer) -> Result<(), ServiceError> {
    customer::validate_name("first_name", &input.first_name)?;
    customer::validate_name("last_name", &input.last_name)?;
    customer::validate_optional_email(input.email.as_deref())?;
    Ok(())
}

fn validate_patch(patch: &CustomerPatch) -> Result<(), ServiceError> {
    if let Some(n) = &patch.first_name { customer::validate_name("first_name", n)?; }
    if let Some(n) = &patch.last_name { customer::validate_name("last_name", n)?; }
    customer::validate_optional_email(patch.email.as_deref())?;
    Ok(())
}

/// Insert a customer; balance and timestamps come from the store and the entity hooks.
pub async fn create_customer(db: &DatabaseConnection, mut input: NewCustomer) -> Result<customer::Model, ServiceError> {
    input.email = trim_email(input.email);
    validate_new(&input)?;
    let am = customer::ActiveModel {
        first_name: Set(input.first_name.trim().to_string()),
        last_name: Set(input.last_name.trim().to_string()),
        email: Set(customer::normalize_optional(input.email)),
        phone: Set(customer::normalize_optional(input.phone)),
        address: Set(customer::normalize_optional(input.address)),
        notes: Set(customer::normalize_optional(input.notes)),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ServiceError::CreateFailed(e.to_string()))
}

/// Apply only the supplied fields in a single `UPDATE ... WHERE id = ?`.
pub async fn update_customer(db: &DatabaseConnection, id: i32, mut patch: CustomerPatch) -> Result<customer::Model, ServiceError> {
    patch.email = trim_email(patch.email);
    validate_patch(&patch)?;
    let mut am = customer::ActiveModel { id: Unchanged(id), ..Default::default() };
    if let Some(v) = patch.first_name { am.first_name = Set(v.trim().to_string()); }
    if let Some(v) = patch.last_name { am.last_name = Set(v.trim().to_string()); }
    if let Some(v) = patch.email { am.email = Set(customer::normalize_optional(Some(v))); }
    if let Some(v) = patch.phone { am.phone = Set(customer::normalize_optional(Some(v))); }
    if let Some(v) = patch.address { am.address = Set(customer::normalize_optional(Some(v))); }
    if let Some(v) = patch.notes { am.notes = Set(customer::normalize_optional(Some(v))); }
    match am.update(db).await {
        Ok(updated) => Ok(updated),
        Err(DbErr::RecordNotUpdated) | Err(DbErr::RecordNotFound(_)) => Err(ServiceError::not_found("customer", id)),
        Err(e) => Err(ServiceError::Db(e.to_string())),
    }
}

/// Delete a customer; a missing row is `NotFound`, any other store error is `Db`.
pub async fn delete_customer(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = customer::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("customer", id));
    }
    Ok(())
}
