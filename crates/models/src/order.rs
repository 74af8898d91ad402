use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{customer, errors};

pub const DEFAULT_STATUS: &str = "pending";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: i32,
    pub total_amount: f64,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Customer }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Customer => Entity::belongs_to(customer::Entity)
                .from(Column::CustomerId)
                .to(customer::Column::Id)
                .into(),
        }
    }
}

impl Related<customer::Entity> for Entity {
    fn to() -> RelationDef { Relation::Customer.def() }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            self.created_at = Set(Utc::now().into());
        }
        Ok(self)
    }
}

pub fn validate_amount(amount: f64) -> Result<(), errors::ModelError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(errors::ModelError::Validation("total_amount must be a non-negative number".into()));
    }
    Ok(())
}

pub fn validate_status(status: &str) -> Result<(), errors::ModelError> {
    if status.trim().is_empty() || status.len() > 32 {
        return Err(errors::ModelError::Validation("status must be 1..=32 characters".into()));
    }
    Ok(())
}

/// Insert an order for an existing customer. Ownership is checked by the caller.
pub async fn create(
    db: &DatabaseConnection,
    customer_id: i32,
    total_amount: f64,
    status: Option<&str>,
) -> Result<Model, errors::ModelError> {
    validate_amount(total_amount)?;
    let status = status.unwrap_or(DEFAULT_STATUS);
    validate_status(status)?;
    let am = ActiveModel {
        customer_id: Set(customer_id),
        total_amount: Set(total_amount),
        status: Set(status.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_must_be_finite_and_non_negative() {
        assert!(validate_amount(0.0).is_ok());
        assert!(validate_amount(19.99).is_ok());
        assert!(validate_amount(-0.01).is_err());
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
    }

    #[test]
    fn status_bounds() {
        assert!(validate_status(DEFAULT_STATUS).is_ok());
        assert!(validate_status("").is_err());
        assert!(validate_status(&"s".repeat(33)).is_err());
    }
}
