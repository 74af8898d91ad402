use sea_orm::{entity::prelude::*, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, order};

pub const NAME_MAX_LEN: usize = 100;
pub const EMAIL_MAX_LEN: usize = 255;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub balance: f64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Orders }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Orders => Entity::has_many(order::Entity).into(),
        }
    }
}

impl Related<order::Entity> for Entity {
    fn to() -> RelationDef { Relation::Orders.def() }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Timestamps are owned by the row: `created_at` once, `updated_at` on every write.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now: DateTimeWithTimeZone = Utc::now().into();
        if insert {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}

/// Collapse blank optional text to `None`; blank means "absent", not invalid.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn validate_name(field: &str, value: &str) -> Result<(), errors::ModelError> {
    if value.trim().is_empty() {
        return Err(errors::ModelError::Validation(format!("{field} required")));
    }
    if value.chars().count() > NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("{field} longer than {NAME_MAX_LEN} characters")));
    }
    Ok(())
}

/// Syntactic address check: one `@`, non-empty local part, dotted domain,
/// no whitespace. Deliverability is not checked.
pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    let invalid = || errors::ModelError::Validation(format!("invalid email: {email}"));
    if email.len() > EMAIL_MAX_LEN || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty() || l.starts_with('-') || l.ends_with('-')) {
        return Err(invalid());
    }
    Ok(())
}

/// Validate an email only when one is actually present.
pub fn validate_optional_email(email: Option<&str>) -> Result<(), errors::ModelError> {
    match email {
        Some(e) if !e.trim().is_empty() => validate_email(e),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        for ok in ["john@example.com", "a.b+tag@sub.example.co.uk", "x@y.io"] {
            assert!(validate_email(ok).is_ok(), "{ok}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "plain", "@example.com", "john@", "john@localhost", "a@b@c.com", "john doe@example.com", "john@.com", "john@example..com"] {
            assert!(validate_email(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn blank_email_is_absent_not_invalid() {
        assert!(validate_optional_email(None).is_ok());
        assert!(validate_optional_email(Some("")).is_ok());
        assert!(validate_optional_email(Some("nope")).is_err());
        assert_eq!(normalize_optional(Some("  ".into())), None);
        assert_eq!(normalize_optional(Some("555".into())), Some("555".into()));
    }

    #[test]
    fn names_must_be_present_and_bounded() {
        assert!(validate_name("first_name", "Ada").is_ok());
        assert!(validate_name("first_name", "   ").is_err());
        assert!(validate_name("last_name", &"x".repeat(NAME_MAX_LEN + 1)).is_err());
    }
}
