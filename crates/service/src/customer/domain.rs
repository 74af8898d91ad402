use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use models::{customer, customer_stats};

/// Creation payload. Accepts both storage (`first_name`) and display (`firstName`) keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCustomer {
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update. `None` (absent or `null`) leaves the column untouched;
/// `Some("")` clears an optional column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerPatch {
    #[serde(default, alias = "firstName")]
    pub first_name: Option<String>,
    #[serde(default, alias = "lastName")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CustomerPatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.notes.is_none()
    }
}

/// Base-table record as returned by get, create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetail {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub balance: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<customer::Model> for CustomerDetail {
    fn from(m: customer::Model) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            phone: m.phone,
            address: m.address,
            balance: m.balance,
            notes: m.notes,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// List row projected from the `customer_stats` view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub balance: f64,
    pub total_orders: i64,
    pub total_spent: f64,
    pub last_order_date: Option<DateTime<FixedOffset>>,
}

impl From<customer_stats::Model> for CustomerSummary {
    fn from(m: customer_stats::Model) -> Self {
        Self {
            id: m.id,
            name: m.customer_name,
            email: m.email,
            phone: m.phone,
            balance: m.balance,
            total_orders: m.total_orders,
            total_spent: m.total_spent,
            last_order_date: m.last_order_date,
        }
    }
}

/// Acknowledgement returned by delete instead of the removed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    pub success: bool,
    pub message: String,
}

impl DeleteAck {
    pub fn customer_deleted() -> Self {
        Self { success: true, message: "Customer deleted successfully".into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_customer_accepts_snake_and_camel_keys() {
        let snake: NewCustomer = serde_json::from_value(json!({"first_name": "Ada", "last_name": "L"})).unwrap();
        let camel: NewCustomer = serde_json::from_value(json!({"firstName": "Ada", "lastName": "L", "email": "a@b.io"})).unwrap();
        assert_eq!(snake.first_name, "Ada");
        assert_eq!(camel.last_name, "L");
        assert_eq!(camel.email.as_deref(), Some("a@b.io"));
        assert!(snake.email.is_none());
    }

    #[test]
    fn patch_distinguishes_absent_from_empty() {
        let p: CustomerPatch = serde_json::from_value(json!({"phone": "", "notes": null})).unwrap();
        assert_eq!(p.phone.as_deref(), Some(""));
        assert!(p.notes.is_none());
        assert!(p.first_name.is_none());
        assert!(!p.is_empty());
        assert!(CustomerPatch::default().is_empty());
    }

    #[test]
    fn summary_serializes_display_names() {
        let s = CustomerSummary {
            id: 7,
            name: "Ada Lovelace".into(),
            email: None,
            phone: None,
            balance: 0.0,
            total_orders: 2,
            total_spent: 12.5,
            last_order_date: None,
        };
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["name"], "Ada Lovelace");
        assert_eq!(v["totalOrders"], 2);
        assert_eq!(v["totalSpent"], 12.5);
        assert!(v.get("total_orders").is_none());
        assert!(v["lastOrderDate"].is_null());
    }
}
