use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(ToSchema)]
pub struct NewCustomerDoc {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

/// Absent or null fields are left untouched; an empty string clears the field.
#[derive(ToSchema)]
pub struct CustomerPatchDoc {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CustomerDetailDoc {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub balance: f64,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CustomerSummaryDoc {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub balance: f64,
    pub total_orders: i64,
    pub total_spent: f64,
    pub last_order_date: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CustomerPageDoc {
    pub items: Vec<CustomerSummaryDoc>,
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

/// Full list without pagination parameters, one page otherwise.
#[derive(Serialize, ToSchema)]
#[serde(untagged)]
pub enum CustomerListingDoc {
    All(Vec<CustomerSummaryDoc>),
    Paged(CustomerPageDoc),
}

#[derive(ToSchema)]
pub struct DeleteAckDoc { pub success: bool, pub message: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct DashboardStatsDoc {
    pub total_customers: u64,
    pub total_orders: u64,
    pub total_revenue: f64,
    pub avg_order_value: f64,
}

#[derive(ToSchema)]
pub struct NewOrderDoc { pub customer_id: i32, pub total_amount: f64, pub status: Option<String> }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct OrderViewDoc {
    pub id: i32,
    pub customer_id: i32,
    pub total_amount: f64,
    pub status: String,
    pub created_at: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::list,
        crate::routes::customers::get,
        crate::routes::customers::create,
        crate::routes::customers::update,
        crate::routes::customers::delete,
        crate::routes::customers::delete_by_query,
        crate::routes::stats::dashboard,
        crate::routes::orders::list,
        crate::routes::orders::create,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            NewCustomerDoc,
            CustomerPatchDoc,
            CustomerDetailDoc,
            CustomerSummaryDoc,
            CustomerPageDoc,
            CustomerListingDoc,
            DeleteAckDoc,
            DashboardStatsDoc,
            NewOrderDoc,
            OrderViewDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers"),
        (name = "stats"),
        (name = "orders")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/health", "/customers", "/customers/{id}", "/stats", "/orders"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn listing_documents_both_shapes() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key("CustomerPageDoc"));
        let listing = serde_json::to_value(&schemas["CustomerListingDoc"]).unwrap();
        assert_eq!(listing["oneOf"].as_array().map(Vec::len), Some(2));
    }
}
