use sea_orm::{DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, ColumnTrait, PaginatorTrait};
use models::{customer, order};
use crate::errors::ServiceError;

/// Insert an order after confirming the owning customer exists.
pub async fn create_order(
    db: &DatabaseConnection,
    customer_id: i32,
    total_amount: f64,
    status: Option<&str>,
) -> Result<order::Model, ServiceError> {
    order::validate_amount(total_amount)?;
    let owner = customer::Entity::find_by_id(customer_id).count(db).await?;
    if owner == 0 {
        return Err(ServiceError::not_found("customer", customer_id));
    }
    Ok(order::create(db, customer_id, total_amount, status).await?)
}

/// Orders newest first, optionally restricted to one customer.
pub async fn list_orders(db: &DatabaseConnection, customer_id: Option<i32>) -> Result<Vec<order::Model>, ServiceError> {
    let mut q = order::Entity::find();
    if let Some(cid) = customer_id {
        q = q.filter(order::Column::CustomerId.eq(cid));
    }
    Ok(q.order_by_desc(order::Column::Id).all(db).await?)
}

/// `total_amount` of every order; the only projection the dashboard needs.
pub async fn order_amounts(db: &DatabaseConnection) -> Result<Vec<Option<f64>>, ServiceError> {
    let amounts = order::Entity::find()
        .select_only()
        .column(order::Column::TotalAmount)
        .into_tuple::<Option<f64>>()
        .all(db)
        .await?;
    Ok(amounts)
}

/// Number of rows in the customers table.
pub async fn count_customers(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    Ok(customer::Entity::find().count(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::customer_queries::create_customer;
    use crate::customer::domain::NewCustomer;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn orders_require_an_existing_owner() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let missing = create_order(&db, 99, 10.0, None).await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));

        let c = create_customer(&db, NewCustomer { first_name: "Linus".into(), last_name: "T".into(), ..Default::default() }).await?;
        let o = create_order(&db, c.id, 10.0, None).await?;
        assert_eq!(o.status, order::DEFAULT_STATUS);
        assert_eq!(o.customer_id, c.id);

        assert_eq!(order_amounts(&db).await?, vec![Some(10.0)]);
        assert_eq!(count_customers(&db).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn listing_filters_by_customer() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = create_customer(&db, NewCustomer { first_name: "A".into(), last_name: "A".into(), ..Default::default() }).await?;
        let b = create_customer(&db, NewCustomer { first_name: "B".into(), last_name: "B".into(), ..Default::default() }).await?;
        let a1 = create_order(&db, a.id, 1.0, None).await?;
        let _b1 = create_order(&db, b.id, 2.0, Some("paid")).await?;
        let a2 = create_order(&db, a.id, 3.0, None).await?;

        let only_a: Vec<i32> = list_orders(&db, Some(a.id)).await?.into_iter().map(|o| o.id).collect();
        assert_eq!(only_a, vec![a2.id, a1.id]);
        assert_eq!(list_orders(&db, None).await?.len(), 3);
        Ok(())
    }
}
