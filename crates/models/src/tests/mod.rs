/// Entity behaviour against a freshly migrated in-memory SQLite database.
pub mod entity_tests {
    use crate::db::connect_with_config;
    use crate::{customer, customer_stats, order};
    use anyhow::Result;
    use configs::DatabaseConfig;
    use migration::MigratorTrait;
    use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};

    async fn setup_test_db() -> Result<DatabaseConnection> {
        let db = connect_with_config(&DatabaseConfig::in_memory_sqlite()).await?;
        migration::Migrator::up(&db, None).await?;
        Ok(db)
    }

    async fn insert_customer(db: &DatabaseConnection, first: &str, last: &str) -> Result<customer::Model> {
        let am = customer::ActiveModel {
            first_name: Set(first.to_string()),
            last_name: Set(last.to_string()),
            email: Set(Some(format!("{}@example.com", first.to_lowercase()))),
            ..Default::default()
        };
        Ok(am.insert(db).await?)
    }

    #[tokio::test]
    async fn insert_stamps_timestamps_and_defaults_balance() -> Result<()> {
        let db = setup_test_db().await?;
        let c = insert_customer(&db, "Ada", "Lovelace").await?;

        assert!(c.id > 0);
        assert_eq!(c.balance, 0.0);
        assert_eq!(c.created_at, c.updated_at);
        assert_eq!(c.address, None);
        Ok(())
    }

    #[tokio::test]
    async fn update_refreshes_only_updated_at() -> Result<()> {
        let db = setup_test_db().await?;
        let c = insert_customer(&db, "Grace", "Hopper").await?;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        let mut am: customer::ActiveModel = c.clone().into();
        am.notes = Set(Some("vip".into()));
        let updated = am.update(&db).await?;

        assert_eq!(updated.created_at, c.created_at);
        assert!(updated.updated_at > c.updated_at);
        assert_eq!(updated.notes.as_deref(), Some("vip"));
        Ok(())
    }

    #[tokio::test]
    async fn stats_view_tracks_orders() -> Result<()> {
        let db = setup_test_db().await?;
        let buyer = insert_customer(&db, "Alan", "Turing").await?;
        let idle = insert_customer(&db, "Edsger", "Dijkstra").await?;

        order::create(&db, buyer.id, 12.5, None).await?;
        let last = order::create(&db, buyer.id, 7.5, Some("paid")).await?;

        let row = customer_stats::Entity::find_by_id(buyer.id).one(&db).await?.expect("view row");
        assert_eq!(row.customer_name, "Alan Turing");
        assert_eq!(row.total_orders, 2);
        assert!((row.total_spent - 20.0).abs() < 1e-9);
        assert_eq!(row.last_order_date, Some(last.created_at));

        let empty = customer_stats::Entity::find_by_id(idle.id).one(&db).await?.expect("view row");
        assert_eq!(empty.total_orders, 0);
        assert_eq!(empty.total_spent, 0.0);
        assert_eq!(empty.last_order_date, None);
        Ok(())
    }

    #[tokio::test]
    async fn deleting_customer_cascades_to_orders() -> Result<()> {
        let db = setup_test_db().await?;
        let c = insert_customer(&db, "Barbara", "Liskov").await?;
        let o = order::create(&db, c.id, 3.0, None).await?;

        let owned = c.find_related(order::Entity).all(&db).await?;
        assert_eq!(owned.len(), 1);

        customer::Entity::delete_by_id(c.id).exec(&db).await?;
        assert!(order::Entity::find_by_id(o.id).one(&db).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn order_create_rejects_negative_amount() -> Result<()> {
        let db = setup_test_db().await?;
        let c = insert_customer(&db, "Ken", "Thompson").await?;
        let err = order::create(&db, c.id, -1.0, None).await.unwrap_err();
        assert!(matches!(err, crate::errors::ModelError::Validation(_)));
        assert!(order::Entity::find().all(&db).await?.is_empty());
        Ok(())
    }
}
