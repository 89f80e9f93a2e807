use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::{
    entity,
    error::{ContactError, ContactResult},
    models::{ContactSubmission, NewSubmission},
    repository::SubmissionRepository,
};

/// PostgreSQL-backed submission repository
pub struct PgSubmissionRepository {
    db: DatabaseConnection,
}

impl PgSubmissionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubmissionRepository for PgSubmissionRepository {
    async fn create(&self, input: NewSubmission) -> ContactResult<ContactSubmission> {
        let active_model: entity::ActiveModel = input.into();

        let model = entity::Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await?;

        tracing::info!(submission_id = %model.id, "Stored contact submission");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> ContactResult<Option<ContactSubmission>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list_all(&self) -> ContactResult<Vec<ContactSubmission>> {
        let models = entity::Entity::find()
            .order_by_desc(entity::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn mark_delivered(&self, id: Uuid) -> ContactResult<()> {
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::Delivered, Expr::value(true))
            .filter(entity::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ContactError::NotFound(id));
        }

        tracing::info!(submission_id = %id, "Marked submission delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(delivered: bool) -> entity::Model {
        entity::Model {
            id: Uuid::now_v7(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
            ip_address: Some("203.0.113.7".to_string()),
            user_agent: None,
            delivered,
            created_at: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_get_by_id_maps_model() {
        let stored = model(false);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored.clone()]])
            .into_connection();

        let repo = PgSubmissionRepository::new(db);
        let found = repo.get_by_id(stored.id).await.unwrap().unwrap();

        assert_eq!(found.id, stored.id);
        assert_eq!(found.email, "ada@example.com");
        assert!(!found.delivered);
    }

    #[tokio::test]
    async fn test_get_by_id_missing_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<entity::Model>::new()])
            .into_connection();

        let repo = PgSubmissionRepository::new(db);
        assert!(repo.get_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(true), model(false)]])
            .into_connection();

        let repo = PgSubmissionRepository::new(db);
        let all = repo.list_all().await.unwrap();

        assert_eq!(all.len(), 2);
        assert!(all[0].delivered);
        assert!(!all[1].delivered);
    }

    #[tokio::test]
    async fn test_mark_delivered_requires_existing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PgSubmissionRepository::new(db);
        let err = repo.mark_delivered(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(err, ContactError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_mark_delivered_updates_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PgSubmissionRepository::new(db);
        assert!(repo.mark_delivered(Uuid::new_v4()).await.is_ok());
    }
}
