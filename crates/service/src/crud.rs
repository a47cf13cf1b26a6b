use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::errors::ServiceError;
use crate::repository::CrudRepository;

/// Application service applying the lookup-or-not-found contract on top of a
/// repository. Absent rows surface as `ServiceError::NotFound` from every
/// single-row operation.
pub struct CrudService<R: CrudRepository> {
    repo: Arc<R>,
}

impl<R: CrudRepository> Clone for CrudService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: CrudRepository> CrudService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub fn entity(&self) -> &'static str { R::NAME }

    #[instrument(skip(self), fields(entity = R::NAME))]
    pub async fn list(&self) -> Result<Vec<R::Record>, ServiceError> {
        let rows = self.repo.list().await?;
        info!(count = rows.len(), "listed");
        Ok(rows)
    }

    #[instrument(skip(self), fields(entity = R::NAME))]
    pub async fn get(&self, id: i32) -> Result<R::Record, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found(R::NAME, id))
    }

    #[instrument(skip(self, input), fields(entity = R::NAME, id = R::input_id(&input)))]
    pub async fn create(&self, input: R::Input) -> Result<R::Record, ServiceError> {
        let id = R::input_id(&input);
        match self.repo.create(input).await {
            Ok(rec) => { info!(id, "created"); Ok(rec) }
            Err(e) => { warn!(id, err = %e, "create rejected"); Err(e) }
        }
    }

    #[instrument(skip(self, input), fields(entity = R::NAME, new_id = R::input_id(&input)))]
    pub async fn replace(&self, id: i32, input: R::Input) -> Result<R::Record, ServiceError> {
        match self.repo.replace(id, input).await {
            Ok(rec) => { info!(id, "replaced"); Ok(rec) }
            Err(e) => { warn!(id, err = %e, "replace rejected"); Err(e) }
        }
    }

    #[instrument(skip(self), fields(entity = R::NAME))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete(id).await?;
        info!(id, "deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{OfferRepository, UserRepository};
    use crate::test_support::get_db;
    use models::{offer::OfferInput, user::UserInput};

    #[tokio::test]
    async fn get_missing_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = CrudService::new(Arc::new(UserRepository { db }));
        let err = svc.get(404).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "user 404 not found"));
        Ok(())
    }

    #[tokio::test]
    async fn create_then_get_round_trips() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = CrudService::new(Arc::new(UserRepository { db }));
        let input = UserInput {
            id: 8,
            first_name: "Ada".into(),
            last_name: "Byron".into(),
            age: 36,
            email: "ada@mail.com".into(),
            role: "customer".into(),
            phone: "555-0199".into(),
        };
        svc.create(input.clone()).await?;
        let got = svc.get(8).await?;
        assert_eq!(
            (got.id, got.first_name, got.last_name, got.age, got.email, got.role, got.phone),
            (input.id, input.first_name, input.last_name, input.age, input.email, input.role, input.phone)
        );
        Ok(())
    }

    #[tokio::test]
    async fn clones_share_the_repository() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = CrudService::new(Arc::new(OfferRepository { db }));
        let other = svc.clone();
        svc.create(OfferInput { id: 1, order_id: 1, executor_id: 1 }).await?;
        assert_eq!(other.list().await?.len(), 1);
        assert_eq!(other.entity(), "offer");
        Ok(())
    }
}
