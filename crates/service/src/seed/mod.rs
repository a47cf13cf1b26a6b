//! Startup fixtures.
//!
//! Loaded once into a fresh store. Loading into a store that already holds
//! any fixture id fails with `DuplicateKey` and writes nothing.

use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;
use tracing::{info, instrument};

use models::{offer, order, user};
use crate::errors::ServiceError;

const EMBEDDED: &str = include_str!("fixtures.json");

#[derive(Debug, Clone, Deserialize)]
pub struct Fixtures {
    pub users: Vec<user::UserInput>,
    pub orders: Vec<order::OrderInput>,
    pub offers: Vec<offer::OfferInput>,
}

impl Fixtures {
    /// Fixtures compiled into the binary.
    pub fn embedded() -> Result<Self, ServiceError> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(raw: &str) -> Result<Self, ServiceError> {
        serde_json::from_str(raw).map_err(|e| ServiceError::Seed(e.to_string()))
    }
}

/// Row counts written by a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub users: u64,
    pub orders: u64,
    pub offers: u64,
}

/// Insert all fixtures in one transaction.
#[instrument(skip_all)]
pub async fn load(db: &DatabaseConnection, fixtures: Fixtures) -> Result<SeedReport, ServiceError> {
    let txn = db.begin().await?;
    let report = SeedReport {
        users: user::insert_all(&txn, fixtures.users).await?,
        orders: order::insert_all(&txn, fixtures.orders).await?,
        offers: offer::insert_all(&txn, fixtures.offers).await?,
    };
    txn.commit().await?;
    info!(users = report.users, orders = report.orders, offers = report.offers, "seed data loaded");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::dates::parse_date;

    #[test]
    fn embedded_fixtures_parse_and_dates_are_valid() {
        let f = Fixtures::embedded().unwrap();
        assert_eq!((f.users.len(), f.orders.len(), f.offers.len()), (6, 5, 6));
        for o in &f.orders {
            let start = parse_date(&o.start_date).unwrap();
            let end = parse_date(&o.end_date).unwrap();
            assert!(start <= end, "order {} ends before it starts", o.id);
        }
    }

    #[tokio::test]
    async fn load_populates_fixture_counts() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let report = load(&db, Fixtures::embedded()?).await?;
        assert_eq!(report, SeedReport { users: 6, orders: 5, offers: 6 });
        assert_eq!(user::list(&db).await?.len(), 6);
        assert_eq!(order::list(&db).await?.len(), 5);
        assert_eq!(offer::list(&db).await?.len(), 6);
        Ok(())
    }

    #[tokio::test]
    async fn second_load_is_duplicate_and_rolls_back() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        load(&db, Fixtures::embedded()?).await?;

        let err = load(&db, Fixtures::embedded()?).await.unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateKey(_)));
        assert_eq!(user::list(&db).await?.len(), 6);
        Ok(())
    }

    #[tokio::test]
    async fn bad_date_aborts_whole_seed() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let mut f = Fixtures::embedded()?;
        f.orders[2].end_date = "2015-06-01".into();

        let err = load(&db, f).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidDate(_)));
        assert!(user::list(&db).await?.is_empty());
        Ok(())
    }

    #[test]
    fn malformed_fixture_json_is_seed_error() {
        let err = Fixtures::from_json("{\"users\": []}").unwrap_err();
        assert!(matches!(err, ServiceError::Seed(_)));
    }
}
