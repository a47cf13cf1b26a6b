use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::crud::CrudService;
use service::repository::{OfferRepository, OrderRepository, UserRepository};

/// Shared handler state. Every field is a cheap handle onto the same pool;
/// each request borrows a connection only for the statements it runs.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub users: CrudService<UserRepository>,
    pub orders: CrudService<OrderRepository>,
    pub offers: CrudService<OfferRepository>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: CrudService::new(Arc::new(UserRepository { db: db.clone() })),
            orders: CrudService::new(Arc::new(OrderRepository { db: db.clone() })),
            offers: CrudService::new(Arc::new(OfferRepository { db: db.clone() })),
            db,
        }
    }
}
