//! Service layer providing the uniform CRUD contract on top of models.
//! - `*_service` modules hold the per-entity store operations.
//! - `repository` puts them behind one async trait per entity kind.
//! - `crud` wraps a repository with logging for the HTTP layer.
//! - `seed` loads the startup fixtures.

pub mod errors;
pub mod user_service;
pub mod order_service;
pub mod offer_service;
pub mod repository;
pub mod crud;
pub mod seed;
#[cfg(test)]
pub mod test_support;
