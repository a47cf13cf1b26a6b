pub mod errors;
pub mod db;
pub mod dates;
pub mod user;
pub mod order;
pub mod offer;

#[cfg(test)]
mod tests;
