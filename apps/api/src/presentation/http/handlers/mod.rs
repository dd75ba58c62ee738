pub mod delivery;
pub mod docs;
pub mod health;
pub mod orders;
pub mod products;
pub mod reviews;
