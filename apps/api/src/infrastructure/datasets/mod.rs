pub mod pincodes;
pub mod products;
