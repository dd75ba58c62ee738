pub mod check_delivery;
pub mod place_order;
pub mod reviews;
