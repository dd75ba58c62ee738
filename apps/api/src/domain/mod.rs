pub mod catalog;
pub mod delivery;
pub mod order;
pub mod review;
pub mod shared;
