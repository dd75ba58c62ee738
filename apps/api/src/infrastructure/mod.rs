pub mod datasets;
pub mod repositories;
