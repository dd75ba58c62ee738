use crate::{
    config::Config,
    domain::{
        catalog::entity::Catalog, delivery::area_set::ServiceableAreaSet,
        review::repository::ReviewRepository,
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub area_set: Arc<ServiceableAreaSet>,
    pub catalog: Arc<Catalog>,
    pub review_repo: Arc<dyn ReviewRepository>,
}
