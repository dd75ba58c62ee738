use crate::domain::{
    catalog::entity::{Catalog, Product},
    shared::errors::DatasetError,
};
use serde::Deserialize;
use std::path::Path;

const BUNDLED_PRODUCTS: &str = include_str!("../../../data/products.json");

#[derive(Deserialize)]
struct RawProduct {
    name: String,
    price: f64,
    #[serde(default)]
    image: String,
    #[serde(default)]
    description: String,
}

/// Load the product catalog. Ids are assigned from 1 in file order.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, DatasetError> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?,
        None => BUNDLED_PRODUCTS.to_string(),
    };
    let catalog = parse_catalog(&raw)?;
    tracing::info!(count = catalog.len(), "Loaded product catalog");
    Ok(catalog)
}

pub fn parse_catalog(raw: &str) -> Result<Catalog, DatasetError> {
    let products: Vec<RawProduct> = serde_json::from_str(raw)?;
    Ok(Catalog::new(
        products
            .into_iter()
            .enumerate()
            .map(|(idx, p)| Product {
                id: (idx + 1).to_string(),
                name: p.name,
                price: p.price,
                image: p.image,
                description: p.description,
            })
            .collect(),
    ))
}
