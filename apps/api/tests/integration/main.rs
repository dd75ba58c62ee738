mod test_catalog;
mod test_delivery;
mod test_reviews;
