pub mod in_memory_review_repository;
