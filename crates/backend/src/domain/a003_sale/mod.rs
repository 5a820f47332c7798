pub mod detail_repository;
pub mod repository;
pub mod service;
