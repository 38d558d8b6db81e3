pub mod data;
pub mod repository;
