//! Storage layer: the parameterized SQL behind the record store.

pub mod record_repository;

pub use record_repository::RecordRepository;
