//! Persistence layer for the trivia service: SQLite pool, migrations,
//! models, request/response DTOs and the repositories over them.

pub mod db;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod seed;

pub use db::Database;
