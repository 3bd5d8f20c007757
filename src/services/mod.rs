// Service exports
pub mod memory;
pub mod postgres;
pub mod repository;

pub use memory::InMemoryRepository;
pub use postgres::{PostgresRepository, PostgresOptions};
pub use repository::{OpportunityRepository, OpportunityFilter, RepositoryError};
