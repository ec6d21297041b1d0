// Infrastructure layer modules
pub mod config;
pub mod logging;
pub mod user_repository;

// Re-exports
pub use config::{DynamoDbConfig, DynamoDbConfigError, TABLE_NAME_ENV};
pub use logging::init_logging;
pub use user_repository::{DynamoUserRepository, RepositoryError, UserRepository};
