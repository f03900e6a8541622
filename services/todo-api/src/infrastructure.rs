// Infrastructure layer modules
pub mod log_store;
pub mod logging;
pub mod postgrest;
pub mod todo_repository;

// Re-exports
pub use log_store::{LogStore, LogStoreError, StoreResponse};
pub use logging::init_logging;
pub use postgrest::{LogStoreConfig, LogStoreConfigError, PostgrestLogStore};
pub use todo_repository::{SampleTodoRepository, TodoRepository, TodoRepositoryError};
