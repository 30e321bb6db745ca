//! Repositories for database operations

pub mod posts;
pub mod users;

// Re-export for convenience
pub use posts::PostRepository;
pub use users::UserRepository;
