pub mod author_repo;
pub mod error;
pub mod user_repo;
