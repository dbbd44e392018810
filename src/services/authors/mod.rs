/*
 * Responsibility
 * - authors カタログの保存先 (trait + Postgres / in-memory 実装)
 */
pub mod memory;
pub mod postgres;
mod store;

pub use memory::MemoryAuthorStore;
pub use postgres::PgAuthorStore;
pub use store::{Author, AuthorStore};
