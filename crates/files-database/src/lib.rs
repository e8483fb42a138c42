//! # files-database
//!
//! Metadata store for Files Manager: the [`FileStore`] contract, its
//! PostgreSQL implementation, an in-process implementation, connection
//! management and migrations.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryFileStore;
pub use provider::open_file_store;
pub use repositories::FileRepository;
pub use store::{FileFilter, FileStore};
