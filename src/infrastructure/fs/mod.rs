//! Storage Implementations
//!
//! Concrete implementations of the CollectionStore port, plus the
//! platform directories they default to.

mod home;
mod local;
mod memory;

pub use home::{default_data_dir, user_config_path, RESI_TEST_HOME_VAR};
pub use local::FsCollectionStore;
pub use memory::MemoryCollectionStore;
