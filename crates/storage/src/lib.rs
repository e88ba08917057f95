#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    FlagRepository, InMemoryRepository, PreferenceRepository, Storage, StorageError,
};
