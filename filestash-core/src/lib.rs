//! Core types and traits for Filestash
//!
//! This crate defines the storage contract shared by every backend binding:
//! the `FileStorage` trait, the `StoredFile` value type, and the object-key
//! path helpers.

pub mod error;
pub mod file;
pub mod path;
pub mod storage;

pub use error::{StorageError, StorageResult};
pub use file::StoredFile;
pub use storage::FileStorage;
