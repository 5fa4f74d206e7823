//! In-memory key/value store adapter.
//!
//! Implements [`StoragePort`] on top of a `HashMap`. Hosts without their
//! own persistence wrap it in a [`StorageConfig`](super::StorageConfig);
//! everyone else uses it in tests.

use std::collections::HashMap;

use crate::app::ports::{StorageError, StoragePort};

/// Largest blob the store accepts.
pub const MAX_BLOB_SIZE: usize = 4000;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn composite_key(namespace: &str, key: &str) -> String {
        format!("{}::{}", namespace, key)
    }
}

impl StoragePort for MemoryStore {
    fn read(&self, namespace: &str, key: &str, buf: &mut [u8]) -> Result<usize, StorageError> {
        let data = self
            .entries
            .get(&Self::composite_key(namespace, key))
            .ok_or(StorageError::NotFound)?;
        if data.len() > buf.len() {
            return Err(StorageError::BufferTooSmall);
        }
        buf[..data.len()].copy_from_slice(data);
        Ok(data.len())
    }

    fn write(&mut self, namespace: &str, key: &str, data: &[u8]) -> Result<(), StorageError> {
        if data.len() > MAX_BLOB_SIZE {
            return Err(StorageError::Full);
        }
        self.entries
            .insert(Self::composite_key(namespace, key), data.to_vec());
        Ok(())
    }

    fn delete(&mut self, namespace: &str, key: &str) -> Result<(), StorageError> {
        self.entries.remove(&Self::composite_key(namespace, key));
        Ok(())
    }

    fn exists(&self, namespace: &str, key: &str) -> bool {
        self.entries
            .contains_key(&Self::composite_key(namespace, key))
    }
}
