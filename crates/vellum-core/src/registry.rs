//! Keyed registry of shared loggers with header alignment.
//!
//! A [`Registry`] maps application-defined keys (integers, strings, enums;
//! anything `Ord + Clone + Display`) to shared [`Logger`] handles, so
//! independent call sites can reach the same named logger. After every
//! create and remove it re-aligns all headers to a common width, which keeps
//! the output columns of several loggers writing to one terminal flush.
//!
//! There is no ambient global instance: the application constructs a
//! registry at its entry point and passes the handle to whoever logs.

use crate::logger::Logger;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use vellum_types::{Result, VellumError};

/// A thread-safe map from key to shared logger.
///
/// Every operation, reads included, goes through one registry-level mutex
/// (distinct from any logger's own mutex). Returned handles are `Arc`s:
/// they stay usable after the key is removed, the registry merely drops its
/// own reference.
///
/// # Example
///
/// ```
/// use vellum_core::Registry;
/// use vellum_types::DEBUG;
///
/// let registry: Registry<&str> = Registry::new();
/// let api = registry.create("api", "api", DEBUG, '|').unwrap();
/// assert!(registry.contains(&"api"));
/// assert!(registry.create("api", "api", DEBUG, '|').is_err());
/// api.toggle_color(false);
/// ```
pub struct Registry<K> {
    loggers: Mutex<BTreeMap<K, Arc<Logger>>>,
}

impl<K> Registry<K> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            loggers: Mutex::new(BTreeMap::new()),
        }
    }
}

impl<K> Default for Registry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone + fmt::Display> Registry<K> {
    /// Create and store a logger under `key`, then re-align all headers.
    ///
    /// # Errors
    ///
    /// [`VellumError::LoggerExists`] if the key is already taken.
    pub fn create(
        &self,
        key: K,
        header: impl Into<String>,
        min_level: u32,
        separator: char,
    ) -> Result<Arc<Logger>> {
        let mut loggers = self.loggers.lock();
        if loggers.contains_key(&key) {
            return Err(VellumError::LoggerExists(key.to_string()));
        }
        let logger = Arc::new(Logger::new(header, min_level, separator));
        loggers.insert(key, Arc::clone(&logger));
        adjust_header_length(&loggers);
        Ok(logger)
    }

    /// Remove the logger under `key`, then re-align the remaining headers.
    ///
    /// Handles obtained earlier stay usable; only the registry's reference
    /// is dropped.
    ///
    /// # Errors
    ///
    /// [`VellumError::LoggerNotFound`] if the key is absent.
    pub fn remove(&self, key: &K) -> Result<()> {
        let mut loggers = self.loggers.lock();
        if loggers.remove(key).is_none() {
            return Err(VellumError::LoggerNotFound(key.to_string()));
        }
        adjust_header_length(&loggers);
        Ok(())
    }

    /// Fetch the logger under `key`.
    ///
    /// # Errors
    ///
    /// [`VellumError::LoggerNotFound`] if the key is absent.
    pub fn get(&self, key: &K) -> Result<Arc<Logger>> {
        self.loggers
            .lock()
            .get(key)
            .cloned()
            .ok_or_else(|| VellumError::LoggerNotFound(key.to_string()))
    }

    /// Whether a logger is stored under `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.loggers.lock().contains_key(key)
    }

    /// Remove every stored logger.
    pub fn clear(&self) {
        self.loggers.lock().clear();
    }

    /// Number of stored loggers.
    pub fn len(&self) -> usize {
        self.loggers.lock().len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.loggers.lock().is_empty()
    }

    /// Snapshot of the stored loggers, in key order.
    pub fn loggers(&self) -> Vec<(K, Arc<Logger>)> {
        self.loggers
            .lock()
            .iter()
            .map(|(key, logger)| (key.clone(), Arc::clone(logger)))
            .collect()
    }
}

/// Left-align every header to the width of the longest trimmed header.
///
/// Two passes: the maximum is only known after all headers are trimmed.
/// Trimming first also keeps padding from accumulating across repeated
/// create/remove cycles.
fn adjust_header_length<K>(loggers: &BTreeMap<K, Arc<Logger>>) {
    let mut max_len = 0;
    for logger in loggers.values() {
        let trimmed = logger.header().trim().to_string();
        max_len = max_len.max(trimmed.chars().count());
        logger.set_header(trimmed);
    }
    for logger in loggers.values() {
        let padded = format!("{:<width$}", logger.header(), width = max_len);
        logger.set_header(padded);
    }
}
