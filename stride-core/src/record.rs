//! Types for recording diagnostic values during environment interaction.
//!
//! A [`Record`] is a flexible container of key-value pairs emitted alongside
//! every environment step. Environments put per-step diagnostics in it, for
//! example the terms of a shaped reward, and callers aggregate or log the
//! values as they see fit.
//!
//! ```rust
//! use stride_core::record::{Record, RecordValue};
//!
//! // following values are obtained with some process in reality
//! let step = 1;
//! let reward = -1f32;
//!
//! let mut record = Record::empty();
//! record.insert("Step", RecordValue::Scalar(step as f32));
//! record.insert("Reward", RecordValue::Scalar(reward));
//! ```
use crate::error::StrideError;
use chrono::prelude::{DateTime, Local};
use std::{
    collections::{
        hash_map::{IntoIter, Iter, Keys},
        HashMap,
    },
    convert::Into,
    iter::IntoIterator,
};

/// Represents possible types of values that can be stored in a [`Record`].
#[derive(Debug, Clone)]
pub enum RecordValue {
    /// A single floating-point value, typically used for metrics.
    Scalar(f32),

    /// A timestamp with local timezone, useful for logging events.
    DateTime(DateTime<Local>),

    /// A 1-dimensional array of floating-point values.
    Array1(Vec<f32>),

    /// A text value, useful for storing labels or descriptions.
    String(String),
}

/// A container for storing key-value pairs of various data types.
#[derive(Debug)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a record containing a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        Self(HashMap::from([(name.into(), RecordValue::Scalar(value))]))
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Returns an iterator over the keys in the record.
    pub fn keys(&self) -> Keys<String, RecordValue> {
        self.0.keys()
    }

    /// Inserts a key-value pair into the record.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Returns an iterator over the key-value pairs in the record.
    pub fn iter(&self) -> Iter<'_, String, RecordValue> {
        self.0.iter()
    }

    /// Returns an iterator that consumes the record.
    pub fn into_iter_in_record(self) -> IntoIter<String, RecordValue> {
        self.0.into_iter()
    }

    /// Gets a reference to the value associated with the given key.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.get(k)
    }

    /// Merges two records, consuming both.
    ///
    /// If both records contain the same key, the value from the second record
    /// will overwrite the value from the first record.
    pub fn merge(self, record: Record) -> Self {
        Record(self.0.into_iter().chain(record.0).collect())
    }

    /// Merges another record into this one in place.
    ///
    /// If both records contain the same key, the value from the second record
    /// will overwrite the value from this record.
    pub fn merge_inplace(&mut self, record: Record) {
        for (k, v) in record.iter() {
            self.0.insert(k.clone(), v.clone());
        }
    }

    /// Gets a scalar value from the record.
    ///
    /// Returns an error if the key does not exist or the value is not a
    /// scalar.
    pub fn get_scalar(&self, k: &str) -> Result<f32, StrideError> {
        if let Some(v) = self.0.get(k) {
            match v {
                RecordValue::Scalar(v) => Ok(*v as _),
                _ => Err(StrideError::RecordValueTypeError("Scalar".to_string())),
            }
        } else {
            Err(StrideError::RecordKeyError(k.to_string()))
        }
    }

    /// Gets a 1-dimensional array from the record.
    ///
    /// Returns an error if the key does not exist or the value is not an
    /// `Array1`.
    pub fn get_array1(&self, k: &str) -> Result<Vec<f32>, StrideError> {
        if let Some(v) = self.0.get(k) {
            match v {
                RecordValue::Array1(v) => Ok(v.clone()),
                _ => Err(StrideError::RecordValueTypeError("Array1".to_string())),
            }
        } else {
            Err(StrideError::RecordKeyError(k.to_string()))
        }
    }

    /// Gets a string value from the record.
    ///
    /// Returns an error if the key does not exist or the value is not a
    /// string.
    pub fn get_string(&self, k: &str) -> Result<String, StrideError> {
        if let Some(v) = self.0.get(k) {
            match v {
                RecordValue::String(s) => Ok(s.clone()),
                _ => Err(StrideError::RecordValueTypeError("String".to_string())),
            }
        } else {
            Err(StrideError::RecordKeyError(k.to_string()))
        }
    }

    /// Returns true if the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
