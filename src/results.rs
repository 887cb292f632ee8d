// src/results.rs
//! Values that carry non-fatal warnings alongside them
//!
//! Warnings are data: they are combined by concatenation, left operand
//! first, and are never dropped or reordered.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Warning {
    pub message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Diagnosed<T> {
    pub value: T,
    pub warnings: Vec<Warning>,
}

impl<T> Diagnosed<T> {
    pub fn new(value: T, warnings: Vec<Warning>) -> Self {
        Self { value, warnings }
    }

    pub fn success(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    pub fn with_warning(value: T, warning: Warning) -> Self {
        Self::new(value, vec![warning])
    }

    pub fn into_parts(self) -> (T, Vec<Warning>) {
        (self.value, self.warnings)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Diagnosed<U> {
        Diagnosed::new(f(self.value), self.warnings)
    }

    /// Chain a computation that produces its own warnings. Ours come first.
    pub fn flat_map<U>(self, f: impl FnOnce(T) -> Diagnosed<U>) -> Diagnosed<U> {
        let mut warnings = self.warnings;
        let next = f(self.value);
        warnings.extend(next.warnings);
        Diagnosed::new(next.value, warnings)
    }

    /// Combine two values; `self`'s warnings precede `other`'s.
    pub fn combine<U, R>(self, other: Diagnosed<U>, f: impl FnOnce(T, U) -> R) -> Diagnosed<R> {
        let mut warnings = self.warnings;
        warnings.extend(other.warnings);
        Diagnosed::new(f(self.value, other.value), warnings)
    }
}

impl<T> Diagnosed<Vec<T>> {
    /// Flatten a sequence of results: values and warnings both keep
    /// sequence order.
    pub fn concat(results: impl IntoIterator<Item = Diagnosed<Vec<T>>>) -> Self {
        let mut value = Vec::new();
        let mut warnings = Vec::new();
        for result in results {
            value.extend(result.value);
            warnings.extend(result.warnings);
        }
        Self::new(value, warnings)
    }
}

impl<T> FromIterator<Diagnosed<Vec<T>>> for Diagnosed<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Diagnosed<Vec<T>>>>(iter: I) -> Self {
        Self::concat(iter)
    }
}
