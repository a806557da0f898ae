// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type-erased view of extracted values.
//!
//! Every extractor registered on a [`Builder`](crate::Builder) may return a
//! different type, so the definition stores extraction results behind one
//! object-safe facade. Comparing values of mismatched types yields `false`
//! rather than an error: an operand of unexpected shape is simply not equal.

use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Object-safe facade over `Any + PartialEq + Hash`.
///
/// The blanket impl below covers every eligible type; users never implement
/// this trait themselves.
pub trait ExtractedValue {
    /// Upcast for downcast-based comparison.
    fn as_any(&self) -> &dyn Any;

    /// Compare against another extracted value of possibly different type.
    fn eq_dyn(&self, other: &dyn ExtractedValue) -> bool;

    /// Digest of the value's own `Hash`, used as one leaf of the hash fold.
    fn hash_dyn(&self) -> u64;
}

impl<V: Any + PartialEq + Hash> ExtractedValue for V {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_dyn(&self, other: &dyn ExtractedValue) -> bool {
        other
            .as_any()
            .downcast_ref::<V>()
            .is_some_and(|value| self == value)
    }

    fn hash_dyn(&self) -> u64 {
        // DefaultHasher::new() is unkeyed: leaf digests are stable across
        // runs of the same build of std, which is all the fold requires.
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}
