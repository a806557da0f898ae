// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fluent builder and the immutable equality definition it produces.
//!
//! [`Builder`] accumulates an ordered list of value extractors plus a
//! sub-type policy; [`Builder::define`] snapshots that configuration into an
//! [`Equality`]. The same extractor list drives both `equals` and
//! `hash_code`, in the same order, which is what guarantees that two values
//! reported equal always hash equally.
//!
//! Sub-typing has no runtime representation in Rust, so the policy is
//! declared rather than discovered: [`Builder::or_sub_type`] registers a
//! [`Borrow`]-based view for each type that should be accepted as a sub-type
//! of the subject. With the policy disabled (the default) only the exact
//! subject type matches.

use crate::extract::ExtractedValue;
use std::any::Any;
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::ptr;
use std::sync::Arc;

/// Extracts one comparable component from a subject value.
type ExtractFn<T> = Arc<dyn Fn(&T) -> Box<dyn ExtractedValue> + Send + Sync>;

/// Projects an untyped candidate into a view of the subject type.
type ViewFn<T> = Arc<dyn for<'a> Fn(&'a dyn Any) -> Option<&'a T> + Send + Sync>;

fn sub_type_view<T, S>(candidate: &dyn Any) -> Option<&T>
where
    T: Any,
    S: Any + Borrow<T>,
{
    candidate.downcast_ref::<S>().map(Borrow::borrow)
}

/// Mutable configuration for an [`Equality`] definition.
///
/// Chain [`check_equality`](Self::check_equality) calls to declare which
/// components participate in comparison; call order is comparison order and
/// hash-fold order. The builder is reusable: [`define`](Self::define) can be
/// called any number of times, each call producing an independent definition
/// with a snapshot of the configuration at that point.
///
/// Not thread-safe; configure from a single thread, then share the produced
/// definitions freely.
pub struct Builder<T: Any> {
    extractors: Vec<ExtractFn<T>>,
    sub_views: Vec<ViewFn<T>>,
    allow_sub_types: bool,
}

impl<T: Any> Builder<T> {
    fn new() -> Self {
        Builder {
            extractors: Vec::new(),
            sub_views: Vec::new(),
            allow_sub_types: false,
        }
    }

    /// Enable sub-type matching: the untyped operand of `equals` may be any
    /// registered sub-type of the subject, not only the exact type.
    ///
    /// Idempotent. Rust cannot enumerate sub-types at runtime, so the set of
    /// accepted types is exactly the exact subject type plus whatever
    /// [`or_sub_type`](Self::or_sub_type) registered.
    pub fn or_any_sub_type(mut self) -> Self {
        self.allow_sub_types = true;
        self
    }

    /// Register `S` as an accepted sub-type of the subject, viewed through
    /// its [`Borrow`] impl, and enable sub-type matching.
    pub fn or_sub_type<S>(mut self) -> Self
    where
        S: Any + Borrow<T>,
    {
        self.allow_sub_types = true;
        self.sub_views.push(Arc::new(sub_type_view::<T, S>));
        self
    }

    /// Append an extractor to the comparison sequence.
    ///
    /// The extractor must be total, deterministic and side-effect free.
    /// Components that may be absent are expressed as `Option<V>`, whose own
    /// `PartialEq`/`Hash` give the expected absent-equals-absent semantics.
    pub fn check_equality<F, V>(mut self, extractor: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: Any + PartialEq + Hash,
    {
        self.extractors.push(Arc::new(move |subject: &T| {
            Box::new(extractor(subject)) as Box<dyn ExtractedValue>
        }));
        self
    }

    /// Freeze the current configuration into an immutable definition.
    pub fn define(&self) -> Equality<T> {
        Equality {
            extractors: self.extractors.clone(),
            sub_views: self.sub_views.clone(),
            allow_sub_types: self.allow_sub_types,
        }
    }
}

/// Immutable structural equality and hash definition for values of `T`.
///
/// Produced by [`Builder::define`]. Holds nothing beyond the snapshot it was
/// built from; cloning is cheap (shared `Arc` handles) and instances are
/// `Send + Sync` regardless of `T`.
pub struct Equality<T: Any> {
    extractors: Vec<ExtractFn<T>>,
    sub_views: Vec<ViewFn<T>>,
    allow_sub_types: bool,
}

impl<T: Any> Equality<T> {
    /// Start configuring a definition for subject type `T`.
    pub fn on_type() -> Builder<T> {
        Builder::new()
    }

    /// Structural equality between a typed subject and an untyped candidate.
    ///
    /// Returns `false` when the candidate is not of an accepted type under
    /// the configured sub-type policy; a mismatched shape is a defined
    /// result, never an error. Extractors are evaluated in declared order
    /// and the first disagreeing pair short-circuits the rest. Comparing a
    /// value against itself returns `true` without evaluating extractors.
    pub fn equals(&self, first: &T, second: &dyn Any) -> bool {
        let Some(second) = self.resolve(second) else {
            return false;
        };
        // Same object: no extraction needed. Resolution happens first so an
        // address shared by a wrapper and its first field cannot alias
        // across types.
        if ptr::eq(first, second) {
            return true;
        }
        self.extractors
            .iter()
            .all(|extract| extract(first).eq_dyn(extract(second).as_ref()))
    }

    /// Polynomial hash over the extracted components, base 31.
    ///
    /// Folds the same extractors in the same order as
    /// [`equals`](Self::equals): `acc = acc * 31 + leaf` in wrapping `u64`
    /// arithmetic, starting from 1. Values equal under this definition hash
    /// identically.
    pub fn hash_code(&self, first: &T) -> u64 {
        self.extractors.iter().fold(1_u64, |acc, extract| {
            acc.wrapping_mul(31).wrapping_add(extract(first).hash_dyn())
        })
    }

    /// Whether sub-type matching was enabled at definition time.
    pub fn allows_sub_types(&self) -> bool {
        self.allow_sub_types
    }

    /// Number of extractors participating in comparison and hashing.
    pub fn extractor_count(&self) -> usize {
        self.extractors.len()
    }

    /// Resolve the untyped candidate as `&T` under the sub-type policy:
    /// exact type first, then registered views in registration order.
    fn resolve<'a>(&self, second: &'a dyn Any) -> Option<&'a T> {
        if let Some(exact) = second.downcast_ref::<T>() {
            return Some(exact);
        }
        if self.allow_sub_types {
            return self.sub_views.iter().find_map(|view| view(second));
        }
        None
    }
}

impl<T: Any> Clone for Equality<T> {
    fn clone(&self) -> Self {
        Equality {
            extractors: self.extractors.clone(),
            sub_views: self.sub_views.clone(),
            allow_sub_types: self.allow_sub_types,
        }
    }
}

impl<T: Any> fmt::Debug for Equality<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Equality")
            .field("extractors", &self.extractors.len())
            .field("sub_views", &self.sub_views.len())
            .field("allow_sub_types", &self.allow_sub_types)
            .finish()
    }
}
