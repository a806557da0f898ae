//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::equality::Equality;
use std::borrow::Borrow;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Canonical two-field subject type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Wrapper playing the sub-type role: borrows as its base [`Point`].
#[derive(Debug, Clone)]
pub struct Point3 {
    pub base: Point,
    pub z: i32,
}

impl Borrow<Point> for Point3 {
    fn borrow(&self) -> &Point {
        &self.base
    }
}

/// Subject with an optional component.
#[derive(Debug, Clone)]
pub struct Tagged {
    pub id: u32,
    pub label: Option<String>,
}

/// The canonical Point definition: compares x then y, exact type only.
pub fn point_equality() -> Equality<Point> {
    Equality::<Point>::on_type()
        .check_equality(|p: &Point| p.x)
        .check_equality(|p: &Point| p.y)
        .define()
}

/// Wrap an extractor so tests can observe how often it runs.
///
/// Production extractors must be side-effect free; this counting double
/// exists only to verify short-circuit behavior.
pub fn counting_extractor<T, V, F>(
    counter: Arc<AtomicUsize>,
    extract: F,
) -> impl Fn(&T) -> V + Send + Sync + 'static
where
    F: Fn(&T) -> V + Send + Sync + 'static,
    T: 'static,
{
    move |subject: &T| {
        counter.fetch_add(1, Ordering::Relaxed);
        extract(subject)
    }
}
