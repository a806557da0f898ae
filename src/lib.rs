//! Structural equality and hash definitions built from value extractors.
//!
//! A definition is configured once with a fluent builder and then answers two
//! questions about values of its subject type: "are these two equal" and
//! "what is this value's hash". Both answers are derived from the same
//! ordered list of extractors, so equal values always hash equally.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   define()   ┌───────────────────┐
//! │  Builder<T>  │─────────────▶│    Equality<T>    │
//! │ (extractors, │              │ equals(&T, &Any)  │
//! │  sub-types)  │              │ hash_code(&T)     │
//! └──────────────┘              └───────────────────┘
//!                                        │
//!                                        ▼
//!                               ┌───────────────────┐
//!                               │  ExtractedValue   │
//!                               │ (dyn eq + hash)   │
//!                               └───────────────────┘
//! ```
//!
//! | Module      | Responsibility                                  |
//! |-------------|-------------------------------------------------|
//! | `equality`  | Builder and the immutable definition            |
//! | `extract`   | Type-erased equality/hash over extracted values |
//! | `contracts` | Debug-mode contract checks                      |
//! | `testing`   | Shared test fixtures (doc-hidden)               |
//!
//! # Usage
//!
//! ```
//! use alike::Equality;
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let by_coords = Equality::<Point>::on_type()
//!     .check_equality(|p: &Point| p.x)
//!     .check_equality(|p: &Point| p.y)
//!     .define();
//!
//! let a = Point { x: 1, y: 2 };
//! let b = Point { x: 1, y: 2 };
//! assert!(by_coords.equals(&a, &b));
//! assert_eq!(by_coords.hash_code(&a), by_coords.hash_code(&b));
//! ```
//!
//! # Thread safety
//!
//! The builder is a plain value meant for sequential configuration, usually
//! at startup. Definitions are immutable once produced and are `Send + Sync`,
//! so a single definition can serve any number of threads concurrently.

pub mod contracts;
mod equality;
mod extract;
pub mod testing;

// Re-exports for public API
pub use equality::{Builder, Equality};
pub use extract::ExtractedValue;
