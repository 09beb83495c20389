//! Layer 3: Numeric
//!
//! # Purpose
//!
//! This layer renders numeric values as manuscript-ready text:
//! - Rounding and zero-padding to a fixed number of decimals
//! - APA leading-zero conventions for statistics bounded by one
//! - Infinity symbols and missing-value placeholders
//! - p-value conventions
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Stats
//!   ↓
//! Layer 3: Numeric ← You are here
//!   ↓
//! Layer 2: Text
//!   ↓
//! Layer 1: Primitives
//! ```

/// Number and p-value formatting.
pub mod format;
