//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the lower layers into the two structurally
//! intricate operations of the crate: the additive-AND input validator and
//! the confidence-interval formatter.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Stats
//!   ↓
//! Layer 3: Numeric
//!   ↓
//! Layer 2: Text
//!   ↓
//! Layer 1: Primitives
//! ```

/// Confidence-interval formatting.
pub mod confint;

/// Validation utilities.
pub mod validator;
