//! Layer 2: Text
//!
//! # Purpose
//!
//! This layer provides pure text transformations used throughout the crate:
//! - LaTeX special-character escaping
//! - Model-term sanitization and prettification
//!
//! These are reusable string building blocks with no statistical logic.
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
//! Layer 3: Numeric
//!   ↓
//! Layer 2: Text ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// LaTeX special-character escaping.
pub mod latex;

/// Model-term sanitization and prettification.
pub mod terms;
