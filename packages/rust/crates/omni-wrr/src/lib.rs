#![allow(clippy::doc_markdown)]

//! omni-wrr - Weighted round-robin selection
//!
//! Features:
//! - Validated integer percentage distributions (entries in [0, 100], sum 100)
//! - Single weighted picks via inverse-CDF sampling
//! - Pick vectors: full permutations ordered by weighted draws without replacement
//! - 100% shortcut: a certain option goes first with no random draws
//! - Thread-local or caller-injected `rand::Rng`, never reseeded per selector
//!
//! # Architecture
//!
//! ```text
//! omni-wrr/src/
//! ├── lib.rs       # Re-exports (this file)
//! ├── error.rs     # SelectorError
//! ├── cdf.rs       # derive_cdf, lookup_index
//! └── selector.rs  # WeightedSelector
//! ```
//!
//! # Example
//!
//! ```rust
//! use omni_wrr::WeightedSelector;
//!
//! let selector = WeightedSelector::new(&[30, 70])?;
//! let index = selector.pick();
//! assert!(index < 2);
//!
//! let order = selector.pick_vector();
//! assert!(order == vec![0, 1] || order == vec![1, 0]);
//! # Ok::<(), omni_wrr::SelectorError>(())
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod cdf;
mod error;
mod selector;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use cdf::{derive_cdf, lookup_index};
pub use error::SelectorError;
pub use selector::WeightedSelector;
