//! Attrib Domain Layer
//!
//! This crate holds the attribution model for a package and the rules that
//! decide whether a package's set of attributions is a legal combination.
//! It performs no I/O and keeps its dependencies to error and serde derives.
//!
//! ## Key Concepts
//!
//! - **Attribution**: a named sub-division of a package (tag, label, inherit-from list)
//! - **Combination**: every attribution declared by one package, validated as a unit
//! - **Inherit-from**: a reference to a retired tag, never to one declared in the same batch
//! - **Limits**: the platform caps on combination size and tag length
//!
//! ## Example
//!
//! ```
//! use attrib_domain::{is_combination_valid, Attribution, LabelRes};
//!
//! let attributions = vec![
//!     Attribution::new("a", LabelRes::NONE, vec![]),
//!     Attribution::new("b", LabelRes::NONE, vec!["x".to_string()]),
//! ];
//! assert!(is_combination_valid(Some(attributions.as_slice())));
//! assert!(is_combination_valid(None));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attribution;
pub mod combination;
pub mod limits;

// Re-exports for convenience
pub use attribution::{Attribution, AttributionError, LabelRes};
pub use combination::{check_combination, is_combination_valid, CombinationViolation};
pub use limits::{Limits, MAX_ATTRIBUTION_TAG_LEN, MAX_NUM_ATTRIBUTIONS};
