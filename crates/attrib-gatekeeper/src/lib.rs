//! Attrib Gatekeeper
//!
//! Decides whether a package's attributions may be accepted.
//!
//! The Gatekeeper provides:
//! - The combination check (size cap, unique tags, inherit-from rules)
//! - Optional tag length enforcement in the same pass
//! - The first violation found, for logging and reporting
//! - TOML-loadable policy that may tighten, never loosen, the platform limits
//!
//! # Examples
//!
//! ```
//! use attrib_domain::Attribution;
//! use attrib_gatekeeper::{Gatekeeper, ValidationConfig, ValidationStatus};
//!
//! let gatekeeper = Gatekeeper::new(ValidationConfig::default());
//!
//! let attributions = vec![Attribution::new("a", 0, vec!["retired".into()])];
//! let result = gatekeeper.validate(Some(attributions.as_slice()));
//! assert_eq!(result.status, ValidationStatus::Accepted);
//! ```

#![warn(missing_docs)]

mod validator;
mod error;
mod config;

pub use validator::{Gatekeeper, ValidationResult, ValidationStatus};
pub use error::GatekeeperError;
pub use config::ValidationConfig;
