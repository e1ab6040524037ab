//! Combination gate over a package's attributions

use attrib_domain::{check_combination, Attribution, CombinationViolation, Limits};
use tracing::{debug, warn};

use crate::ValidationConfig;

/// Result of combination validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the combination passed validation
    pub status: ValidationStatus,

    /// First rule broken (if rejected)
    pub reason: Option<CombinationViolation>,

    /// Number of attributions inspected
    pub count: usize,
}

impl ValidationResult {
    /// Whether the package's attributions may be kept
    pub fn is_accepted(&self) -> bool {
        self.status == ValidationStatus::Accepted
    }
}

/// Validation status
///
/// Rejection is all-or-nothing: the caller discards every attribution of the
/// package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Combination accepted
    Accepted,

    /// Combination rejected
    Rejected,
}

/// The Gatekeeper validates a package's attributions before they are accepted
#[derive(Debug, Clone)]
pub struct Gatekeeper {
    limits: Limits,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            limits: config.limits(),
        }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Validate a package's attributions against the configured limits
    ///
    /// # Arguments
    ///
    /// * `attributions` - Every attribution the package declares, or `None`
    ///   if it declares none
    ///
    /// # Returns
    ///
    /// A result carrying the verdict and, when rejected, the first violation
    pub fn validate(&self, attributions: Option<&[Attribution]>) -> ValidationResult {
        let attributions = attributions.unwrap_or_default();

        match check_combination(attributions, &self.limits) {
            Ok(()) => {
                debug!(count = attributions.len(), "Attribution combination accepted");
                ValidationResult {
                    status: ValidationStatus::Accepted,
                    reason: None,
                    count: attributions.len(),
                }
            }
            Err(violation) => {
                warn!(
                    count = attributions.len(),
                    "Attribution combination rejected: {}", violation
                );
                ValidationResult {
                    status: ValidationStatus::Rejected,
                    reason: Some(violation),
                    count: attributions.len(),
                }
            }
        }
    }

    /// Boolean gate for callers that only need the verdict
    pub fn is_valid(&self, attributions: Option<&[Attribution]>) -> bool {
        self.validate(attributions).is_accepted()
    }
}

impl Default for Gatekeeper {
    fn default() -> Self {
        Self::default_config()
    }
}
