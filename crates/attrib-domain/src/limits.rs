//! Platform limits for attribution combinations

/// Maximum length of an attribution tag, in UTF-16 code units
pub const MAX_ATTRIBUTION_TAG_LEN: usize = 50;

/// Maximum number of attributions a single package may declare
pub const MAX_NUM_ATTRIBUTIONS: usize = 1000;

/// Bounds applied while checking a combination
///
/// [`Limits::PLATFORM`] is the fixed policy behind
/// [`is_combination_valid`](crate::is_combination_valid). Callers that want
/// tag lengths enforced in the same pass, or a tighter cap, build their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Inclusive upper bound on the number of records
    pub max_attributions: usize,

    /// Inclusive upper bound on tag length; `None` leaves it to the loader
    pub max_tag_len: Option<usize>,
}

impl Limits {
    /// The platform policy: at most 1000 records, tag length checked elsewhere
    pub const PLATFORM: Limits = Limits {
        max_attributions: MAX_NUM_ATTRIBUTIONS,
        max_tag_len: None,
    };

    /// Platform policy with the tag length bound enforced as well
    pub const STRICT: Limits = Limits {
        max_attributions: MAX_NUM_ATTRIBUTIONS,
        max_tag_len: Some(MAX_ATTRIBUTION_TAG_LEN),
    };
}

impl Default for Limits {
    fn default() -> Self {
        Self::PLATFORM
    }
}
