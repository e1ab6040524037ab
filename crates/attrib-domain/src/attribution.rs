//! Attribution module - one `<attribution>` declaration of a package

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::MAX_ATTRIBUTION_TAG_LEN;

/// Errors raised while constructing an [`Attribution`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributionError {
    /// The tag was absent
    #[error("attribution tag is required")]
    MissingTag,

    /// The inherit-from list was absent
    #[error("attribution inherit-from list is required")]
    MissingInheritFrom,
}

/// Opaque handle to the user-visible label of an attribution
///
/// This is a string resource id on the platform. Nothing in this crate
/// interprets it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelRes(i32);

impl LabelRes {
    /// No label
    pub const NONE: LabelRes = LabelRes(0);

    /// Wrap a raw resource id
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw resource id
    pub const fn id(&self) -> i32 {
        self.0
    }
}

impl From<i32> for LabelRes {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// A single attribution declared by a package
///
/// Immutable once built. Whether a set of attributions may coexist is decided
/// by [`is_combination_valid`](crate::is_combination_valid), not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AttributionRepr")]
pub struct Attribution {
    tag: String,
    label: LabelRes,
    inherit_from: Vec<String>,
}

impl Attribution {
    /// Create a new attribution
    ///
    /// Any tag is accepted, including an empty one. Length and uniqueness are
    /// properties of the combination, not of a single record.
    ///
    /// # Examples
    ///
    /// ```
    /// use attrib_domain::{Attribution, LabelRes};
    ///
    /// let attribution = Attribution::new("location", LabelRes::new(7), vec!["gps".into()]);
    /// assert_eq!(attribution.tag(), "location");
    /// assert_eq!(attribution.inherit_from(), ["gps"]);
    /// ```
    pub fn new(
        tag: impl Into<String>,
        label: impl Into<LabelRes>,
        inherit_from: Vec<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            label: label.into(),
            inherit_from,
        }
    }

    /// Create an attribution from fields that may be absent
    ///
    /// This is the construction path for decoders, where a missing tag or
    /// list is representable on the wire.
    pub fn from_parts(
        tag: Option<String>,
        label: impl Into<LabelRes>,
        inherit_from: Option<Vec<String>>,
    ) -> Result<Self, AttributionError> {
        let tag = tag.ok_or(AttributionError::MissingTag)?;
        let inherit_from = inherit_from.ok_or(AttributionError::MissingInheritFrom)?;
        Ok(Self::new(tag, label, inherit_from))
    }

    /// Tag of the attribution
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// User visible label of the attribution
    pub fn label(&self) -> LabelRes {
        self.label
    }

    /// Tags of retired attributions this attribution inherits from
    pub fn inherit_from(&self) -> &[String] {
        &self.inherit_from
    }

    /// Tag length as the platform measures it (UTF-16 code units)
    pub fn tag_len(&self) -> usize {
        self.tag.encode_utf16().count()
    }

    /// Whether the tag fits within [`MAX_ATTRIBUTION_TAG_LEN`]
    pub fn tag_within_limit(&self) -> bool {
        self.tag_len() <= MAX_ATTRIBUTION_TAG_LEN
    }
}

impl fmt::Display for Attribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)?;
        if !self.inherit_from.is_empty() {
            write!(f, " (inherits {})", self.inherit_from.join(", "))?;
        }
        Ok(())
    }
}

/// Wire shape for deserialization; every field may be absent
#[derive(Deserialize)]
struct AttributionRepr {
    tag: Option<String>,
    #[serde(default)]
    label: LabelRes,
    inherit_from: Option<Vec<String>>,
}

impl TryFrom<AttributionRepr> for Attribution {
    type Error = AttributionError;

    fn try_from(repr: AttributionRepr) -> Result<Self, Self::Error> {
        Attribution::from_parts(repr.tag, repr.label, repr.inherit_from)
    }
}
