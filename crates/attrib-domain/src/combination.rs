//! Combination validation - may these attributions coexist in one package?

use std::collections::HashSet;

use thiserror::Error;

use crate::{Attribution, Limits};

/// First rule a combination broke
///
/// The boolean gate [`is_combination_valid`] discards this detail; it is
/// kept for callers that log or report why a package was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombinationViolation {
    /// More attributions than the limit allows
    #[error("{count} attributions exceed the maximum of {max}")]
    TooMany {
        /// Number of attributions supplied
        count: usize,
        /// Configured maximum
        max: usize,
    },

    /// Two attributions share a tag
    #[error("attribution tag '{tag}' is declared more than once")]
    DuplicateTag {
        /// The repeated tag
        tag: String,
    },

    /// A tag is longer than the configured bound
    #[error("attribution tag '{tag}' is {len} characters, maximum is {max}")]
    TagTooLong {
        /// The offending tag
        tag: String,
        /// Its length in UTF-16 code units
        len: usize,
        /// Configured maximum
        max: usize,
    },

    /// An attribution inherits from a tag that is still declared
    #[error("attribution '{tag}' inherits from '{inherit_from}', which is declared in the same package")]
    InheritsFromDeclared {
        /// Tag of the inheriting attribution
        tag: String,
        /// The declared tag it names
        inherit_from: String,
    },

    /// An inherited tag is claimed more than once
    #[error("attribution '{tag}' inherits from '{inherit_from}', which is already inherited")]
    DuplicateInheritFrom {
        /// Tag of the attribution making the second claim
        tag: String,
        /// The inherited tag claimed twice
        inherit_from: String,
    },
}

/// Is this set of attributions a valid combination for a single package?
///
/// An absent or empty set is valid. Otherwise the set must have at most
/// [`MAX_NUM_ATTRIBUTIONS`](crate::MAX_NUM_ATTRIBUTIONS) entries, distinct
/// tags, and inherit-from entries that are unique across the whole set and
/// never name a tag declared in it.
///
/// # Examples
///
/// ```
/// use attrib_domain::{is_combination_valid, Attribution};
///
/// let a = Attribution::new("a", 0, vec!["x".into()]);
/// let b = Attribution::new("b", 0, vec!["x".into()]);
///
/// // "x" is claimed twice
/// assert!(!is_combination_valid(Some(&[a, b][..])));
/// ```
pub fn is_combination_valid(attributions: Option<&[Attribution]>) -> bool {
    match attributions {
        None => true,
        Some(attributions) => check_combination(attributions, &Limits::PLATFORM).is_ok(),
    }
}

/// Check a combination and report the first violation in iteration order
///
/// Runs the size gate, then a tag pass over every record, then an
/// inheritance pass. Records are visited in slice order and inherit-from
/// entries in list order.
pub fn check_combination(
    attributions: &[Attribution],
    limits: &Limits,
) -> Result<(), CombinationViolation> {
    if attributions.len() > limits.max_attributions {
        return Err(CombinationViolation::TooMany {
            count: attributions.len(),
            max: limits.max_attributions,
        });
    }

    let mut tags: HashSet<&str> = HashSet::with_capacity(attributions.len());
    for attribution in attributions {
        if let Some(max) = limits.max_tag_len {
            let len = attribution.tag_len();
            if len > max {
                return Err(CombinationViolation::TagTooLong {
                    tag: attribution.tag().to_string(),
                    len,
                    max,
                });
            }
        }

        if !tags.insert(attribution.tag()) {
            return Err(CombinationViolation::DuplicateTag {
                tag: attribution.tag().to_string(),
            });
        }
    }

    let mut inherited: HashSet<&str> = HashSet::new();
    for attribution in attributions {
        for inherit_from in attribution.inherit_from() {
            if tags.contains(inherit_from.as_str()) {
                return Err(CombinationViolation::InheritsFromDeclared {
                    tag: attribution.tag().to_string(),
                    inherit_from: inherit_from.clone(),
                });
            }

            if !inherited.insert(inherit_from.as_str()) {
                return Err(CombinationViolation::DuplicateInheritFrom {
                    tag: attribution.tag().to_string(),
                    inherit_from: inherit_from.clone(),
                });
            }
        }
    }

    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_attribution() -> impl Strategy<Value = Attribution> {
        (
            "[a-d]{1,2}",
            any::<i32>(),
            prop::collection::vec("[a-f]{1,2}", 0..3),
        )
            .prop_map(|(tag, label, inherit_from)| Attribution::new(tag, label, inherit_from))
    }

    fn arb_set_and_permutation() -> impl Strategy<Value = (Vec<Attribution>, Vec<Attribution>)> {
        prop::collection::vec(arb_attribution(), 0..8)
            .prop_flat_map(|set| (Just(set.clone()), Just(set).prop_shuffle()))
    }

    proptest! {
        /// Property: the verdict does not depend on record order
        #[test]
        fn test_verdict_is_order_independent((set, shuffled) in arb_set_and_permutation()) {
            prop_assert_eq!(
                is_combination_valid(Some(&set[..])),
                is_combination_valid(Some(&shuffled[..]))
            );
        }

        /// Property: validation is a pure function of its input
        #[test]
        fn test_verdict_is_idempotent(set in prop::collection::vec(arb_attribution(), 0..8)) {
            let first = is_combination_valid(Some(&set[..]));
            let second = is_combination_valid(Some(&set[..]));
            prop_assert_eq!(first, second);
        }

        /// Property: distinct tags with unique, undeclared inherit-froms are always valid
        #[test]
        fn test_well_formed_sets_are_valid(count in 0usize..50, inherits in 0usize..4) {
            let set: Vec<_> = (0..count)
                .map(|i| {
                    let inherit_from =
                        (0..inherits).map(|j| format!("retired{}_{}", i, j)).collect();
                    Attribution::new(format!("tag{}", i), 0, inherit_from)
                })
                .collect();

            prop_assert!(is_combination_valid(Some(&set[..])));
        }

        /// Property: anything above the cap is rejected regardless of content
        #[test]
        fn test_oversized_sets_are_rejected(extra in 1usize..5) {
            let set: Vec<_> = (0..crate::MAX_NUM_ATTRIBUTIONS + extra)
                .map(|i| Attribution::new(format!("tag{}", i), 0, vec![]))
                .collect();

            prop_assert!(!is_combination_valid(Some(&set[..])));
        }
    }
}
