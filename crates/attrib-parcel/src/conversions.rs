//! Conversions between attributions and their parcel form
//!
//! A record is its tag string, its label as an `i32`, then its inherit-from
//! string list. A combination is a typed list: a count (`-1` when absent),
//! then a non-zero presence marker before each record.

use attrib_domain::Attribution;
use tracing::trace;

use crate::{ParcelError, ParcelReader, ParcelWriter};

/// Presence marker written before each record of a combination
const PRESENT: i32 = 1;

/// Append one attribution to a parcel
pub fn write_attribution(parcel: &mut ParcelWriter, attribution: &Attribution) {
    parcel.write_string(Some(attribution.tag()));
    parcel.write_i32(attribution.label().id());
    parcel.write_string_list(Some(attribution.inherit_from()));
}

/// Read one attribution from a parcel
///
/// An absent inherit-from list reads as empty, as the platform reader does;
/// an absent tag fails construction.
pub fn read_attribution(parcel: &mut ParcelReader<'_>) -> Result<Attribution, ParcelError> {
    let tag = parcel.read_string()?;
    let label = parcel.read_i32()?;
    let inherit_from = parcel.read_string_list()?.unwrap_or_default();

    Ok(Attribution::from_parts(tag, label, Some(inherit_from))?)
}

/// Encode a single attribution
///
/// # Examples
///
/// ```
/// use attrib_domain::Attribution;
/// use attrib_parcel::{decode_attribution, encode_attribution};
///
/// let attribution = Attribution::new("a", 5, vec![]);
/// let bytes = encode_attribution(&attribution);
/// assert_eq!(bytes, [1, 0, 0, 0, b'a', 0, 0, 0, 5, 0, 0, 0, 0, 0, 0, 0]);
/// assert_eq!(decode_attribution(&bytes).unwrap(), attribution);
/// ```
pub fn encode_attribution(attribution: &Attribution) -> Vec<u8> {
    let mut parcel = ParcelWriter::new();
    write_attribution(&mut parcel, attribution);
    parcel.into_bytes()
}

/// Decode a single attribution, rejecting trailing bytes
pub fn decode_attribution(data: &[u8]) -> Result<Attribution, ParcelError> {
    let mut parcel = ParcelReader::new(data);
    let attribution = read_attribution(&mut parcel)?;
    parcel.finish()?;
    Ok(attribution)
}

/// Encode a package's attributions; `None` writes the absent marker
pub fn encode_combination(attributions: Option<&[Attribution]>) -> Vec<u8> {
    let mut parcel = ParcelWriter::new();
    match attributions {
        None => parcel.write_i32(crate::parcel::ABSENT),
        Some(attributions) => {
            parcel.write_i32(attributions.len() as i32);
            for attribution in attributions {
                parcel.write_i32(PRESENT);
                write_attribution(&mut parcel, attribution);
            }
        }
    }
    parcel.into_bytes()
}

/// Decode a package's attributions, rejecting trailing bytes
///
/// Returns `None` when the absent marker was written. A zero presence marker
/// (an absent record) fails with [`ParcelError::NullElement`].
pub fn decode_combination(data: &[u8]) -> Result<Option<Vec<Attribution>>, ParcelError> {
    let mut parcel = ParcelReader::new(data);

    let Some(count) = parcel.read_count()? else {
        parcel.finish()?;
        return Ok(None);
    };
    trace!(count, bytes = data.len(), "Decoding attribution combination");

    // A record takes at least 16 bytes with its marker
    let mut attributions = Vec::with_capacity(count.min(parcel.remaining() / 16));
    for _ in 0..count {
        if parcel.read_i32()? == 0 {
            return Err(ParcelError::NullElement);
        }
        attributions.push(read_attribution(&mut parcel)?);
    }

    parcel.finish()?;
    Ok(Some(attributions))
}
