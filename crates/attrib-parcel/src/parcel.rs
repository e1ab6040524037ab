//! Parcel primitives: aligned little-endian integers and UTF-16 strings

use crate::ParcelError;

/// Marker written in place of a length or count for an absent value
pub const ABSENT: i32 = -1;

/// Round up to the parcel's 4-byte alignment
fn pad_size(len: usize) -> usize {
    (len + 3) & !3
}

/// Append-only parcel buffer
#[derive(Debug, Default, Clone)]
pub struct ParcelWriter {
    buf: Vec<u8>,
}

impl ParcelWriter {
    /// Create an empty parcel
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a 32-bit signed integer
    pub fn write_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Write a string, or the absent marker for `None`
    ///
    /// # Examples
    ///
    /// ```
    /// use attrib_parcel::ParcelWriter;
    ///
    /// let mut parcel = ParcelWriter::new();
    /// parcel.write_string(Some("a"));
    /// assert_eq!(parcel.as_bytes(), [1, 0, 0, 0, b'a', 0, 0, 0]);
    /// ```
    pub fn write_string(&mut self, value: Option<&str>) {
        let Some(value) = value else {
            self.write_i32(ABSENT);
            return;
        };

        let units: Vec<u16> = value.encode_utf16().collect();
        self.write_i32(units.len() as i32);

        let start = self.buf.len();
        for unit in units {
            self.buf.extend_from_slice(&unit.to_le_bytes());
        }
        self.buf.extend_from_slice(&0u16.to_le_bytes());

        let written = self.buf.len() - start;
        self.buf.resize(start + pad_size(written), 0);
    }

    /// Write a list of strings, or the absent marker for `None`
    pub fn write_string_list(&mut self, values: Option<&[String]>) {
        let Some(values) = values else {
            self.write_i32(ABSENT);
            return;
        };

        self.write_i32(values.len() as i32);
        for value in values {
            self.write_string(Some(value.as_str()));
        }
    }

    /// Bytes written so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Number of bytes written so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the writer and return its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Cursor over parcel bytes
#[derive(Debug, Clone)]
pub struct ParcelReader<'a> {
    data: &'a [u8],
}

impl<'a> ParcelReader<'a> {
    /// Start reading at the beginning of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.data.len()
    }

    /// Fail if any bytes remain unconsumed
    pub fn finish(&self) -> Result<(), ParcelError> {
        if self.data.is_empty() {
            Ok(())
        } else {
            Err(ParcelError::TrailingData(self.data.len()))
        }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], ParcelError> {
        if self.data.len() < len {
            return Err(ParcelError::UnexpectedEof);
        }
        let (head, rest) = self.data.split_at(len);
        self.data = rest;
        Ok(head)
    }

    /// Read a 32-bit signed integer
    pub fn read_i32(&mut self) -> Result<i32, ParcelError> {
        let bytes = self.take(4)?;
        let mut arr = [0u8; 4];
        arr.copy_from_slice(bytes);
        Ok(i32::from_le_bytes(arr))
    }

    /// Read a length or count, mapping the absent marker to `None`
    fn read_len(&mut self) -> Result<Option<usize>, ParcelError> {
        match self.read_i32()? {
            ABSENT => Ok(None),
            n if n < 0 => Err(ParcelError::InvalidLength(n)),
            n => Ok(Some(n as usize)),
        }
    }

    /// Read a string; `None` when the absent marker was written
    pub fn read_string(&mut self) -> Result<Option<String>, ParcelError> {
        let Some(len) = self.read_len()? else {
            return Ok(None);
        };

        // Code units plus terminator, then alignment padding
        let byte_len = len
            .checked_add(1)
            .and_then(|n| n.checked_mul(2))
            .ok_or(ParcelError::UnexpectedEof)?;
        let bytes = self.take(pad_size(byte_len))?;

        let units: Vec<u16> = bytes[..byte_len]
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        if units[len] != 0 {
            return Err(ParcelError::MissingTerminator);
        }

        String::from_utf16(&units[..len])
            .map(Some)
            .map_err(|_| ParcelError::InvalidUtf16)
    }

    /// Read a list of strings; `None` when the absent marker was written
    ///
    /// Absent elements inside a present list are rejected.
    pub fn read_string_list(&mut self) -> Result<Option<Vec<String>>, ParcelError> {
        let Some(count) = self.read_len()? else {
            return Ok(None);
        };

        // Every string takes at least 4 bytes; don't trust the count for capacity
        let mut values = Vec::with_capacity(count.min(self.remaining() / 4));
        for _ in 0..count {
            let value = self.read_string()?.ok_or(ParcelError::NullElement)?;
            values.push(value);
        }
        Ok(Some(values))
    }

    /// Read a count for a list of parcelable items
    pub(crate) fn read_count(&mut self) -> Result<Option<usize>, ParcelError> {
        self.read_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(f: impl FnOnce(&mut ParcelWriter)) -> Vec<u8> {
        let mut parcel = ParcelWriter::new();
        f(&mut parcel);
        parcel.into_bytes()
    }

    #[test]
    fn test_i32_little_endian() {
        assert_eq!(written(|p| p.write_i32(0x0102_0304)), [4, 3, 2, 1]);
        assert_eq!(written(|p| p.write_i32(-1)), [0xff; 4]);
    }

    #[test]
    fn test_string_padding() {
        // "ab": length 2, 'a' 'b' NUL = 6 bytes, padded to 8
        assert_eq!(
            written(|p| p.write_string(Some("ab"))),
            [2, 0, 0, 0, b'a', 0, b'b', 0, 0, 0, 0, 0]
        );
        // empty string still carries its terminator
        assert_eq!(written(|p| p.write_string(Some(""))), [0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_absent_markers() {
        assert_eq!(written(|p| p.write_string(None)), [0xff; 4]);
        assert_eq!(written(|p| p.write_string_list(None)), [0xff; 4]);
    }

    #[test]
    fn test_surrogate_pair() {
        let bytes = written(|p| p.write_string(Some("\u{1F600}")));
        assert_eq!(&bytes[..4], &[2, 0, 0, 0]);

        let mut reader = ParcelReader::new(&bytes);
        assert_eq!(reader.read_string().unwrap().as_deref(), Some("\u{1F600}"));
        reader.finish().unwrap();
    }

    #[test]
    fn test_read_string_list() {
        let list = vec!["x".to_string(), "yz".to_string()];
        let bytes = written(|p| p.write_string_list(Some(list.as_slice())));

        let mut reader = ParcelReader::new(&bytes);
        assert_eq!(reader.read_string_list().unwrap(), Some(list));
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_truncated_string() {
        let bytes = written(|p| p.write_string(Some("abc")));
        let mut reader = ParcelReader::new(&bytes[..bytes.len() - 2]);
        assert_eq!(reader.read_string(), Err(ParcelError::UnexpectedEof));
    }

    #[test]
    fn test_negative_length() {
        let bytes = written(|p| p.write_i32(-2));
        let mut reader = ParcelReader::new(&bytes);
        assert_eq!(reader.read_string(), Err(ParcelError::InvalidLength(-2)));
    }

    #[test]
    fn test_missing_terminator() {
        let bytes: [u8; 8] = [1, 0, 0, 0, b'a', 0, b'b', 0];
        let mut reader = ParcelReader::new(&bytes);
        assert_eq!(reader.read_string(), Err(ParcelError::MissingTerminator));
    }

    #[test]
    fn test_unpaired_surrogate() {
        // lone high surrogate 0xD800
        let bytes: [u8; 8] = [1, 0, 0, 0, 0x00, 0xd8, 0, 0];
        let mut reader = ParcelReader::new(&bytes);
        assert_eq!(reader.read_string(), Err(ParcelError::InvalidUtf16));
    }

    #[test]
    fn test_null_element_in_list() {
        let bytes = written(|p| {
            p.write_i32(1);
            p.write_string(None);
        });
        let mut reader = ParcelReader::new(&bytes);
        assert_eq!(reader.read_string_list(), Err(ParcelError::NullElement));
    }

    #[test]
    fn test_huge_count_does_not_preallocate() {
        let bytes = written(|p| p.write_i32(i32::MAX));
        let mut reader = ParcelReader::new(&bytes);
        assert_eq!(reader.read_string_list(), Err(ParcelError::UnexpectedEof));
    }

    #[test]
    fn test_trailing_data() {
        let bytes = written(|p| {
            p.write_i32(7);
            p.write_i32(8);
        });
        let mut reader = ParcelReader::new(&bytes);
        assert_eq!(reader.read_i32().unwrap(), 7);
        assert_eq!(reader.finish(), Err(ParcelError::TrailingData(4)));
    }
}
