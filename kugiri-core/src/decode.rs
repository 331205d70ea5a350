//! Strict decoding of encoded text into validated codepoints
//!
//! Every segmentation entry point that accepts encoded text goes through
//! this module; the scoring engine itself only ever sees `char` values.
//! Alongside the codepoints, each decoder records where every codepoint
//! starts in the source, so boundary indices can be translated back into
//! source-unit offsets without rescanning the input.

use crate::error::{DecodeError, DecodeResult};

/// A decoded codepoint sequence with its source-offset index
///
/// `codepoints` and `offsets` are parallel arrays of the same length;
/// `offsets[i]` is the position, in source units (bytes for UTF-8, code
/// units for UTF-16), where `codepoints[i]` begins. Offsets are
/// monotonically increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Validated Unicode scalar values, in input order
    pub codepoints: Vec<char>,
    /// Start offset of each codepoint in the source encoding
    pub offsets: Vec<usize>,
}

impl Decoded {
    /// Number of decoded codepoints
    pub fn len(&self) -> usize {
        self.codepoints.len()
    }

    /// Whether the input decoded to zero codepoints
    pub fn is_empty(&self) -> bool {
        self.codepoints.is_empty()
    }
}

/// Decode UTF-8 bytes into codepoints plus byte offsets.
///
/// Validation is strict: overlong forms, surrogate values, scalar values
/// above U+10FFFF, truncated sequences, and stray continuation bytes are
/// all rejected. Nothing is returned for partially valid input; the error
/// carries the offset of the first offending byte.
pub fn decode_utf8(bytes: &[u8]) -> DecodeResult<Decoded> {
    let text = std::str::from_utf8(bytes).map_err(|e| DecodeError::InvalidUtf8 {
        position: e.valid_up_to(),
    })?;
    let mut decoded = Decoded {
        codepoints: Vec::with_capacity(text.len()),
        offsets: Vec::with_capacity(text.len()),
    };
    for (offset, ch) in text.char_indices() {
        decoded.codepoints.push(ch);
        decoded.offsets.push(offset);
    }
    Ok(decoded)
}

/// Decode UTF-16 code units into codepoints plus code-unit offsets.
///
/// A high surrogate followed by a low surrogate combines into one scalar
/// value; any surrogate unit without its counterpart fails the whole
/// decode with the offset of the offending unit.
pub fn decode_utf16(units: &[u16]) -> DecodeResult<Decoded> {
    let mut decoded = Decoded {
        codepoints: Vec::with_capacity(units.len()),
        offsets: Vec::with_capacity(units.len()),
    };
    let mut position = 0usize;
    for result in char::decode_utf16(units.iter().copied()) {
        let ch = result.map_err(|_| DecodeError::UnpairedSurrogate { position })?;
        decoded.codepoints.push(ch);
        decoded.offsets.push(position);
        position += ch.len_utf16();
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_offsets() {
        let decoded = decode_utf8(b"abc").unwrap();
        assert_eq!(decoded.codepoints, vec!['a', 'b', 'c']);
        assert_eq!(decoded.offsets, vec![0, 1, 2]);
    }

    #[test]
    fn test_multibyte_offsets() {
        // 私 and は are 3 bytes each, 𠮷 is 4 bytes
        let decoded = decode_utf8("私は𠮷".as_bytes()).unwrap();
        assert_eq!(decoded.codepoints, vec!['私', 'は', '𠮷']);
        assert_eq!(decoded.offsets, vec![0, 3, 6]);
    }

    #[test]
    fn test_empty_input() {
        let decoded = decode_utf8(b"").unwrap();
        assert!(decoded.is_empty());
        assert_eq!(decoded.len(), 0);
    }

    #[test]
    fn test_embedded_nul_is_valid() {
        let decoded = decode_utf8(b"a\0b").unwrap();
        assert_eq!(decoded.codepoints, vec!['a', '\0', 'b']);
    }

    #[test]
    fn test_overlong_two_byte() {
        // 0xC0 0xAF would be '/' in an overlong two-byte form
        assert_eq!(
            decode_utf8(&[0xC0, 0xAF]),
            Err(DecodeError::InvalidUtf8 { position: 0 })
        );
        // 0xC1 has no significant payload bits either
        assert!(decode_utf8(&[0xC1, 0x80]).is_err());
    }

    #[test]
    fn test_overlong_three_byte() {
        // 0xE0 with a second byte lacking high payload bits
        assert_eq!(
            decode_utf8(&[0xE0, 0x80, 0x80]),
            Err(DecodeError::InvalidUtf8 { position: 0 })
        );
        // Shortest valid 3-byte form still decodes
        assert_eq!(
            decode_utf8(&[0xE0, 0xA0, 0x80]).unwrap().codepoints,
            vec!['\u{800}']
        );
    }

    #[test]
    fn test_overlong_four_byte() {
        assert_eq!(
            decode_utf8(&[0xF0, 0x80, 0x80, 0x80]),
            Err(DecodeError::InvalidUtf8 { position: 0 })
        );
    }

    #[test]
    fn test_surrogate_bytes_rejected() {
        // 0xED 0xA0 0x80 encodes U+D800
        assert!(decode_utf8(&[0xED, 0xA0, 0x80]).is_err());
        // 0xED 0xBF 0xBF encodes U+DFFF
        assert!(decode_utf8(&[0xED, 0xBF, 0xBF]).is_err());
    }

    #[test]
    fn test_above_max_scalar_rejected() {
        // 0xF4 0x90 0x80 0x80 encodes U+110000
        assert!(decode_utf8(&[0xF4, 0x90, 0x80, 0x80]).is_err());
        // U+10FFFF itself is fine
        assert_eq!(
            decode_utf8(&[0xF4, 0x8F, 0xBF, 0xBF]).unwrap().codepoints,
            vec!['\u{10FFFF}']
        );
    }

    #[test]
    fn test_truncated_sequence() {
        let mut bytes = "あ".as_bytes().to_vec();
        bytes.pop();
        assert!(decode_utf8(&bytes).is_err());
    }

    #[test]
    fn test_stray_continuation_byte() {
        assert_eq!(
            decode_utf8(&[b'a', 0x80]),
            Err(DecodeError::InvalidUtf8 { position: 1 })
        );
    }

    #[test]
    fn test_bad_continuation_pattern() {
        // Second byte of a 2-byte sequence must match 10xxxxxx
        assert!(decode_utf8(&[0xC3, 0x28]).is_err());
    }

    #[test]
    fn test_error_position_after_valid_prefix() {
        let err = decode_utf8(&[b'a', b'b', 0xFF]).unwrap_err();
        assert_eq!(err, DecodeError::InvalidUtf8 { position: 2 });
    }

    #[test]
    fn test_utf16_bmp_offsets() {
        let units: Vec<u16> = "私は".encode_utf16().collect();
        let decoded = decode_utf16(&units).unwrap();
        assert_eq!(decoded.codepoints, vec!['私', 'は']);
        assert_eq!(decoded.offsets, vec![0, 1]);
    }

    #[test]
    fn test_utf16_surrogate_pair() {
        let units: Vec<u16> = "a𠮷b".encode_utf16().collect();
        let decoded = decode_utf16(&units).unwrap();
        assert_eq!(decoded.codepoints, vec!['a', '𠮷', 'b']);
        // 𠮷 occupies two code units
        assert_eq!(decoded.offsets, vec![0, 1, 3]);
    }

    #[test]
    fn test_utf16_lone_high_surrogate() {
        assert_eq!(
            decode_utf16(&[0x0041, 0xD800]),
            Err(DecodeError::UnpairedSurrogate { position: 1 })
        );
    }

    #[test]
    fn test_utf16_lone_low_surrogate() {
        assert_eq!(
            decode_utf16(&[0xDC00]),
            Err(DecodeError::UnpairedSurrogate { position: 0 })
        );
    }

    #[test]
    fn test_utf16_high_followed_by_non_low() {
        assert_eq!(
            decode_utf16(&[0xD800, 0x0041]),
            Err(DecodeError::UnpairedSurrogate { position: 0 })
        );
    }
}
