//! Base-128 varint encoding.
//!
//! Varints carry unsigned 64-bit values in one to ten bytes, least
//! significant group first, high bit marking continuation:
//!
//! ```text
//! 300 = 0b10_0101100
//!       [1 0101100] [0 0000010]  ->  0xAC 0x02
//!        ^ continue  ^ final
//! ```
//!
//! Signed fields that opt into ZigZag ([`zigzag_encode`]) map small
//! negative values to small varints; plain `int32`/`int64` fields encode
//! two's complement and occupy all ten bytes when negative.

use crate::error::WireError;
use crate::stream::{ReadStream, WriteStream};

/// Longest possible varint: ten 7-bit groups cover 64 bits.
pub const MAX_VARINT_LEN: usize = 10;

/// Encodes `value` as a minimal varint. The bytes are staged locally and
/// written at once, so an overrun leaves the stream untouched.
pub fn encode_varint(stream: &mut WriteStream<'_>, mut value: u64) -> Result<(), WireError> {
    let mut scratch = [0u8; MAX_VARINT_LEN];
    let mut len = 0;
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        scratch[len] = byte;
        len += 1;
        if value == 0 {
            break;
        }
    }
    stream.write(&scratch[..len])
}

/// Decodes one varint.
pub fn decode_varint(stream: &mut ReadStream<'_>) -> Result<u64, WireError> {
    let mut value = 0u64;
    for shift in 0..MAX_VARINT_LEN {
        let byte = stream.read_byte()?;
        value |= u64::from(byte & 0x7F) << (7 * shift);
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(WireError::VarintOverflow)
}

/// Encoded length of `value`, without encoding it.
pub fn varint_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    ((bits + 6) / 7).max(1)
}

/// Length of the varint at the front of `stream`, without consuming it.
pub(crate) fn peek_varint_len(stream: &ReadStream<'_>) -> Result<usize, WireError> {
    let bytes = stream.as_slice();
    for (i, byte) in bytes.iter().take(MAX_VARINT_LEN).enumerate() {
        if byte & 0x80 == 0 {
            return Ok(i + 1);
        }
    }
    if bytes.len() < MAX_VARINT_LEN {
        Err(WireError::Underrun {
            needed: bytes.len() + 1,
            remaining: bytes.len(),
        })
    } else {
        Err(WireError::VarintOverflow)
    }
}

/// Maps a signed value onto the ZigZag unsigned form: 0, -1, 1, -2, ...
/// become 0, 1, 2, 3, ...
pub fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverts [`zigzag_encode`].
pub fn zigzag_decode(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn encode_to_vec(value: u64) -> Vec<u8> {
        let mut buf = [0u8; MAX_VARINT_LEN];
        let mut stream = WriteStream::new(&mut buf);
        encode_varint(&mut stream, value).unwrap();
        let len = stream.bytes_written();
        buf[..len].to_vec()
    }

    #[test]
    fn test_zero_is_one_zero_byte() {
        assert_eq!(encode_to_vec(0), vec![0x00]);
    }

    #[test]
    fn test_known_encodings() {
        assert_eq!(encode_to_vec(1), vec![0x01]);
        assert_eq!(encode_to_vec(127), vec![0x7F]);
        assert_eq!(encode_to_vec(128), vec![0x80, 0x01]);
        assert_eq!(encode_to_vec(300), vec![0xAC, 0x02]);
    }

    #[test]
    fn test_max_u64_takes_ten_bytes() {
        let bytes = encode_to_vec(u64::MAX);
        assert_eq!(bytes.len(), 10);
        let mut stream = ReadStream::new(&bytes);
        assert_eq!(decode_varint(&mut stream).unwrap(), u64::MAX);
        assert!(stream.is_empty());
    }

    #[test]
    fn test_truncated_varint_underruns() {
        let mut stream = ReadStream::new(&[0xAC]);
        assert!(matches!(
            decode_varint(&mut stream),
            Err(WireError::Underrun { .. })
        ));
    }

    #[test]
    fn test_unterminated_varint_rejected() {
        let bytes = [0xFF; 11];
        let mut stream = ReadStream::new(&bytes);
        assert!(matches!(
            decode_varint(&mut stream),
            Err(WireError::VarintOverflow)
        ));
    }

    #[test]
    fn test_varint_len_matches_encoding() {
        for value in [0, 1, 127, 128, 300, 16383, 16384, 1 << 31, u64::MAX] {
            assert_eq!(varint_len(value), encode_to_vec(value).len(), "value {value}");
        }
    }

    #[test]
    fn test_peek_varint_len() {
        let stream = ReadStream::new(&[0xAC, 0x02, 0xFF]);
        assert_eq!(peek_varint_len(&stream).unwrap(), 2);

        let stream = ReadStream::new(&[0x80]);
        assert!(matches!(
            peek_varint_len(&stream),
            Err(WireError::Underrun { .. })
        ));

        let bytes = [0xFF; 10];
        let stream = ReadStream::new(&bytes);
        assert!(matches!(
            peek_varint_len(&stream),
            Err(WireError::VarintOverflow)
        ));
    }

    #[test]
    fn test_zigzag_small_negatives_stay_small() {
        assert_eq!(zigzag_encode(0), 0);
        assert_eq!(zigzag_encode(-1), 1);
        assert_eq!(zigzag_encode(1), 2);
        assert_eq!(zigzag_encode(-2), 3);
        assert_eq!(zigzag_decode(zigzag_encode(i64::MIN)), i64::MIN);
        assert_eq!(zigzag_decode(zigzag_encode(i64::MAX)), i64::MAX);
    }

    proptest! {
        #[test]
        fn test_varint_round_trip(value: u64) {
            let bytes = encode_to_vec(value);
            let mut stream = ReadStream::new(&bytes);
            prop_assert_eq!(decode_varint(&mut stream).unwrap(), value);
            prop_assert!(stream.is_empty());
        }

        #[test]
        fn test_zigzag_round_trip(value: i64) {
            prop_assert_eq!(zigzag_decode(zigzag_encode(value)), value);
        }
    }
}
