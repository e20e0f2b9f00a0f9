//! Fixed-point temperature decoding.
//!
//! Temperatures travel through the pipeline as signed tenths of a degree
//! (`-12.3` is stored as `-123`) so accumulation never loses precision to
//! floating point.

/// A temperature in tenths of a degree.
pub type Tenths = i16;

const ZERO: i16 = b'0' as i16;

/// Decode a temperature field matching `-?[0-9]{1,2}\.[0-9]`.
///
/// `field` must hold exactly the temperature bytes, without the line
/// terminator. The grammar is guaranteed by the input contract and is not
/// re-validated here; out-of-grammar input yields an unspecified value.
/// No allocation, no float parsing: the field width is bounded, so the
/// value is a closed-form expression over the digit bytes.
#[inline]
pub fn decode_tenths(field: &[u8]) -> Tenths {
    let (digits, negative) = match field.first() {
        Some(b'-') => (&field[1..], true),
        _ => (field, false),
    };

    // One or two integer digits, selected by the byte after the first.
    let value = if digits[1] == b'.' {
        // d.d
        (digits[0] as i16) * 10 + (digits[2] as i16) - ZERO * 11
    } else {
        // dd.d
        (digits[0] as i16) * 100 + (digits[1] as i16) * 10 + (digits[3] as i16) - ZERO * 111
    };

    if negative {
        -value
    } else {
        value
    }
}
