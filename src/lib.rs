#![no_std]

//! Conversion of integer Unicode code points to text.
//!
//! The exported operation, [`get_unicode_char`], turns a code point value
//! into its textual representation. Basic Multilingual Plane values are
//! encoded directly; supplementary-plane values are split into their UTF-16
//! surrogate pair, and each half is encoded on its own. A lead surrogate
//! immediately followed by its trail joins back into the single four-byte
//! form, so only unpaired surrogates leave ill-formed bytes behind.
//!
//! The output is a [`Text`] buffer rather than a `String`, because the
//! surrogate range U+D800 to U+DFFF passes validation and `str` cannot carry
//! it. [`Text::into_string`] performs the strict conversion and reports
//! unpaired surrogates as an [`EncodingError`];
//! [`Text::to_string_lossy`] substitutes U+FFFD instead.

extern crate alloc;

pub mod codepoint;
pub mod range;
pub mod text;

pub use codepoint::{CodePoint, Surrogate};
pub use range::{CodePointRange, RangeError};
pub use text::{EncodingError, Text};


/// Returns the textual representation of `code_point`.
///
/// The value is checked against the full range of legal code points,
/// U+0000 to U+10FFFF, and rejected with a [`RangeError`] outside it.
pub fn get_unicode_char(code_point: u32) -> Result<Text, RangeError> {
    get_unicode_char_in(code_point, CodePointRange::default())
}

/// Returns the textual representation of `code_point`, checked against a
/// caller-supplied [`CodePointRange`] instead of the full default range.
pub fn get_unicode_char_in(code_point: u32, range: CodePointRange) -> Result<Text, RangeError> {
    let code_point = range.validate(code_point)?;

    let mut out = Text::with_capacity(4);
    match code_point.to_surrogate_pair() {
        Some((high, low)) => {
            out.push(CodePoint::from_surrogate(high));
            out.push(CodePoint::from_surrogate(low));
        }
        None => out.push(code_point),
    }
    Ok(out)
}

#[inline]
fn decode_surrogate(second_byte: u8, third_byte: u8) -> u16 {
    // The first byte of an encoded surrogate is always 0xED.
    0xD800 | (second_byte as u16 & 0x3F) << 6 | third_byte as u16 & 0x3F
}

#[inline]
fn decode_surrogate_pair(lead: u16, trail: u16) -> char {
    let code_point = 0x10000 + ((((lead - 0xD800) as u32) << 10) | (trail - 0xDC00) as u32);
    // Safety: a lead/trail pair always lands in U+10000..=U+10FFFF.
    unsafe { char::from_u32_unchecked(code_point) }
}
