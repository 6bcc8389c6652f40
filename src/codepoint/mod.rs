//! Code point values and their decomposition into UTF-16 surrogates.

use core::fmt;

mod surrogate;
mod utf16;

#[cfg(test)]
mod tests;

pub use surrogate::Surrogate;
pub use utf16::{DecodeUtf16, EncodeUtf16};

/// A Unicode code point: from U+0000 to U+10FFFF.
///
/// Compares with the `char` type, which only represents Unicode scalar
/// values: this type also admits the surrogate range U+D800 to U+DFFF.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy)]
pub struct CodePoint {
    value: u32,
}

/// Format the code point as `U+` followed by four to six hexadecimal digits.
/// Example: `U+1F600`
impl fmt::Debug for CodePoint {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "U+{:04X}", self.value)
    }
}

impl CodePoint {
    /// Creates a new `CodePoint` without checking the value.
    ///
    /// # Safety
    ///
    /// Only safe if `value` is less than or equal to 0x10FFFF.
    #[inline]
    pub(crate) unsafe fn from_u32_unchecked(value: u32) -> CodePoint {
        CodePoint { value }
    }

    /// Creates a new `CodePoint` if the value is a valid code point.
    ///
    /// Returns `None` if `value` is above 0x10FFFF.
    #[inline]
    pub fn from_u32(value: u32) -> Option<CodePoint> {
        match value {
            0..=0x10FFFF => Some(CodePoint { value }),
            _ => None,
        }
    }

    /// Creates a new `CodePoint` from a `char`.
    ///
    /// Since all Unicode scalar values are code points, this always succeeds.
    #[inline]
    pub fn from_char(value: char) -> CodePoint {
        CodePoint {
            value: value as u32,
        }
    }

    /// Creates a new `CodePoint` from a [Surrogate].
    ///
    /// Since all surrogates are code points, this always succeeds.
    #[inline]
    pub fn from_surrogate(value: Surrogate) -> CodePoint {
        CodePoint {
            value: value.to_u16() as u32,
        }
    }

    /// Returns the numeric value of the code point.
    #[inline]
    pub fn to_u32(&self) -> u32 {
        self.value
    }

    /// Optionally returns a Unicode scalar value for the code point.
    ///
    /// Returns `None` if the code point is a surrogate.
    #[inline]
    pub fn to_char(&self) -> Option<char> {
        match self.categorize() {
            CodePointCategory::Scalar(c) => Some(c),
            CodePointCategory::Surrogate(_) => None,
        }
    }

    /// Returns a Unicode scalar value for the code point, with surrogates
    /// replaced by `'\u{FFFD}'` (the replacement character).
    #[inline]
    pub fn to_char_lossy(&self) -> char {
        self.to_char().unwrap_or('\u{FFFD}')
    }

    /// Optionally returns the code point as a [Surrogate].
    ///
    /// Returns `None` if the code point is not in the surrogate range.
    #[inline]
    pub fn to_surrogate(&self) -> Option<Surrogate> {
        match self.categorize() {
            CodePointCategory::Surrogate(s) => Some(s),
            CodePointCategory::Scalar(_) => None,
        }
    }

    /// Categorizes the code point as a Unicode scalar value or a surrogate.
    #[inline]
    pub fn categorize(&self) -> CodePointCategory {
        match self.value {
            // Safety: the value is within the surrogate range.
            0xD800..=0xDFFF => CodePointCategory::Surrogate(unsafe {
                Surrogate::from_u16_unchecked(self.value as u16)
            }),
            // Safety: not a surrogate and at most 0x10FFFF, so a valid char.
            _ => CodePointCategory::Scalar(unsafe { char::from_u32_unchecked(self.value) }),
        }
    }

    /// Splits a supplementary-plane code point into its UTF-16 surrogate
    /// pair, lead first.
    ///
    /// Returns `None` for Basic Multilingual Plane values (up to U+FFFF).
    #[inline]
    pub fn to_surrogate_pair(&self) -> Option<(Surrogate, Surrogate)> {
        let offset = self.value.checked_sub(0x10000)?;
        // Safety: offset is at most 0xFFFFF, so the lead stays within
        // 0xD800..=0xDBFF and the trail within 0xDC00..=0xDFFF.
        unsafe {
            Some((
                Surrogate::from_u16_unchecked(0xD800 + (offset >> 10) as u16),
                Surrogate::from_u16_unchecked(0xDC00 + (offset & 0x3FF) as u16),
            ))
        }
    }

    /// Decode potentially ill-formed UTF-16.
    #[inline]
    pub fn decode_utf16<I>(input: I) -> DecodeUtf16<I>
    where
        I: Iterator<Item = u16>,
    {
        DecodeUtf16::new(input)
    }

    /// Encode potentially ill-formed UTF-16.
    #[inline]
    pub fn encode_utf16<I>(input: I) -> EncodeUtf16<I>
    where
        I: Iterator<Item = CodePoint>,
    {
        EncodeUtf16::new(input)
    }
}

impl From<char> for CodePoint {
    #[inline]
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl From<Surrogate> for CodePoint {
    #[inline]
    fn from(s: Surrogate) -> Self {
        Self::from_surrogate(s)
    }
}

/// The two kinds of code point: valid Unicode scalar, or surrogate.
///
/// Returned from the [`categorize`] method on [CodePoint].
///
/// [`categorize`]: CodePoint::categorize
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Debug)]
pub enum CodePointCategory {
    Scalar(char),
    Surrogate(Surrogate),
}
