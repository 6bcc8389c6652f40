//! UTF-16 code unit adapters, tolerant of unpaired surrogates.

use super::CodePoint;
use core::iter::{FusedIterator, Peekable};

/// An iterator decoding potentially ill-formed UTF-16, created by
/// [`CodePoint::decode_utf16`].
pub struct DecodeUtf16<I>
where
    I: Iterator<Item = u16>,
{
    input: Peekable<I>,
}

impl<I> DecodeUtf16<I>
where
    I: Iterator<Item = u16>,
{
    #[inline]
    pub(super) fn new(input: I) -> DecodeUtf16<I> {
        DecodeUtf16 {
            input: input.peekable(),
        }
    }
}

impl<I> Iterator for DecodeUtf16<I>
where
    I: Iterator<Item = u16>,
{
    type Item = CodePoint;

    #[inline]
    fn next(&mut self) -> Option<CodePoint> {
        let mut value = self.input.next()? as u32;

        if let 0xD800..=0xDBFF = value {
            if let Some(trail @ 0xDC00..=0xDFFF) = self.input.peek().copied() {
                value = 0x10000 | ((value - 0xD800) << 10) | (trail as u32 - 0xDC00);
                self.input.next();
            }
        }

        // Safety: pairing two surrogates cannot exceed U+10FFFF.
        Some(unsafe { CodePoint::from_u32_unchecked(value) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.input.size_hint();
        (low / 2, high)
    }
}

impl<I> FusedIterator for DecodeUtf16<I> where I: FusedIterator<Item = u16> {}

/// An iterator encoding potentially ill-formed UTF-16, created by
/// [`CodePoint::encode_utf16`].
pub struct EncodeUtf16<I>
where
    I: Iterator<Item = CodePoint>,
{
    input: I,
    buf: Option<u16>,
}

impl<I> EncodeUtf16<I>
where
    I: Iterator<Item = CodePoint>,
{
    #[inline]
    pub(super) fn new(input: I) -> EncodeUtf16<I> {
        EncodeUtf16 { input, buf: None }
    }
}

impl<I> Iterator for EncodeUtf16<I>
where
    I: Iterator<Item = CodePoint>,
{
    type Item = u16;

    #[inline]
    fn next(&mut self) -> Option<u16> {
        if let Some(unit) = self.buf.take() {
            return Some(unit);
        }

        let point = self.input.next()?;
        match point.to_surrogate_pair() {
            Some((high, low)) => {
                self.buf = Some(low.to_u16());
                Some(high.to_u16())
            }
            None => Some(point.to_u32() as u16),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.input.size_hint();
        let buffered = self.buf.is_some() as usize;
        (
            low.saturating_add(buffered),
            high.and_then(|h| h.checked_mul(2))
                .and_then(|h| h.checked_add(buffered)),
        )
    }
}

impl<I> FusedIterator for EncodeUtf16<I> where I: FusedIterator<Item = CodePoint> {}
