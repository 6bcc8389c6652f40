use super::*;
use alloc::format;
use alloc::vec::Vec;

fn c(value: u32) -> CodePoint {
    CodePoint::from_u32(value).unwrap()
}

fn s(value: u16) -> Surrogate {
    Surrogate::from_u16(value).unwrap()
}

#[test]
fn code_point_from_u32() {
    assert!(CodePoint::from_u32(0).is_some());
    assert!(CodePoint::from_u32(0xD800).is_some());
    assert!(CodePoint::from_u32(0x10FFFF).is_some());
    assert!(CodePoint::from_u32(0x110000).is_none());
}

#[test]
fn code_point_to_u32() {
    assert_eq!(c(0).to_u32(), 0);
    assert_eq!(c(0xD800).to_u32(), 0xD800);
    assert_eq!(c(0x10FFFF).to_u32(), 0x10FFFF);
}

#[test]
fn code_point_from_char() {
    assert_eq!(CodePoint::from_char('a').to_u32(), 0x61);
    assert_eq!(CodePoint::from('😀').to_u32(), 0x1F600);
}

#[test]
fn code_point_debug_format() {
    assert_eq!(format!("{:?}", c(0x61)), "U+0061");
    assert_eq!(format!("{:?}", c(0x1F600)), "U+1F600");
    assert_eq!(format!("{:?}", s(0xDC6A)), "U+DC6A");
}

#[test]
fn code_point_to_char() {
    assert_eq!(c(0x61).to_char(), Some('a'));
    assert_eq!(c(0x1F600).to_char(), Some('😀'));
    assert_eq!(c(0xD800).to_char(), None);
}

#[test]
fn code_point_to_char_lossy() {
    assert_eq!(c(0x61).to_char_lossy(), 'a');
    assert_eq!(c(0xD800).to_char_lossy(), '\u{FFFD}');
}

#[test]
fn code_point_from_surrogate() {
    assert_eq!(CodePoint::from_surrogate(s(0xD800)), c(0xD800));
    assert_eq!(CodePoint::from(s(0xDFFF)), c(0xDFFF));
}

#[test]
fn code_point_to_surrogate() {
    assert_eq!(c(0xD800).to_surrogate(), Some(s(0xD800)));
    assert_eq!(c(0xDFFF).to_surrogate(), Some(s(0xDFFF)));
    assert_eq!(c(0xD7FF).to_surrogate(), None);
    assert_eq!(c(0xE000).to_surrogate(), None);
}

#[test]
fn code_point_categorize() {
    assert_eq!(c(0x61).categorize(), CodePointCategory::Scalar('a'));
    assert_eq!(c(0xD7FF).categorize(), CodePointCategory::Scalar('\u{D7FF}'));
    assert_eq!(c(0xD800).categorize(), CodePointCategory::Surrogate(s(0xD800)));
    assert_eq!(c(0xDFFF).categorize(), CodePointCategory::Surrogate(s(0xDFFF)));
    assert_eq!(c(0xE000).categorize(), CodePointCategory::Scalar('\u{E000}'));
}

#[test]
fn surrogate_from_u16() {
    assert!(Surrogate::from_u16(0).is_none());
    assert!(Surrogate::from_u16(0xD7FF).is_none());
    assert!(Surrogate::from_u16(0xD800).is_some());
    assert!(Surrogate::from_u16(0xDFFF).is_some());
    assert!(Surrogate::from_u16(0xE000).is_none());
}

#[test]
fn surrogate_is_high() {
    assert!(s(0xD800).is_high_surrogate());
    assert!(s(0xDBFF).is_high_surrogate());
    assert!(!s(0xDC00).is_high_surrogate());
    assert!(!s(0xDFFF).is_high_surrogate());
}

#[test]
fn surrogate_pair_composition() {
    assert_eq!(c(0x61).to_surrogate_pair(), None);
    assert_eq!(c(0xFFFF).to_surrogate_pair(), None);
    assert_eq!(c(0x10000).to_surrogate_pair(), Some((s(0xD800), s(0xDC00))));
    assert_eq!(c(0x1F600).to_surrogate_pair(), Some((s(0xD83D), s(0xDE00))));
    assert_eq!(c(0x10FFFF).to_surrogate_pair(), Some((s(0xDBFF), s(0xDFFF))));
}

#[test]
fn encode_utf16_splits_supplementary_values() {
    let input = [c(0x61), c(0x1F4A9), c(0xD800)];
    let units: Vec<u16> = CodePoint::encode_utf16(input.iter().copied()).collect();
    assert_eq!(units, [0x61, 0xD83D, 0xDCA9, 0xD800]);
}

#[test]
fn decode_utf16_rejoins_pairs_and_keeps_lone_surrogates() {
    let units = [0x61u16, 0xD83D, 0xDCA9, 0xD800, 0x20];
    let points: Vec<u32> = CodePoint::decode_utf16(units.iter().copied())
        .map(|p| p.to_u32())
        .collect();
    assert_eq!(points, [0x61, 0x1F4A9, 0xD800, 0x20]);
}
