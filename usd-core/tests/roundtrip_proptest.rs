//! Property tests: decoding an encoded value gives the value and the exact
//! bytes back, for every encoding and byte order.

use proptest::prelude::*;
use std::io::Cursor;
use usd_core::encode::{encode_utf8, encode_utf16, encode_utf32};
use usd_core::{ByteOrder, Chars, CodePoint, Encoding};

fn byte_order() -> impl Strategy<Value = ByteOrder> {
    prop_oneof![Just(ByteOrder::Big), Just(ByteOrder::Little)]
}

proptest! {
    #[test]
    fn utf8_roundtrip(c in any::<char>()) {
        let run = encode_utf8(c.into()).unwrap();
        let mut source = Cursor::new(run.as_bytes().to_vec());
        let decoded = usd_core::decode_utf8(&mut source).unwrap().unwrap();
        prop_assert_eq!(decoded.code_point, CodePoint::from(c));
        prop_assert_eq!(decoded.bytes, run);
        prop_assert!(usd_core::decode_utf8(&mut source).unwrap().is_none());
    }

    #[test]
    fn utf16_roundtrip(c in any::<char>(), order in byte_order()) {
        let run = encode_utf16(c.into(), order).unwrap();
        let mut source = Cursor::new(run.as_bytes().to_vec());
        let decoded = usd_core::decode_utf16(order, &mut source).unwrap().unwrap();
        prop_assert_eq!(decoded.code_point, CodePoint::from(c));
        prop_assert_eq!(decoded.bytes, run);
    }

    #[test]
    fn utf32_roundtrip_any_value(value in any::<u32>(), order in byte_order()) {
        let run = encode_utf32(CodePoint::new(value), order);
        let mut source = Cursor::new(run.as_bytes().to_vec());
        let decoded = usd_core::decode_utf32(order, &mut source).unwrap().unwrap();
        prop_assert_eq!(decoded.code_point.value(), value);
        prop_assert_eq!(decoded.bytes, run);
    }

    #[test]
    fn utf8_matches_std_for_strings(s in any::<String>()) {
        let decoded: Vec<char> = Chars::new(Encoding::Utf8, Cursor::new(s.as_bytes()))
            .map(|r| r.unwrap().code_point.to_char().unwrap())
            .collect();
        prop_assert_eq!(decoded, s.chars().collect::<Vec<_>>());
    }

    #[test]
    fn utf16_matches_std_for_strings(s in any::<String>(), order in byte_order()) {
        let bytes: Vec<u8> = s.encode_utf16().flat_map(|u| order.u16_to(u)).collect();
        let decoded: Vec<char> = Chars::new(Encoding::Utf16(order), Cursor::new(bytes))
            .map(|r| r.unwrap().code_point.to_char().unwrap())
            .collect();
        prop_assert_eq!(decoded, s.chars().collect::<Vec<_>>());
    }

    #[test]
    fn truncated_utf8_is_never_clean_eof(c in any::<char>(), cut in 1usize..4) {
        let run = encode_utf8(c.into()).unwrap();
        prop_assume!(cut < run.len());
        let mut source = Cursor::new(run.as_bytes()[..cut].to_vec());
        let result = usd_core::decode_utf8(&mut source);
        prop_assert!(
            matches!(result, Err(usd_core::UsdError::UnexpectedEof { .. })),
            "expected unexpected EOF, got {:?}",
            result
        );
    }
}
