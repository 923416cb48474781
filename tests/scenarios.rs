//! End-to-end checks against the worked examples, covering the full path
//! from [`rvn::format::encode`] and [`rvn::decode::decode_full`]/
//! [`decode_partial`] down through the primitive decoders.

use rvn::{
    decode::{decode_full, decode_partial, decode_tuple, decode_u8, skip, FieldStep, IndexStep},
    encode::{encode_list, encode_tag, Encode},
    format::{encode, FormatState, Mode},
};

#[test]
fn list_encoding() {
    assert_eq!(encode(&vec![1u8, 2], Mode::Compact), b"[1,2,]");
    assert_eq!(
        encode(&vec![1u8, 2, 3], Mode::Pretty),
        b"[\n    1,\n    2,\n    3,\n]"
    );
}

#[test]
fn integer_decode_success_and_overflow() {
    assert_eq!(
        decode_full(b"23", Mode::Compact, decode_u8).unwrap(),
        23u8
    );
    assert!(decode_full(b"999", Mode::Compact, decode_u8).is_err());
}

#[test]
fn radix_prefixed_integers() {
    use rvn::decode::{decode_i8, decode_u8};
    assert_eq!(decode_full(b"0b101", Mode::Compact, decode_u8).unwrap(), 5);
    assert_eq!(
        decode_full(b"-0x1a", Mode::Compact, decode_i8).unwrap(),
        -26
    );
}

#[test]
fn string_escapes() {
    use rvn::decode::decode_string;
    let value = decode_full(br#""a\nc""#, Mode::Compact, decode_string).unwrap();
    assert_eq!(value, "a\nc");
    assert!(decode_full(br#""\X""#, Mode::Compact, decode_string).is_err());
}

#[test]
fn partial_record_decode() {
    let mut a = None;
    let mut b = None;
    let rest = decode_partial(b"{a:1,b:2}X", Mode::Compact, |input| {
        rvn::decode::decode_record(input, |key| match key {
            "a" => FieldStep::Keep(Box::new(|r| {
                let (v, r) = decode_u8(r)?;
                a = Some(v);
                Ok(r)
            })),
            "b" => FieldStep::Keep(Box::new(|r| {
                let (v, r) = decode_u8(r)?;
                b = Some(v);
                Ok(r)
            })),
            _ => FieldStep::Skip,
        })
    })
    .unwrap()
    .1;
    assert_eq!((a, b), (Some(1), Some(2)));
    assert_eq!(rest, b"X");
}

struct Tag<'a> {
    name: &'a str,
    attrs: Vec<&'a dyn Encode>,
}

impl Encode for Tag<'_> {
    fn encode(&self, state: FormatState, buf: &mut Vec<u8>) {
        encode_tag(buf, state, self.name, &self.attrs);
    }
}

#[test]
fn tag_parenthesization() {
    let one = 1u8;
    let two = 2u8;
    let three = 3u8;
    let bar = Tag { name: "Bar", attrs: vec![&one as &dyn Encode] };
    let baz = Tag { name: "Baz", attrs: vec![&two as &dyn Encode, &three as &dyn Encode] };
    let foo = Tag { name: "Foo", attrs: vec![&bar as &dyn Encode, &baz as &dyn Encode] };
    assert_eq!(encode(&foo, Mode::Compact), b"Foo (Bar 1) (Baz 2 3)");

    let bar_nullary = Tag { name: "Bar", attrs: vec![] };
    let foo_one = Tag { name: "Foo", attrs: vec![&bar_nullary as &dyn Encode] };
    assert_eq!(encode(&foo_one, Mode::Compact), b"Foo Bar");

    struct ListOfBar<'a>(&'a [Tag<'a>]);
    impl Encode for ListOfBar<'_> {
        fn encode(&self, state: FormatState, buf: &mut Vec<u8>) {
            encode_list(buf, state, self.0);
        }
    }
    let items = [Tag { name: "Bar", attrs: vec![] }];
    let list = ListOfBar(&items);
    let foo_list = Tag { name: "Foo", attrs: vec![&list as &dyn Encode] };
    assert_eq!(encode(&foo_list, Mode::Compact), b"Foo [Bar,]");
}

#[test]
fn nested_record_tuple_list_shape() {
    let rest = decode_full(
        b"{ tuple: (4, { key: [1,2,3] } ) }",
        Mode::Compact,
        |input| {
            rvn::decode::decode_record(input, |key| match key {
                "tuple" => FieldStep::Keep(Box::new(|r| {
                    decode_tuple(r, |i| match i {
                        0 => IndexStep::Next(Box::new(|r| {
                            let (_, r) = decode_u8(r)?;
                            Ok(r)
                        })),
                        1 => IndexStep::Next(Box::new(|r| {
                            rvn::decode::decode_record(r, |key| match key {
                                "key" => FieldStep::Keep(Box::new(|r| {
                                    let (_, r) = rvn::decode::decode_list(r, decode_u8)?;
                                    Ok(r)
                                })),
                                _ => FieldStep::Skip,
                            })
                            .map(|(_, rest)| rest)
                        })),
                        _ => IndexStep::TooLong,
                    })
                    .map(|(_, rest)| rest)
                })),
                _ => FieldStep::Skip,
            })
        },
    );
    assert!(rest.is_ok());
}

#[test]
fn truncated_list_fails() {
    assert!(decode_full(b"[0,1,", Mode::Compact, |input| rvn::decode::decode_list(
        input, decode_u8
    ))
    .is_err());
}

#[test]
fn tuple_arity_mismatches() {
    fn decode_pair(input: &[u8]) -> rvn::decode::Decode<'_, ()> {
        decode_tuple(input, |i| match i {
            0 | 1 => IndexStep::Next(Box::new(|r| {
                let (_, r) = decode_u8(r)?;
                Ok(r)
            })),
            _ => IndexStep::TooLong,
        })
    }

    assert!(decode_full(b"(1)", Mode::Compact, decode_pair).is_err());

    let input: &[u8] = b"(1,2,3)";
    let err = decode_full(input, Mode::Compact, decode_pair).unwrap_err();
    assert_eq!(err.rest, b"3)");
}

#[test]
fn skip_accepts_any_well_formed_value() {
    let (_, rest) = skip(b"{ tuple: (4, { key: [1,2,3] } ) }").unwrap();
    assert_eq!(rest, b"");
}
