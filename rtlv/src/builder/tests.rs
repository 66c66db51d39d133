use super::*;
use crate::ChunkBits;

fn extended(bits: u8) -> Config {
    Config::extended(ChunkBits::new(bits).expect("should be a valid width"))
}

#[test]
fn new() {
    let builder = Builder::new(Config::new());
    assert!(builder.is_empty());
    assert_eq!(builder.len(), 0);
    assert_eq!(builder.config(), &Config::new());
    assert_eq!(builder, Builder::default());
}

#[test]
fn add() {
    let mut builder = Builder::new(extended(7));
    assert_eq!(builder.add(10, "Foobar"), Ok(8));
    assert_eq!(builder.as_bytes(), b"\x0a\x06Foobar");
    assert_eq!(builder.add(16, "Bladibla"), Ok(10));
    assert_eq!(builder.as_bytes(), b"\x0a\x06Foobar\x10\x08Bladibla");
}

#[test]
fn add_multiple_chunks() {
    let mut builder = Builder::new(extended(7));
    let value = vec![0x55_u8; 200];
    assert_eq!(builder.add(300, &value), Ok(2 + 2 + 200));
    assert_eq!(&builder.as_bytes()[..4], &[0x82, 0x2c, 0x81, 0x48]);
    assert_eq!(&builder.as_bytes()[4..], &value[..]);
}

#[test]
fn add_empty_value() {
    let mut builder = Builder::new(Config::new());
    assert_eq!(builder.add(0, b""), Ok(2));
    assert_eq!(builder.as_bytes(), &[0x00, 0x00]);
}

#[test]
fn add_fixed_ceiling() {
    let mut builder = Builder::new(Config::new());
    assert_eq!(builder.add(255, [0u8; 255]), Ok(257));
    assert_eq!(builder.add(256, b""), Err(Error::TypeOverflow(256)));
    assert_eq!(builder.add(0, [0u8; 256]), Err(Error::LengthOverflow(256)));
    assert_eq!(builder.len(), 257);
}

#[test]
fn add_is_atomic() {
    let mut builder = Builder::new(extended(7).with_type_bits(ChunkBits::FIXED));
    builder.add(1, "first").expect("should add record");
    let before = builder.clone();

    assert_eq!(builder.add(1000, "second"), Err(Error::TypeOverflow(1000)));
    assert_eq!(builder, before);

    let mut builder = Builder::new(extended(7).with_length_bits(ChunkBits::FIXED));
    builder.add(1000, "first").expect("should add record");
    let before = builder.clone();

    assert_eq!(
        builder.add(2000, vec![0u8; 300]),
        Err(Error::LengthOverflow(300))
    );
    assert_eq!(builder, before);
}

#[test]
fn add_with_length() {
    let mut builder = Builder::new(extended(7));
    assert_eq!(builder.add_with_length(1, "abc", 128), Ok(1 + 2 + 3));
    assert_eq!(builder.as_bytes(), b"\x01\x81\x00abc");
    assert_eq!(
        Builder::new(Config::new()).add_with_length(1, "abc", 256),
        Err(Error::LengthOverflow(256))
    );
}

#[test]
fn length_includes_type_width() {
    let config = extended(7).with_length_includes_type_width(true);
    let mut builder = Builder::new(config);
    assert_eq!(builder.add(10, "Foobar"), Ok(8));
    assert_eq!(&builder.as_bytes()[..2], &[0x0a, 0x07]);
    builder.clear();
    assert_eq!(builder.add(300, "Foobar"), Ok(9));
    assert_eq!(&builder.as_bytes()[..3], &[0x82, 0x2c, 0x08]);
    builder.clear();
    assert_eq!(builder.add_with_length(10, "", 4), Ok(2));
    assert_eq!(builder.as_bytes(), &[0x0a, 0x05]);

    let config = Config::new().with_length_includes_type_width(true);
    assert_eq!(
        Builder::new(config).add(1, [0u8; 255]),
        Err(Error::LengthOverflow(256))
    );
    assert_eq!(
        Builder::new(extended(7).with_length_includes_type_width(true))
            .add_with_length(1, "", u64::MAX),
        Err(Error::LengthOverflow(u64::MAX))
    );
}

#[test]
fn add_record() {
    let record = Record::new(42, &b"value"[..]);
    let mut builder = Builder::new(extended(4));
    assert_eq!(
        builder.add_record(&record),
        Ok(record.encoded_len(builder.config()))
    );
    assert_eq!(builder.parser().collect_records(), Ok(vec![record]));
}

#[test]
fn clear() {
    let mut builder = Builder::with_capacity(Config::new(), 64);
    builder.add(1, "one").expect("should add record");
    assert!(!builder.is_empty());
    builder.clear();
    assert!(builder.is_empty());
}

#[test]
fn freeze() {
    let mut builder = Builder::new(Config::new());
    builder.add(1, "one").expect("should add record");
    let bytes = builder.clone().freeze();
    assert_eq!(&bytes[..], builder.as_bytes());
    assert_eq!(&builder.into_bytes()[..], &bytes[..]);
}

#[test]
fn debug() {
    let mut builder = Builder::new(Config::new());
    builder.add(1, [0xab_u8]).expect("should add record");
    assert!(format!("{builder:?}").contains("[01, 01, ab]"));
}
