use super::*;

#[test]
fn error_messages() {
    assert_eq!(
        Error::UnsupportedChunkBits(8).to_string(),
        String::from("unsupported chunk width: 8 bits (expected at most 7)")
    );
    assert_eq!(
        Error::TypeOverflow(256).to_string(),
        String::from("type exceeds the capacity of the type field: 256")
    );
    assert_eq!(
        Error::InsufficientData { offset: 3 }.to_string(),
        String::from("not enough data to decode integer at offset 3")
    );
    assert_eq!(
        Error::TruncatedValue {
            offset: 2,
            length: 6,
            remaining: 4
        }
        .to_string(),
        String::from("value exceeds end of buffer: offset=2 length=6 remaining=4")
    );
}
