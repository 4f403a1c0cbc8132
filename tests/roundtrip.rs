use bindoc::{
    BytesRef, DecodeErrorKind, Document, Subtype, Value, decode, decode_with_max_depth, encode,
    read_document,
};
use bytes::Bytes;

fn sample_document() -> Document {
    let mut inner = Document::new();
    inner.push("nested", Value::Int64(-7));
    inner.push("nested", Value::Null);

    let mut doc = Document::new();
    doc.push("s", Value::String("hello".to_string()));
    doc.push("d", Value::Document(inner));
    doc.push(
        "v",
        Value::Array(vec![
            Value::Int32(1),
            Value::String("two".to_string()),
            Value::Array(vec![Value::Bool(false)]),
        ]),
    );
    doc.push(
        "bin",
        Value::Binary {
            subtype: Subtype::UUID,
            data: Bytes::from(vec![0u8; 16]),
        },
    );
    doc.push("id", Value::ObjectId([9u8; 12]));
    doc.push("ok", Value::Bool(true));
    doc.push(
        "at",
        Value::DateTime(chrono::DateTime::from_timestamp_millis(1703462400000).unwrap()),
    );
    doc.push("n32", Value::Int32(i32::MIN));
    doc.push("n64", Value::Int64(i64::MAX));
    doc.push("n", Value::Int(42));
    doc
}

#[test]
fn test_known_byte_layout() {
    let mut doc = Document::new();
    doc.push("a", Value::Int32(1));
    doc.push("b", Value::String("hi".to_string()));
    doc.push("c", Value::Null);

    let expected = [
        0x14, 0x00, 0x00, 0x00, // body length: 20
        0x10, b'a', 0x00, 0x01, 0x00, 0x00, 0x00, // "a": int32(1)
        0x02, b'b', 0x00, 0x03, 0x00, 0x00, 0x00, b'h', b'i', 0x00, // "b": "hi"
        0x0A, b'c', 0x00, // "c": null
        0x00, // terminator
    ];
    let encoded = encode(&doc).unwrap();
    assert_eq!(encoded, expected);
    assert_eq!(decode(Bytes::from(expected.to_vec())).unwrap(), doc);
}

#[test]
fn test_reencode_is_byte_stable() {
    let doc = sample_document();
    let first = encode(&doc).unwrap();
    let decoded = decode(Bytes::from(first.clone())).unwrap();
    let second = encode(&decoded).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_decode_matches_normalized_document() {
    // Decode never produces the native-width variant, so a decoded document
    // equals the original only after normalization.
    let mut doc = Document::new();
    doc.push("n", Value::Int(42));

    let decoded = decode(Bytes::from(encode(&doc).unwrap())).unwrap();
    assert_ne!(decoded, doc);
    doc.normalize();
    assert_eq!(decoded, doc);
}

#[test]
fn test_array_roundtrip_preserves_order_and_values() {
    let values = vec![
        Value::Int32(3),
        Value::Int32(1),
        Value::String("mid".to_string()),
        Value::Null,
    ];
    let mut doc = Document::new();
    doc.push("v", Value::Array(values.clone()));

    let decoded = decode(Bytes::from(encode(&doc).unwrap())).unwrap();
    assert_eq!(decoded.get("v"), Some(&Value::Array(values)));
}

#[test]
fn test_unknown_subtype_roundtrips_verbatim() {
    let mut doc = Document::new();
    doc.push(
        "x",
        Value::Binary {
            subtype: Subtype(0xC7),
            data: Bytes::from(vec![1, 2, 3]),
        },
    );
    let decoded = decode(Bytes::from(encode(&doc).unwrap())).unwrap();
    assert_eq!(decoded, doc);
}

#[test]
fn test_undefined_reencodes_as_null() {
    // tag 0x06 decodes to null; re-encoding emits 0x0A.
    let data = vec![0x03, 0x00, 0x00, 0x00, 0x06, b'u', 0x00, 0x00];
    let decoded = decode(Bytes::from(data)).unwrap();
    assert_eq!(decoded.get("u"), Some(&Value::Null));
    assert_eq!(
        encode(&decoded).unwrap(),
        &[0x03, 0x00, 0x00, 0x00, 0x0A, b'u', 0x00, 0x00]
    );
}

#[test]
fn test_truncated_input() {
    let mut data = encode(&sample_document()).unwrap();
    data.truncate(data.len() - 10);
    let err = decode(Bytes::from(data)).unwrap_err();
    assert!(matches!(
        err.kind(),
        DecodeErrorKind::InsufficientData { .. }
    ));
}

#[test]
fn test_unknown_tag_is_named_in_error() {
    let data = vec![0x04, 0x00, 0x00, 0x00, 0x99, b'q', 0x00, 0x00, 0x00];
    let err = decode(Bytes::from(data)).unwrap_err();
    assert_eq!(err.kind(), &DecodeErrorKind::UnsupportedTag(0x99));
    assert!(err.to_string().contains("0x99"));
}

#[test]
fn test_sequential_documents_from_one_buffer() {
    let mut first = Document::new();
    first.push("a", Value::Int32(1));
    let mut second = Document::new();
    second.push("b", Value::Bool(true));

    let mut data = encode(&first).unwrap();
    data.extend_from_slice(&encode(&second).unwrap());

    let data = Bytes::from(data);
    let mut reader = BytesRef::new(&data);
    assert_eq!(read_document(&mut reader, 16).unwrap(), first);
    assert_eq!(read_document(&mut reader, 16).unwrap(), second);
    assert!(reader.is_empty());
}

#[test]
fn test_depth_limit_rejects_adversarial_nesting() {
    // Wrap an empty document 200 levels deep, straight at the byte level.
    let mut data = vec![0x00, 0x00, 0x00, 0x00, 0x00];
    for _ in 0..200 {
        let mut body = vec![0x03, b'd', 0x00];
        body.extend_from_slice(&data);
        let mut wrapped = (body.len() as i32).to_le_bytes().to_vec();
        wrapped.extend_from_slice(&body);
        wrapped.push(0x00);
        data = wrapped;
    }

    let err = decode(Bytes::from(data.clone())).unwrap_err();
    assert_eq!(err.kind(), &DecodeErrorKind::DepthLimitExceeded);
    assert!(decode_with_max_depth(Bytes::from(data), 200).is_ok());
}

#[test]
fn test_display_renders_without_panicking() {
    let rendered = sample_document().to_string();
    assert!(rendered.contains("\"s\": \"hello\""));
    assert!(rendered.contains("1i32"));
    assert!(rendered.contains("objectid(090909090909090909090909)"));
}
