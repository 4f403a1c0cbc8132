use crate::value::{Document, Subtype, Value};
use crate::{EncodeError, EncodeErrorKind, EncodeResult};

/// Encodes a document to binary format.
///
/// The emitted layout is: a 4-byte little-endian length covering the
/// element-stream body only (not the length field itself and not the
/// terminator), the body, and a single zero byte. This matches the format's
/// own reader; it is not byte-compatible with readers expecting a total-size
/// length field.
pub fn encode(doc: &Document) -> EncodeResult<Vec<u8>> {
    let mut out = Vec::new();
    write_document(&mut out, doc)?;
    Ok(out)
}

fn write_document(out: &mut Vec<u8>, doc: &Document) -> EncodeResult<()> {
    // The body has to be buffered first: its length precedes it on the wire
    // but is unknown until every element is serialized.
    let mut body = Vec::new();
    for elem in doc {
        write_element(&mut body, &elem.name, &elem.value)?;
    }
    write_framed(out, &body)
}

fn write_array(out: &mut Vec<u8>, values: &[Value]) -> EncodeResult<()> {
    // Element names are re-derived from position; nothing a caller attached
    // to the values is consulted.
    let mut body = Vec::new();
    for (i, value) in values.iter().enumerate() {
        write_element(&mut body, &i.to_string(), value)?;
    }
    write_framed(out, &body)
}

fn write_framed(out: &mut Vec<u8>, body: &[u8]) -> EncodeResult<()> {
    if body.len() >= i32::MAX as usize {
        return Err(EncodeError::new(EncodeErrorKind::ContentTooLarge(
            body.len(),
        )));
    }
    out.reserve(4 + body.len() + 1);
    out.extend_from_slice(&(body.len() as i32).to_le_bytes());
    out.extend_from_slice(body);
    out.push(0);
    Ok(())
}

fn write_element(out: &mut Vec<u8>, name: &str, value: &Value) -> EncodeResult<()> {
    out.push(value.tag() as u8);
    write_cstring(out, name)?;

    match value {
        Value::Null => Ok(()),
        Value::String(s) => write_string(out, s),
        Value::Document(doc) => write_document(out, doc),
        Value::Array(values) => write_array(out, values),
        Value::Binary { subtype, data } => write_binary(out, *subtype, data),
        Value::ObjectId(id) => {
            out.extend_from_slice(id);
            Ok(())
        }
        Value::Bool(b) => {
            out.push(if *b { 1 } else { 0 });
            Ok(())
        }
        Value::DateTime(dt) => {
            out.extend_from_slice(&dt.timestamp_millis().to_le_bytes());
            Ok(())
        }
        Value::Int32(n) => {
            out.extend_from_slice(&n.to_le_bytes());
            Ok(())
        }
        Value::Int64(n) | Value::Int(n) => {
            out.extend_from_slice(&n.to_le_bytes());
            Ok(())
        }
    }
}

fn write_cstring(out: &mut Vec<u8>, s: &str) -> EncodeResult<()> {
    if s.len() >= i32::MAX as usize {
        return Err(EncodeError::new(EncodeErrorKind::ContentTooLarge(s.len())));
    }
    out.extend_from_slice(s.as_bytes());
    out.push(0);
    Ok(())
}

fn write_string(out: &mut Vec<u8>, s: &str) -> EncodeResult<()> {
    if s.len() >= i32::MAX as usize {
        return Err(EncodeError::new(EncodeErrorKind::ContentTooLarge(s.len())));
    }
    // The length field counts the payload plus its terminator.
    out.reserve(4 + s.len() + 1);
    out.extend_from_slice(&(s.len() as i32 + 1).to_le_bytes());
    out.extend_from_slice(s.as_bytes());
    out.push(0);
    Ok(())
}

fn write_binary(out: &mut Vec<u8>, subtype: Subtype, data: &[u8]) -> EncodeResult<()> {
    if data.len() >= i32::MAX as usize {
        return Err(EncodeError::new(EncodeErrorKind::ContentTooLarge(
            data.len(),
        )));
    }
    out.reserve(4 + 1 + data.len());
    out.extend_from_slice(&(data.len() as i32).to_le_bytes());
    out.push(subtype.0);
    out.extend_from_slice(data);
    Ok(())
}
