use bytes::Bytes;
use chrono::DateTime;

use crate::buf::BytesRef;
use crate::tag::Tag;
use crate::value::{Document, Subtype, Value};
use crate::{DecodeError, DecodeErrorKind, DecodeResult};

/// Default maximum nesting depth for [`decode`].
///
/// The wire format places no bound on nesting, so without a guard an
/// adversarial input can exhaust the stack. The original codec this format
/// comes from recursed unboundedly; the limit here is a deliberate hardening
/// addition.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Decodes a single document from binary format.
///
/// Fails with `TrailingData` if any bytes remain after the document; callers
/// reading several documents from one buffer should use [`read_document`]
/// directly.
pub fn decode(data: Bytes) -> DecodeResult<Document> {
    decode_with_max_depth(data, DEFAULT_MAX_DEPTH)
}

/// Decodes a single document, allowing at most `max_depth` levels of
/// documents or arrays nested inside the top-level document.
pub fn decode_with_max_depth(data: Bytes, max_depth: usize) -> DecodeResult<Document> {
    let mut reader = BytesRef::new(&data);
    let doc = read_document(&mut reader, max_depth)?;

    if !reader.is_empty() {
        return Err(DecodeError::new(DecodeErrorKind::TrailingData {
            bytes_remaining: reader.len(),
        }));
    }

    Ok(doc)
}

/// Reads one whole document from the reader, leaving any following bytes in
/// place. `depth` is the number of further nesting levels permitted.
pub fn read_document(reader: &mut BytesRef, depth: usize) -> DecodeResult<Document> {
    let len = reader.read_i32()?;
    if len < 0 {
        return Err(DecodeError::new(DecodeErrorKind::InvalidLength(len)));
    }

    // The length field covers the element-stream body only, not itself and
    // not the trailing terminator.
    let mut body = reader.read(len as usize)?;

    let terminator = reader.read_byte()?;
    if terminator != 0 {
        return Err(DecodeError::new(DecodeErrorKind::MalformedTerminator(
            terminator,
        )));
    }

    let mut doc = Document::new();
    while !body.is_empty() {
        let (name, value) = read_element(&mut body, depth)?;
        doc.push(name, value);
    }
    Ok(doc)
}

fn read_element(body: &mut BytesRef, depth: usize) -> DecodeResult<(String, Value)> {
    let tag_byte = body.read_byte()?;
    let tag = Tag::from_byte(tag_byte)
        .ok_or_else(|| DecodeError::new(DecodeErrorKind::UnsupportedTag(tag_byte)))?;
    let name = read_cstring(body)?;

    let value = match tag {
        Tag::String => Value::String(read_string(body)?),
        Tag::Document => Value::Document(read_nested(body, depth)?),
        Tag::Array => Value::Array(read_nested(body, depth)?.into_values()?),
        Tag::Binary => {
            let (subtype, data) = read_binary(body)?;
            Value::Binary { subtype, data }
        }
        Tag::ObjectId => {
            let bytes = body.read(12)?;
            Value::ObjectId(bytes.as_ref().try_into().unwrap())
        }
        Tag::Bool => Value::Bool(body.read_byte()? != 0),
        Tag::DateTime => {
            let millis = body.read_i64()?;
            let dt = DateTime::from_timestamp_millis(millis)
                .ok_or_else(|| DecodeError::new(DecodeErrorKind::InvalidTimestamp(millis)))?;
            Value::DateTime(dt)
        }
        Tag::Int32 => Value::Int32(body.read_i32()?),
        Tag::Int64 => Value::Int64(body.read_i64()?),
        // Both null and the legacy undefined tag produce the same in-memory
        // null; they are only distinct on the wire.
        Tag::Null | Tag::Undefined => Value::Null,
    };

    Ok((name, value))
}

fn read_nested(body: &mut BytesRef, depth: usize) -> DecodeResult<Document> {
    if depth == 0 {
        return Err(DecodeError::new(DecodeErrorKind::DepthLimitExceeded));
    }
    read_document(body, depth - 1)
}

fn read_cstring(body: &mut BytesRef) -> DecodeResult<String> {
    let bytes = body.take_until_nul()?;
    let s = std::str::from_utf8(bytes)
        .map_err(|_| DecodeError::new(DecodeErrorKind::InvalidUtf8))?;
    Ok(s.to_owned())
}

fn read_string(body: &mut BytesRef) -> DecodeResult<String> {
    // The length field counts the payload plus its terminator.
    let len = body.read_i32()?;
    if len < 1 {
        return Err(DecodeError::new(DecodeErrorKind::InvalidLength(len)));
    }
    let payload = body.read(len as usize - 1)?;
    let s = std::str::from_utf8(&payload)
        .map_err(|_| DecodeError::new(DecodeErrorKind::InvalidUtf8))?
        .to_owned();

    let terminator = body.read_byte()?;
    if terminator != 0 {
        return Err(DecodeError::new(DecodeErrorKind::MalformedTerminator(
            terminator,
        )));
    }
    Ok(s)
}

fn read_binary(body: &mut BytesRef) -> DecodeResult<(Subtype, Bytes)> {
    let len = body.read_i32()?;
    if len < 0 {
        return Err(DecodeError::new(DecodeErrorKind::InvalidLength(len)));
    }
    let subtype = Subtype(body.read_byte()?);
    let data = body.read(len as usize)?.to_bytes();
    Ok((subtype, data))
}
