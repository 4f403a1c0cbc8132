//! bindoc is a codec for a BSON-like binary document format: ordered
//! documents of named, heterogeneously-typed elements, encoded as a
//! length-prefixed element stream with one-byte type tags.
//!
//! The document length prefix covers the element-stream body only, not the
//! prefix itself or the trailing terminator. The codec's reader and writer
//! are exact inverses under this convention, but the output is not
//! byte-compatible with generic BSON readers that expect total-size
//! semantics.
//!
//! Decoding bounds its recursion at [`DEFAULT_MAX_DEPTH`] levels of nesting
//! (tunable via [`decode_with_max_depth`]); the wire format itself imposes no
//! limit.
//!
//! # Examples
//!
//! ```
//! use bindoc::{Document, Value, decode, encode};
//! use bytes::Bytes;
//!
//! let mut doc = Document::new();
//! doc.push("a", Value::Int32(1));
//! doc.push("b", Value::String("hi".to_string()));
//!
//! let bytes = encode(&doc).unwrap();
//! let parsed = decode(Bytes::from(bytes)).unwrap();
//! assert_eq!(parsed, doc);
//! ```

mod buf;
mod decode;
mod encode;
mod error;
mod format;
mod tag;
mod value;

pub use crate::buf::BytesRef;
pub use crate::decode::{DEFAULT_MAX_DEPTH, decode, decode_with_max_depth, read_document};
pub use crate::encode::encode;
pub use crate::error::{
    DecodeError, DecodeErrorKind, DecodeResult, EncodeError, EncodeErrorKind, EncodeResult,
};
pub use crate::tag::Tag;
pub use crate::value::{Document, Element, Subtype, Value};
