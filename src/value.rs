use std::collections::HashMap;

use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::tag::Tag;
use crate::{DecodeError, DecodeErrorKind, DecodeResult};

/// The one-byte subtype qualifier carried by `Value::Binary`.
///
/// This is an open enumeration: unrecognized bytes are carried through the
/// codec verbatim, never rejected. Values at or above `USER_DEFINED` are
/// reserved for applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subtype(pub u8);

impl Subtype {
    pub const GENERIC: Subtype = Subtype(0x00);
    pub const FUNCTION: Subtype = Subtype(0x01);
    pub const BINARY_OLD: Subtype = Subtype(0x02);
    pub const UUID_OLD: Subtype = Subtype(0x03);
    pub const UUID: Subtype = Subtype(0x04);
    pub const MD5: Subtype = Subtype(0x05);
    pub const ENCRYPTED: Subtype = Subtype(0x06);
    pub const COMPRESSED: Subtype = Subtype(0x07);
    pub const USER_DEFINED: Subtype = Subtype(0x80);
}

/// A schemaless representation of any element value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null value (no payload). The legacy `Undefined` wire tag also decodes
    /// to this variant.
    Null,

    /// UTF-8 string.
    String(String),

    /// Embedded document.
    Document(Document),

    /// Array. On the wire this is a document whose element names are the
    /// decimal strings "0".."n-1"; those names are derived from position on
    /// encode and validated on decode.
    Array(Vec<Value>),

    /// Binary payload with its one-byte subtype qualifier.
    Binary { subtype: Subtype, data: Bytes },

    /// Opaque 12-byte identifier, carried without interpretation.
    ObjectId([u8; 12]),

    /// Boolean value.
    Bool(bool),

    /// UTC timestamp with millisecond precision.
    DateTime(DateTime<Utc>),

    /// Explicitly 32-bit signed integer (wire tag 0x10).
    Int32(i32),

    /// Explicitly 64-bit signed integer (wire tag 0x12).
    Int64(i64),

    /// Native-width signed integer. Encodes with the 64-bit wire tag; decode
    /// never produces this variant. See [`Document::normalize`].
    Int(i64),
}

impl Value {
    /// Returns the wire tag this value encodes with.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Null => Tag::Null,
            Value::String(_) => Tag::String,
            Value::Document(_) => Tag::Document,
            Value::Array(_) => Tag::Array,
            Value::Binary { .. } => Tag::Binary,
            Value::ObjectId(_) => Tag::ObjectId,
            Value::Bool(_) => Tag::Bool,
            Value::DateTime(_) => Tag::DateTime,
            Value::Int32(_) => Tag::Int32,
            Value::Int64(_) | Value::Int(_) => Tag::Int64,
        }
    }
}

/// A single named entry in a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub value: Value,
}

/// An ordered sequence of named elements.
///
/// A document is not a map: element order is significant (it determines wire
/// layout), duplicate names are legal and preserved, and [`Document::get`]
/// scans linearly for the first match.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    /// Appends an element, keeping insertion order.
    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        self.elements.push(Element {
            name: name.into(),
            value,
        });
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Returns the first element with the given name, scanning in order.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.get_with_index(name).map(|(value, _)| value)
    }

    /// Returns the first element with the given name together with its
    /// position in the document.
    pub fn get_with_index(&self, name: &str) -> Option<(&Value, usize)> {
        self.elements
            .iter()
            .enumerate()
            .find(|(_, elem)| elem.name == name)
            .map(|(i, elem)| (&elem.value, i))
    }

    /// Builds a document from a map. Insertion order follows the map's
    /// iteration order, which is undefined.
    pub fn from_map(map: HashMap<String, Value>) -> Self {
        map.into_iter().collect()
    }

    /// Builds an array-shaped document from positional values, assigning the
    /// element names "0".."n-1".
    pub fn from_values(values: Vec<Value>) -> Self {
        values
            .into_iter()
            .enumerate()
            .map(|(i, value)| (i.to_string(), value))
            .collect()
    }

    /// Converts an array-shaped document back into positional values.
    ///
    /// Element names must be exactly "0".."n-1", contiguous and in ascending
    /// positional order; any deviation is an `InvalidArray` error rather than
    /// a best-effort conversion.
    pub fn into_values(self) -> DecodeResult<Vec<Value>> {
        let mut values = Vec::with_capacity(self.elements.len());
        for (i, elem) in self.elements.into_iter().enumerate() {
            if elem.name != i.to_string() {
                return Err(DecodeError::new(DecodeErrorKind::InvalidArray {
                    index: i,
                    name: elem.name,
                }));
            }
            values.push(elem.value);
        }
        Ok(values)
    }

    /// Clones the document into a map, recursing into nested documents.
    ///
    /// Map semantics apply at every level: order is lost and for duplicate
    /// names the last element wins. Nested documents come back map-shaped
    /// (rebuilt through [`Document::from_map`]); the typed `Value` enum has
    /// no map variant, so this is the closest representation it can hold.
    /// Documents inside arrays are left untouched.
    pub fn to_map(&self) -> HashMap<String, Value> {
        self.elements
            .iter()
            .map(|elem| {
                let value = match &elem.value {
                    Value::Document(doc) => Value::Document(Document::from_map(doc.to_map())),
                    value => value.clone(),
                };
                (elem.name.clone(), value)
            })
            .collect()
    }

    /// Converts native-width `Value::Int` elements to `Value::Int64` so that
    /// repeated encode/decode cycles are representation-stable.
    ///
    /// Only top-level elements are touched; callers needing nested
    /// normalization must apply it at each level themselves.
    pub fn normalize(&mut self) {
        for elem in &mut self.elements {
            if let Value::Int(n) = elem.value {
                elem.value = Value::Int64(n);
            }
        }
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Document {
            elements: iter
                .into_iter()
                .map(|(name, value)| Element { name, value })
                .collect(),
        }
    }
}

impl IntoIterator for Document {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
