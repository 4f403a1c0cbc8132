/// Wire tags identifying an element's value variant.
///
/// This is the single dispatch table shared by the reader and the writer:
/// both sides match exhaustively on `Tag`, so adding or reinterpreting a tag
/// in one place without the other is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    String = 0x02,
    Document = 0x03,
    Array = 0x04,
    Binary = 0x05,
    /// Legacy tag; decodes to the same in-memory null as `Null`.
    Undefined = 0x06,
    ObjectId = 0x07,
    Bool = 0x08,
    DateTime = 0x09,
    Null = 0x0A,
    Int32 = 0x10,
    Int64 = 0x12,
}

impl Tag {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x02 => Some(Tag::String),
            0x03 => Some(Tag::Document),
            0x04 => Some(Tag::Array),
            0x05 => Some(Tag::Binary),
            0x06 => Some(Tag::Undefined),
            0x07 => Some(Tag::ObjectId),
            0x08 => Some(Tag::Bool),
            0x09 => Some(Tag::DateTime),
            0x0A => Some(Tag::Null),
            0x10 => Some(Tag::Int32),
            0x12 => Some(Tag::Int64),
            _ => None,
        }
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> u8 {
        tag as u8
    }
}
