use crate::{DecodeError, DecodeErrorKind, DecodeResult};

/// A bounded reader over a `bytes::Bytes` buffer.
///
/// Reads consume from the front and fail with `InsufficientData` rather than
/// panic when the buffer runs out. Sub-buffers returned by `read` stay tied to
/// the backing `Bytes`, so binary payloads can be sliced out without copying.
pub struct BytesRef<'a> {
    b: &'a bytes::Bytes,
    data: &'a [u8],
}

impl<'a> BytesRef<'a> {
    pub fn new(b: &'a bytes::Bytes) -> Self {
        BytesRef { b, data: b }
    }

    /// Splits off the next `amt` bytes as a new bounded reader.
    pub fn read(&mut self, amt: usize) -> DecodeResult<Self> {
        if amt > self.len() {
            return Err(DecodeError::new(DecodeErrorKind::InsufficientData {
                needed: amt,
                available: self.len(),
            }));
        }
        let (result, data) = self.data.split_at(amt);
        self.data = data;
        Ok(BytesRef {
            b: self.b,
            data: result,
        })
    }

    pub(crate) fn read_byte(&mut self) -> DecodeResult<u8> {
        let bytes = self.read(1)?;
        Ok(bytes[0])
    }

    pub(crate) fn read_i32(&mut self) -> DecodeResult<i32> {
        let bytes = self.read(4)?;
        Ok(i32::from_le_bytes(bytes.as_ref().try_into().unwrap()))
    }

    pub(crate) fn read_i64(&mut self) -> DecodeResult<i64> {
        let bytes = self.read(8)?;
        Ok(i64::from_le_bytes(bytes.as_ref().try_into().unwrap()))
    }

    /// Consumes up to and including the next zero byte, returning the bytes
    /// before it. Fails if the buffer is exhausted before a zero byte.
    pub(crate) fn take_until_nul(&mut self) -> DecodeResult<&'a [u8]> {
        match self.data.iter().position(|&b| b == 0) {
            Some(i) => {
                let (result, data) = self.data.split_at(i);
                self.data = &data[1..];
                Ok(result)
            }
            None => Err(DecodeError::new(DecodeErrorKind::UnterminatedName)),
        }
    }

    /// Returns the remaining data as a zero-copy `Bytes` slice.
    pub(crate) fn to_bytes(&self) -> bytes::Bytes {
        self.b.slice_ref(self.data)
    }
}

impl std::ops::Deref for BytesRef<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.data
    }
}
