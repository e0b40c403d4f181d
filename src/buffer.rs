use core::{
    fmt::{self, Debug},
    ops::Deref,
};

use crate::constants::DEFAULT_CAPACITY;

/// Growable byte buffer the encoder writes into.
///
/// Capacity doubles whenever an append would not fit, and never shrinks.
/// The tracked capacity is what the growth rule operates on; the allocator
/// may hand out more underneath.
#[derive(Clone)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
    capacity: usize,
}

impl ByteBuffer {

    /// Construct a new, empty `ByteBuffer` with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Construct a new, empty `ByteBuffer` with the specified capacity.
    ///
    /// A capacity of zero is bumped to one, so that doubling makes progress.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        ByteBuffer {
            bytes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Append raw bytes, growing first if needed.
    pub fn append(&mut self, data: &[u8]) {
        self.reserve(data.len());
        self.bytes.extend_from_slice(data);
    }

    pub fn append_u8(&mut self, byte: u8) {
        self.reserve(1);
        self.bytes.push(byte);
    }

    pub fn append_u16(&mut self, value: u16) {
        self.append(&value.to_be_bytes());
    }

    pub fn append_u32(&mut self, value: u32) {
        self.append(&value.to_be_bytes());
    }

    pub fn append_u64(&mut self, value: u64) {
        self.append(&value.to_be_bytes());
    }

    /// Drop the contents, keeping the capacity.
    pub fn truncate(&mut self) {
        self.bytes.clear();
    }

    /// Unwrap the bytes written so far.
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    fn reserve(&mut self, additional: usize) {
        let required = self.bytes.len().saturating_add(additional);
        if required <= self.capacity {
            return;
        }

        let previous = self.capacity;
        let mut capacity = self.capacity;
        while capacity < required {
            capacity = capacity.saturating_mul(2);
        }

        self.bytes.reserve_exact(capacity - self.bytes.len());
        self.capacity = capacity;
        tracing::trace!(previous, capacity, "grew byte buffer");
    }
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("capacity", &self.capacity)
            .field("bytes", &self.bytes)
            .finish()
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Deref for ByteBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.bytes
    }
}

impl<Rhs> PartialEq<Rhs> for ByteBuffer
where
    Rhs: ?Sized + AsRef<[u8]>,
{
    fn eq(&self, other: &Rhs) -> bool {
        self.as_ref().eq(other.as_ref())
    }
}

impl From<ByteBuffer> for Vec<u8> {
    fn from(buffer: ByteBuffer) -> Self {
        buffer.into_vec()
    }
}
