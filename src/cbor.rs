//! Minimal CBOR (RFC 8949) writer.
//!
//! Only what a request needs: heads for the major types, unsigned integers,
//! strings, byte strings, and indefinite-length containers closed by a break.

use crate::{
    buffer::ByteBuffer,
    constants::{
        BREAK,
        INDEFINITE_ARRAY,
        INDEFINITE_MAP,
        MAX_INLINE_ARGUMENT,
    },
};

/// CBOR major types (high three bits of the initial byte)
#[derive(Copy,Clone,Debug,Eq,PartialEq)]
#[repr(u8)]
pub enum MajorType {
    UnsignedInteger = 0,
    NegativeInteger = 1,
    ByteString = 2,
    TextString = 3,
    Array = 4,
    Map = 5,
    // Tag = 6,
    Simple = 7,
}

impl From<MajorType> for u8 {
    fn from(major: MajorType) -> Self {
        (major as u8) << 5
    }
}

/// CBOR writer on top of a borrowed buffer.
///
/// Holds no state of its own; everything it writes lands in the buffer.
pub struct Encoder<'b> {
    buffer: &'b mut ByteBuffer,
}

impl<'b> Encoder<'b> {
    pub fn new(buffer: &'b mut ByteBuffer) -> Self {
        Self { buffer }
    }

    /// Initial byte plus the shortest argument encoding for `value`.
    pub fn write_head(&mut self, major: MajorType, value: u64) {
        let major = u8::from(major);
        if value <= MAX_INLINE_ARGUMENT {
            self.buffer.append_u8(major | value as u8);
        } else if value <= u8::MAX as u64 {
            self.buffer.append_u8(major | 24);
            self.buffer.append_u8(value as u8);
        } else if value <= u16::MAX as u64 {
            self.buffer.append_u8(major | 25);
            self.buffer.append_u16(value as u16);
        } else if value <= u32::MAX as u64 {
            self.buffer.append_u8(major | 26);
            self.buffer.append_u32(value as u32);
        } else {
            self.buffer.append_u8(major | 27);
            self.buffer.append_u64(value);
        }
    }

    pub fn write_uint(&mut self, value: u64) {
        self.write_head(MajorType::UnsignedInteger, value);
    }

    pub fn write_bytes(&mut self, value: &[u8]) {
        self.write_head(MajorType::ByteString, value.len() as u64);
        self.buffer.append(value);
    }

    pub fn write_string(&mut self, value: &str) {
        self.write_head(MajorType::TextString, value.len() as u64);
        self.buffer.append(value.as_bytes());
    }

    /// Open an array of unstated length; close it with `end_sequence`.
    pub fn start_array(&mut self) {
        self.buffer.append_u8(INDEFINITE_ARRAY);
    }

    /// Open a map of unstated length; close it with `end_sequence`.
    pub fn start_map(&mut self) {
        self.buffer.append_u8(INDEFINITE_MAP);
    }

    pub fn end_sequence(&mut self) {
        self.buffer.append_u8(BREAK);
    }
}
