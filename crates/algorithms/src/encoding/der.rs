//! Minimal DER reader and writer
//!
//! Only definite, minimally encoded lengths are accepted, and INTEGERs must
//! be minimally encoded and non-negative. Anything else is reported as
//! `SerializationError` rather than being interpreted leniently.

use crate::error::{Error, Result};
use eckit_internal::bigendian::strip_leading_zeros;

/// Universal and context-specific tags used by eckit
pub mod tag {
    /// INTEGER
    pub const INTEGER: u8 = 0x02;
    /// BIT STRING
    pub const BIT_STRING: u8 = 0x03;
    /// OCTET STRING
    pub const OCTET_STRING: u8 = 0x04;
    /// NULL
    pub const NULL: u8 = 0x05;
    /// OBJECT IDENTIFIER
    pub const OID: u8 = 0x06;
    /// SEQUENCE (constructed)
    pub const SEQUENCE: u8 = 0x30;
    /// `[0]` constructed, explicit
    pub const CONTEXT_0: u8 = 0xA0;
    /// `[1]` constructed, explicit
    pub const CONTEXT_1: u8 = 0xA1;
}

fn encode_length(len: usize, out: &mut Vec<u8>) {
    if len < 0x80 {
        out.push(len as u8);
        return;
    }
    let bytes = len.to_be_bytes();
    let significant = strip_leading_zeros(&bytes);
    out.push(0x80 | significant.len() as u8);
    out.extend_from_slice(significant);
}

/// Encode a single tag-length-value element
pub fn tlv(tag: u8, content: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(content.len() + 6);
    out.push(tag);
    encode_length(content.len(), &mut out);
    out.extend_from_slice(content);
    out
}

/// Encode a SEQUENCE from already-encoded elements
pub fn sequence(elements: &[&[u8]]) -> Vec<u8> {
    tlv(tag::SEQUENCE, &elements.concat())
}

/// Encode an unsigned big-endian magnitude as an INTEGER
///
/// Leading zeros are removed and a single `0x00` is prepended when the
/// high bit is set, so the result is always minimal and non-negative.
pub fn unsigned_integer(magnitude: &[u8]) -> Vec<u8> {
    let value = strip_leading_zeros(magnitude);
    if value.is_empty() {
        return tlv(tag::INTEGER, &[0x00]);
    }
    if value[0] & 0x80 != 0 {
        let mut content = Vec::with_capacity(value.len() + 1);
        content.push(0x00);
        content.extend_from_slice(value);
        return tlv(tag::INTEGER, &content);
    }
    tlv(tag::INTEGER, value)
}

/// Encode an OCTET STRING
pub fn octet_string(content: &[u8]) -> Vec<u8> {
    tlv(tag::OCTET_STRING, content)
}

/// Encode a BIT STRING with no unused bits
pub fn bit_string(content: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(content.len() + 1);
    body.push(0x00);
    body.extend_from_slice(content);
    tlv(tag::BIT_STRING, &body)
}

/// Encode an OBJECT IDENTIFIER from its content octets
pub fn oid(content: &[u8]) -> Vec<u8> {
    tlv(tag::OID, content)
}

/// Cursor over a DER byte string
#[derive(Debug, Clone)]
pub struct DerReader<'a> {
    data: &'a [u8],
    pos: usize,
    context: &'static str,
}

impl<'a> DerReader<'a> {
    /// Start reading `data`; `context` is reported in every error
    pub fn new(data: &'a [u8], context: &'static str) -> Self {
        Self { data, pos: 0, context }
    }

    fn fail(&self, message: &str) -> Error {
        Error::serialization(self.context, message.to_string())
    }

    /// True once every byte has been consumed
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Tag of the next element, if any
    pub fn peek_tag(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn read_length(&mut self) -> Result<usize> {
        let first = *self
            .data
            .get(self.pos)
            .ok_or_else(|| self.fail("truncated length"))?;
        self.pos += 1;

        if first < 0x80 {
            return Ok(first as usize);
        }
        let count = (first & 0x7F) as usize;
        if count == 0 {
            return Err(self.fail("indefinite length"));
        }
        if count > 4 {
            return Err(self.fail("length too large"));
        }
        let data = self.data;
        let bytes = data
            .get(self.pos..self.pos + count)
            .ok_or_else(|| self.fail("truncated length"))?;
        if bytes[0] == 0 {
            return Err(self.fail("non-minimal length"));
        }
        let len = bytes.iter().fold(0usize, |acc, &b| (acc << 8) | b as usize);
        if len < 0x80 {
            return Err(self.fail("non-minimal length"));
        }
        self.pos += count;
        Ok(len)
    }

    /// Read the next element, returning its tag and content
    pub fn read_any(&mut self) -> Result<(u8, &'a [u8])> {
        let tag = self.peek_tag().ok_or_else(|| self.fail("unexpected end of input"))?;
        self.pos += 1;
        let len = self.read_length()?;
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| self.fail("element overruns input"))?;
        let data = self.data;
        let content = &data[self.pos..end];
        self.pos = end;
        Ok((tag, content))
    }

    /// Read the next element, requiring the given tag
    pub fn read(&mut self, expected: u8) -> Result<&'a [u8]> {
        let (tag, content) = self.read_any()?;
        if tag != expected {
            return Err(Error::serialization(
                self.context,
                format!("expected tag 0x{:02x}, found 0x{:02x}", expected, tag),
            ));
        }
        Ok(content)
    }

    /// Read the next element only if it carries the given tag
    pub fn read_optional(&mut self, expected: u8) -> Result<Option<&'a [u8]>> {
        if self.peek_tag() != Some(expected) {
            return Ok(None);
        }
        self.read(expected).map(Some)
    }

    /// Read a SEQUENCE and return a reader over its contents
    pub fn read_sequence(&mut self) -> Result<DerReader<'a>> {
        let content = self.read(tag::SEQUENCE)?;
        Ok(DerReader::new(content, self.context))
    }

    /// Read a non-negative INTEGER and return its magnitude without the
    /// sign-padding byte
    pub fn read_unsigned_integer(&mut self) -> Result<&'a [u8]> {
        let content = self.read(tag::INTEGER)?;
        match content {
            [] => Err(self.fail("empty INTEGER")),
            [first, ..] if first & 0x80 != 0 => Err(self.fail("negative INTEGER")),
            [0x00, second, ..] if second & 0x80 == 0 => Err(self.fail("non-minimal INTEGER")),
            [0x00, rest @ ..] if !rest.is_empty() => Ok(rest),
            _ => Ok(content),
        }
    }

    /// Read a small non-negative INTEGER such as a version field
    pub fn read_small_integer(&mut self) -> Result<u64> {
        let magnitude = self.read_unsigned_integer()?;
        if magnitude.len() > 8 {
            return Err(self.fail("INTEGER too large"));
        }
        Ok(magnitude.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
    }

    /// Read a BIT STRING that has no unused bits
    pub fn read_bit_string(&mut self) -> Result<&'a [u8]> {
        let content = self.read(tag::BIT_STRING)?;
        match content {
            [0x00, rest @ ..] => Ok(rest),
            _ => Err(self.fail("BIT STRING with unused bits")),
        }
    }

    /// Require that every byte has been consumed
    pub fn finish(self) -> Result<()> {
        if !self.is_empty() {
            return Err(self.fail("trailing data"));
        }
        Ok(())
    }
}
