//! BER-TLV walker for EMV data objects.
//!
//! Tags are one or two bytes (a first byte whose low five bits are all set
//! announces a second tag byte). Lengths use the short form (`0..=127`) or the
//! long form (`0x80 | n` followed by `n` big-endian length bytes). The walker
//! stops at the first element it cannot read completely and keeps whatever it
//! decoded before that point; it never fails.

use std::collections::BTreeMap;

use crate::utils::{bytes_to_hex, bytes_to_hex_upper};

/// Tag-to-value map for one decode pass. Keys are uppercase tag hex (`"5F20"`),
/// values lowercase hex. Iteration order is by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TlvMap(BTreeMap<String, String>);

impl TlvMap {
    /// Value of `tag` as lowercase hex
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.0.get(tag).map(String::as_str)
    }

    /// Whether `tag` was decoded
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains_key(tag)
    }

    /// Number of distinct tags
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing was decoded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(tag, value)` pairs ordered by tag
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Iterator over the top-level TLV elements of a buffer, yielding
/// `(tag, value)` slices. Ends at the buffer end or the first malformed
/// element.
pub struct TlvIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> TlvIter<'a> {
    /// Iterate over `data` from its first byte.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_element(&self) -> Option<(&'a [u8], &'a [u8], usize)> {
        let data = self.data;
        let mut i = self.pos;

        let tag_len = if data.get(i)? & 0x1F == 0x1F { 2 } else { 1 };
        let tag = data.get(i..i + tag_len)?;
        i += tag_len;

        let first_len = *data.get(i)?;
        i += 1;

        let len = if first_len & 0x80 != 0 {
            let count = (first_len & 0x7F) as usize;
            if count > std::mem::size_of::<usize>() {
                return None;
            }
            let len_bytes = data.get(i..i + count)?;
            i += count;
            len_bytes
                .iter()
                .fold(0usize, |acc, &b| (acc << 8) | b as usize)
        } else {
            first_len as usize
        };

        let end = i.checked_add(len)?;
        let value = data.get(i..end)?;
        Some((tag, value, end))
    }
}

impl<'a> Iterator for TlvIter<'a> {
    type Item = (&'a [u8], &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.data.len() {
            return None;
        }
        match self.read_element() {
            Some((tag, value, next)) => {
                self.pos = next;
                Some((tag, value))
            }
            None => {
                // truncated element: stop for good
                self.pos = self.data.len();
                None
            }
        }
    }
}

/// Decode every readable top-level element. Duplicate tags: last one wins.
pub fn decode(buffer: &[u8]) -> TlvMap {
    let map = TlvIter::new(buffer)
        .map(|(tag, value)| (bytes_to_hex_upper(tag), bytes_to_hex(value)))
        .collect();
    TlvMap(map)
}
