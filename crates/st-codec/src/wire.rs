//! # Wire Encoding
//!
//! Strict two-way bijection between [`CrossChainMessage`] and its canonical
//! byte string. Decoding consumes the entire buffer; anything left over is
//! an error.

use crate::errors::CodecError;
use crate::message::CrossChainMessage;
use shared_types::{Hash, LifecycleAction, U256};

/// Maximum length of a length-prefixed string field (action tag, CID).
pub const MAX_STRING_LEN: usize = 4096;

/// Encode a message into its canonical byte string.
pub fn encode(msg: &CrossChainMessage) -> Vec<u8> {
    let action = msg.action.as_tag().as_bytes();
    let cid = msg.content_cid.as_bytes();

    let mut out = Vec::with_capacity(32 + 4 + action.len() + 8 + 32 + 4 + cid.len() + 32 + 8);

    let mut nonce_bytes = [0u8; 32];
    msg.nonce.to_big_endian(&mut nonce_bytes);
    out.extend_from_slice(&nonce_bytes);

    out.extend_from_slice(&(action.len() as u32).to_be_bytes());
    out.extend_from_slice(action);

    out.extend_from_slice(&msg.record_id.to_be_bytes());
    out.extend_from_slice(&msg.data_hash);

    out.extend_from_slice(&(cid.len() as u32).to_be_bytes());
    out.extend_from_slice(cid);

    out.extend_from_slice(&msg.source_tx_hash);
    out.extend_from_slice(&msg.timestamp.to_be_bytes());

    out
}

/// Decode a canonical byte string back into a message.
///
/// Fails on truncation, oversized length prefixes, invalid UTF-8, or
/// trailing bytes.
pub fn decode(raw: &[u8]) -> Result<CrossChainMessage, CodecError> {
    let mut cursor = Cursor::new(raw);

    let nonce = U256::from_big_endian(cursor.take_array::<32>("nonce")?);
    let action_tag = cursor.take_string("action")?;
    let record_id = u64::from_be_bytes(*cursor.take_array::<8>("record_id")?);
    let data_hash: Hash = *cursor.take_array::<32>("data_hash")?;
    let content_cid = cursor.take_string("content_cid")?;
    let source_tx_hash: Hash = *cursor.take_array::<32>("source_tx_hash")?;
    let timestamp = u64::from_be_bytes(*cursor.take_array::<8>("timestamp")?);

    cursor.finish()?;

    Ok(CrossChainMessage {
        nonce,
        action: LifecycleAction::from_tag(&action_tag),
        record_id,
        data_hash,
        content_cid,
        source_tx_hash,
        timestamp,
    })
}

/// Byte-slice reader that tracks the current field for error reporting.
struct Cursor<'a> {
    raw: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(raw: &'a [u8]) -> Self {
        Self { raw, pos: 0 }
    }

    fn take(&mut self, n: usize, field: &'static str) -> Result<&'a [u8], CodecError> {
        let remaining = self.raw.len() - self.pos;
        if remaining < n {
            return Err(CodecError::Truncated {
                field,
                needed: n,
                remaining,
            });
        }
        let slice = &self.raw[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self, field: &'static str) -> Result<&'a [u8; N], CodecError> {
        let slice = self.take(N, field)?;
        // take() guarantees the length.
        Ok(slice.try_into().map_err(|_| CodecError::Truncated {
            field,
            needed: N,
            remaining: 0,
        })?)
    }

    fn take_string(&mut self, field: &'static str) -> Result<String, CodecError> {
        let len = u32::from_be_bytes(*self.take_array::<4>(field)?) as usize;
        if len > MAX_STRING_LEN {
            return Err(CodecError::OversizedField {
                field,
                len,
                max: MAX_STRING_LEN,
            });
        }
        let bytes = self.take(len, field)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| CodecError::InvalidUtf8 { field })
    }

    fn finish(&self) -> Result<(), CodecError> {
        let count = self.raw.len() - self.pos;
        if count != 0 {
            return Err(CodecError::TrailingBytes { count });
        }
        Ok(())
    }
}
