//! PKCS#7 padding to the AES block size.
//!
//! Every padded buffer ends in `n` bytes of value `n`, `1 <= n <= 16`. A
//! plaintext that is already block-aligned gets a full block of padding so the
//! trailer is never ambiguous.

use crate::error::{EnczilError, Result};
use crate::params::BLOCK_LEN;

/// Pad `data` to a multiple of [`BLOCK_LEN`].
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_LEN - (data.len() % BLOCK_LEN);
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Strip PKCS#7 padding, returning the unpadded prefix.
///
/// # Errors
///
/// Returns `EnczilError::Padding` if the buffer is empty, not block-aligned,
/// or the trailer does not encode a consistent padding length.
pub fn unpad(data: &[u8]) -> Result<&[u8]> {
    if data.is_empty() || data.len() % BLOCK_LEN != 0 {
        return Err(EnczilError::Padding(format!(
            "Padded length {} is not a positive multiple of {}",
            data.len(),
            BLOCK_LEN
        )));
    }

    let pad_len = data[data.len() - 1] as usize;
    if pad_len == 0 || pad_len > BLOCK_LEN {
        return Err(EnczilError::Padding(format!(
            "Invalid padding length byte {}",
            pad_len
        )));
    }

    let (body, trailer) = data.split_at(data.len() - pad_len);
    if trailer.iter().any(|&b| b as usize != pad_len) {
        return Err(EnczilError::Padding(
            "Padding bytes are inconsistent".to_string(),
        ));
    }

    Ok(body)
}
