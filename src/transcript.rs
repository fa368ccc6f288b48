//! Unkeyed transcript digests.
//!
//! Handshake transcripts are hashed without a secret, so this is a one-shot
//! digest with the first algorithm the selector enables. No chaining, no
//! partitioning, no combination.

use zeroize::Zeroize;

use crate::error::PrfError;
use crate::registry::{DigestRegistry, DigestType};

/// Hash `data` with the first enabled algorithm into `out`.
///
/// `out` is zero-filled first; on success the leading bytes hold the full
/// native hash output and the byte count is returned. Fails with
/// [`PrfError::OutputTooLong`] when `out` cannot hold one native output.
pub fn transcript_digest(
    registry: &DigestRegistry,
    digest_type: DigestType,
    data: &[u8],
    out: &mut [u8],
) -> Result<usize, PrfError> {
    out.fill(0);

    let slot = registry
        .enabled(digest_type.mask())
        .next()
        .ok_or(PrfError::UnknownDigestType)?;
    let algorithm = slot.algorithm.ok_or(PrfError::DigestUnavailable)?;

    if algorithm.output_len() > out.len() {
        return Err(PrfError::OutputTooLong);
    }

    let mut hash = algorithm.digest(data);
    out[..hash.len()].copy_from_slice(&hash);
    hash.zeroize();
    Ok(algorithm.output_len())
}
