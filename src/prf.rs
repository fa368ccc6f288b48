//! Secret-splitting combiner over the registry's enabled digests.
//!
//! The secret is partitioned across the algorithms the selector enables,
//! each partition drives one expansion, and the streams are merged by
//! byte-wise XOR. With two enabled hash families an attacker must break
//! both to recover the output; with one the combiner degenerates to a
//! plain chained expansion.
//!
//! Partition rule (historical, preserved): `len = secret_len / count`; a
//! single enabled algorithm gets the whole secret; otherwise the first
//! partition absorbs the odd leftover byte and every later partition takes
//! exactly `len` bytes starting where the previous one ended.

extern crate alloc;

use alloc::vec;

use zeroize::Zeroizing;

use crate::error::PrfError;
use crate::expand::{p_hash, ExpandMode};
use crate::registry::{DigestRegistry, DigestType};
use crate::seed::SeedList;

/// Per-algorithm byte ranges of the secret, in enabled-slot order.
struct Partitions {
    len: usize,
    extra: usize,
    offset: usize,
    first: bool,
}

impl Partitions {
    fn new(secret_len: usize, count: usize) -> Self {
        let len = secret_len / count;
        let extra = if count > 1 && secret_len % 2 == 1 {
            secret_len % count
        } else {
            0
        };
        Self {
            len,
            extra,
            offset: 0,
            first: true,
        }
    }

    /// The next partition's byte range.
    fn next_range(&mut self) -> core::ops::Range<usize> {
        let take = if self.first {
            self.len + self.extra
        } else {
            self.len
        };
        self.first = false;
        let start = self.offset;
        self.offset = start + take;
        start..self.offset
    }
}

/// PRF mode: expand `secret` over `seeds` into `out`, XOR-combining one
/// chained expansion per enabled algorithm.
///
/// `out` is zero-filled before any write and re-zeroed on failure, so an
/// error never leaves a partial combination behind.
pub fn prf(
    registry: &DigestRegistry,
    digest_type: DigestType,
    secret: &[u8],
    seeds: &SeedList<'_>,
    out: &mut [u8],
) -> Result<(), PrfError> {
    out.fill(0);
    let result = prf_inner(registry, digest_type, secret, seeds, out);
    if result.is_err() {
        out.fill(0);
    }
    result
}

fn prf_inner(
    registry: &DigestRegistry,
    digest_type: DigestType,
    secret: &[u8],
    seeds: &SeedList<'_>,
    out: &mut [u8],
) -> Result<(), PrfError> {
    let mask = digest_type.mask();
    let count = registry.enabled(mask).count();
    if count == 0 {
        return Err(PrfError::UnknownDigestType);
    }

    let mut parts = Partitions::new(secret.len(), count);
    let mut stream = Zeroizing::new(vec![0u8; out.len()]);

    for slot in registry.enabled(mask) {
        let algorithm = slot.algorithm.ok_or(PrfError::DigestUnavailable)?;
        let range = parts.next_range();
        p_hash(
            algorithm,
            &secret[range],
            seeds,
            &mut stream,
            ExpandMode::Chained,
        )?;
        for (acc, byte) in out.iter_mut().zip(stream.iter()) {
            *acc ^= byte;
        }
    }
    Ok(())
}

/// MAC mode: one single-round keyed hash with the first enabled algorithm,
/// keyed with that algorithm's partition of the secret.
///
/// Further enabled algorithms are never consulted. Fails with
/// [`PrfError::OutputTooLong`] when `out` exceeds one native hash output.
pub fn mac(
    registry: &DigestRegistry,
    digest_type: DigestType,
    secret: &[u8],
    seeds: &SeedList<'_>,
    out: &mut [u8],
) -> Result<(), PrfError> {
    out.fill(0);
    let result = mac_inner(registry, digest_type, secret, seeds, out);
    if result.is_err() {
        out.fill(0);
    }
    result
}

fn mac_inner(
    registry: &DigestRegistry,
    digest_type: DigestType,
    secret: &[u8],
    seeds: &SeedList<'_>,
    out: &mut [u8],
) -> Result<(), PrfError> {
    let mask = digest_type.mask();
    let count = registry.enabled(mask).count();
    let slot = registry
        .enabled(mask)
        .next()
        .ok_or(PrfError::UnknownDigestType)?;

    let mut parts = Partitions::new(secret.len(), count);
    let algorithm = slot.algorithm.ok_or(PrfError::DigestUnavailable)?;
    let range = parts.next_range();
    p_hash(
        algorithm,
        &secret[range],
        seeds,
        out,
        ExpandMode::SingleRound,
    )
}
