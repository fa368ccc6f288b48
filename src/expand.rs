//! Iterative HMAC expansion ("P_hash").
//!
//! Chained mode:
//!   A(1) = HMAC(secret, seed)
//!   A(i+1) = HMAC(secret, A(i))
//!   out = HMAC(secret, A(1) || seed) || HMAC(secret, A(2) || seed) || ...
//! truncated to the requested length. The emitted block and the next chain
//! value are *independent* keyed-hash invocations over the same A(i).
//!
//! SingleRound mode returns a truncation of A(1) and never chains; it backs
//! handshake MAC verification rather than key expansion.
//!
//! Chain values and finalized MAC outputs are scrubbed on every exit path.

extern crate alloc;

use alloc::vec;

use hmac::digest::{KeyInit, OutputSizeUser};
use hmac::{Hmac, Mac};
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha384};
use zeroize::{Zeroize, Zeroizing};

use crate::error::PrfError;
use crate::registry::HashAlgorithm;
use crate::seed::SeedList;

/// How the expander consumes the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandMode {
    /// Full expansion: chain until `out` is filled, truncating the final
    /// block.
    Chained,
    /// One keyed-hash round over the seeds, truncated to `out`. Fails with
    /// [`PrfError::OutputTooLong`] beyond one native hash output.
    SingleRound,
}

/// Expand `secret` over the seed fragments into `out`.
pub fn p_hash(
    algorithm: HashAlgorithm,
    secret: &[u8],
    seeds: &SeedList<'_>,
    out: &mut [u8],
    mode: ExpandMode,
) -> Result<(), PrfError> {
    match algorithm {
        HashAlgorithm::Md5 => p_hash_with::<Hmac<Md5>>(secret, seeds, out, mode),
        HashAlgorithm::Sha1 => p_hash_with::<Hmac<Sha1>>(secret, seeds, out, mode),
        HashAlgorithm::Sha256 => p_hash_with::<Hmac<Sha256>>(secret, seeds, out, mode),
        HashAlgorithm::Sha384 => p_hash_with::<Hmac<Sha384>>(secret, seeds, out, mode),
    }
}

/// Finalize `mac` into `dst` (a prefix of the native output), scrubbing the
/// full output afterwards.
fn finalize_into<M: Mac>(mac: M, dst: &mut [u8]) {
    let mut full = mac.finalize().into_bytes();
    dst.copy_from_slice(&full[..dst.len()]);
    full.zeroize();
}

fn p_hash_with<M>(
    secret: &[u8],
    seeds: &SeedList<'_>,
    out: &mut [u8],
    mode: ExpandMode,
) -> Result<(), PrfError>
where
    M: Mac + KeyInit + Clone,
{
    let chunk = <M as OutputSizeUser>::output_size();

    // One keyed template per call; every keyed-hash invocation below is an
    // independent clone of it.
    let template = <M as Mac>::new_from_slice(secret).map_err(|_| PrfError::KeyInitFailed)?;

    // A(1) = HMAC(secret, seed)
    let mut a = Zeroizing::new(vec![0u8; chunk]);
    {
        let mut mac = template.clone();
        for fragment in seeds.iter() {
            mac.update(fragment);
        }
        finalize_into(mac, &mut a);
    }

    if mode == ExpandMode::SingleRound {
        if out.len() > chunk {
            return Err(PrfError::OutputTooLong);
        }
        out.copy_from_slice(&a[..out.len()]);
        return Ok(());
    }

    let mut off = 0;
    loop {
        // Emitted block: HMAC(secret, A(i) || seed)
        let mut block = template.clone();
        block.update(&a);
        for fragment in seeds.iter() {
            block.update(fragment);
        }

        let remaining = out.len() - off;
        if remaining > chunk {
            finalize_into(block, &mut out[off..off + chunk]);
            off += chunk;

            // Chain advance: A(i+1) = HMAC(secret, A(i))
            let mut next = template.clone();
            next.update(&a);
            finalize_into(next, &mut a);
        } else {
            // Final block, truncated; no further chain advance.
            finalize_into(block, &mut out[off..]);
            return Ok(());
        }
    }
}
