//! Key-schedule derivations layered over the combiner.
//!
//! The handshake layer only ever calls the PRF with a handful of fixed
//! label/length combinations; those conventions live here so callers cannot
//! mix up label spelling or random ordering:
//!
//!   master secret   = PRF(pre_master, "master secret",  client ‖ server, 48)
//!   key block       = PRF(master,     "key expansion",  server ‖ client, n)
//!   finished hash   = PRF(master,     "... finished",   transcript, 12)
//!
//! Note the swapped random order between master-secret and key-expansion
//! derivation.

use subtle::ConstantTimeEq;

use crate::error::PrfError;
use crate::prf::prf;
use crate::registry::{DigestRegistry, DigestType};
use crate::seed::SeedList;

pub const MASTER_SECRET_LABEL: &[u8] = b"master secret";
pub const KEY_EXPANSION_LABEL: &[u8] = b"key expansion";
pub const CLIENT_FINISHED_LABEL: &[u8] = b"client finished";
pub const SERVER_FINISHED_LABEL: &[u8] = b"server finished";

/// Master secret size.
pub const MASTER_SECRET_LEN: usize = 48;

/// Finished verify_data size.
pub const VERIFY_DATA_LEN: usize = 12;

/// Derive the 48-byte master secret from the pre-master secret.
pub fn master_secret(
    registry: &DigestRegistry,
    digest_type: DigestType,
    pre_master: &[u8],
    client_random: &[u8],
    server_random: &[u8],
) -> Result<[u8; MASTER_SECRET_LEN], PrfError> {
    let mut seeds = SeedList::new();
    seeds
        .push(MASTER_SECRET_LABEL)
        .push(client_random)
        .push(server_random);

    let mut out = [0u8; MASTER_SECRET_LEN];
    prf(registry, digest_type, pre_master, &seeds, &mut out)?;
    Ok(out)
}

/// Expand the master secret into the connection key block.
///
/// Randoms are fed server-first here, unlike master-secret derivation.
pub fn key_block(
    registry: &DigestRegistry,
    digest_type: DigestType,
    master: &[u8],
    server_random: &[u8],
    client_random: &[u8],
    out: &mut [u8],
) -> Result<(), PrfError> {
    let mut seeds = SeedList::new();
    seeds
        .push(KEY_EXPANSION_LABEL)
        .push(server_random)
        .push(client_random);

    prf(registry, digest_type, master, &seeds, out)
}

/// Compute the 12-byte finished hash over a transcript digest.
///
/// `label` is [`CLIENT_FINISHED_LABEL`] or [`SERVER_FINISHED_LABEL`].
pub fn finished_hash(
    registry: &DigestRegistry,
    digest_type: DigestType,
    master: &[u8],
    label: &[u8],
    transcript: &[u8],
) -> Result<[u8; VERIFY_DATA_LEN], PrfError> {
    let mut seeds = SeedList::new();
    seeds.push(label).push(transcript);

    let mut out = [0u8; VERIFY_DATA_LEN];
    prf(registry, digest_type, master, &seeds, &mut out)?;
    Ok(out)
}

/// Recompute the peer's finished hash and compare in constant time.
pub fn verify_finished(
    registry: &DigestRegistry,
    digest_type: DigestType,
    master: &[u8],
    label: &[u8],
    transcript: &[u8],
    received: &[u8],
) -> Result<bool, PrfError> {
    let expected = finished_hash(registry, digest_type, master, label, transcript)?;
    Ok(expected.as_slice().ct_eq(received).into())
}
