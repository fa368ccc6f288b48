//! # keyloom
//!
//! Dual-digest PRF engine: HMAC key expansion and handshake digests for
//! TLS-style transports.
//!
//! ## Quick Start
//!
//! ```rust
//! use keyloom::{prf, DigestRegistry, DigestType, SeedList};
//!
//! let registry = DigestRegistry::new();
//!
//! let mut seeds = SeedList::new();
//! seeds.push(b"key expansion").push(b"client random");
//!
//! let mut key_block = [0u8; 104];
//! prf(&registry, DigestType::Sha256, b"master secret bytes", &seeds, &mut key_block).unwrap();
//! ```
//!
//! ## Security Properties
//!
//! - **Dual-digest splitting**: the legacy `Md5Sha1` type keys one MD5 and
//!   one SHA-1 expansion with separate halves of the secret and XORs the
//!   streams — breaking one hash family is not enough
//! - **Scrubbed intermediates**: chain values, partitions and expansion
//!   scratch are zeroed on every exit path, including failures
//! - **Uniform errors**: every operation returns one discriminated error
//!   type; nothing is retried or silently downgraded
//!
//! ## What's NOT Provided
//!
//! - Hash/HMAC primitives (supplied by the RustCrypto crates)
//! - Transport, record framing, handshake orchestration
//! - Certificate handling and negotiation policy

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![doc(html_root_url = "https://docs.rs/keyloom/0.1.0")]

extern crate alloc;

mod error;
mod expand;
mod prf;
mod registry;
mod schedule;
mod seed;
mod transcript;

pub use error::PrfError;
pub use expand::{p_hash, ExpandMode};
pub use prf::{mac, prf};
pub use registry::{
    DigestRegistry, DigestSlot, DigestType, HashAlgorithm, DIGEST_SLOTS, HANDSHAKE_MAC_GOST94,
    HANDSHAKE_MAC_MD5, HANDSHAKE_MAC_SHA, HANDSHAKE_MAC_SHA256, HANDSHAKE_MAC_SHA384,
    MAX_DIGEST_LEN, PRF_DIGEST_SHIFT,
};
pub use schedule::{
    finished_hash, key_block, master_secret, verify_finished, CLIENT_FINISHED_LABEL,
    KEY_EXPANSION_LABEL, MASTER_SECRET_LABEL, MASTER_SECRET_LEN, SERVER_FINISHED_LABEL,
    VERIFY_DATA_LEN,
};
pub use seed::{SeedList, MAX_SEED_PARTS};
pub use transcript::transcript_digest;
