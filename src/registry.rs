//! Digest registry: the fixed slot table and the caller-facing selectors.
//!
//! Six slots in stable index order, each with a power-of-two handshake-MAC
//! flag and (when the algorithm exists) a bound identity:
//!
//!   idx 0  0x10   MD5
//!   idx 1  0x20   SHA-1
//!   idx 2  0x40   GOST R 34.11-94   (engine-provided, normally unbound)
//!   idx 3  0      unused MAC placeholder
//!   idx 4  0x80   SHA-256
//!   idx 5  0x100  SHA-384
//!
//! A selector mask is a flag combination left-shifted by [`PRF_DIGEST_SHIFT`]
//! into the PRF digest bit region. The combiner walks the slots in index
//! order and uses every slot whose shifted flag intersects the mask, which
//! keeps secret partitioning deterministic and independent of algorithm
//! names.

extern crate alloc;

use alloc::vec::Vec;

use md5::{Digest, Md5};
use sha1::Sha1;
use sha2::{Sha256, Sha384};

// ---------------------------------------------------------------------------
// Handshake digest flags (stable wire-adjacent constants)
// ---------------------------------------------------------------------------

pub const HANDSHAKE_MAC_MD5: u32 = 0x10;
pub const HANDSHAKE_MAC_SHA: u32 = 0x20;
pub const HANDSHAKE_MAC_GOST94: u32 = 0x40;
pub const HANDSHAKE_MAC_SHA256: u32 = 0x80;
pub const HANDSHAKE_MAC_SHA384: u32 = 0x100;

/// Shift moving a slot flag into the PRF digest bit region of a selector
/// mask.
pub const PRF_DIGEST_SHIFT: u32 = 10;

/// Number of slots in the registry.
pub const DIGEST_SLOTS: usize = 6;

/// Largest native output across bound algorithms (SHA-384).
pub const MAX_DIGEST_LEN: usize = 48;

// ---------------------------------------------------------------------------
// Algorithm identities
// ---------------------------------------------------------------------------

/// A concrete hash algorithm a registry slot can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha384,
}

impl HashAlgorithm {
    /// Native output size in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
        }
    }

    /// Canonical algorithm name.
    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
        }
    }

    /// Look an algorithm up by canonical name.
    ///
    /// Unknown names (including the GOST family, which this build does not
    /// carry) resolve to `None`, leaving the corresponding slot unbound.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "MD5" => Some(HashAlgorithm::Md5),
            "SHA-1" => Some(HashAlgorithm::Sha1),
            "SHA-256" => Some(HashAlgorithm::Sha256),
            "SHA-384" => Some(HashAlgorithm::Sha384),
            _ => None,
        }
    }

    /// One-shot unkeyed digest of `data`.
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Md5 => Md5::digest(data).to_vec(),
            HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
        }
    }
}

// ---------------------------------------------------------------------------
// Slots and registry
// ---------------------------------------------------------------------------

/// One registry entry: a stable flag plus an optionally bound algorithm.
///
/// A slot with flag 0 is a placeholder and never resolves to an algorithm.
#[derive(Debug, Clone, Copy)]
pub struct DigestSlot {
    pub flag: u32,
    pub algorithm: Option<HashAlgorithm>,
}

impl DigestSlot {
    /// Whether this slot participates in the given selector mask.
    pub(crate) fn enabled_in(&self, mask: u32) -> bool {
        (self.flag << PRF_DIGEST_SHIFT) & mask != 0
    }
}

/// The fixed, ordered digest table.
///
/// Constructed once and passed by reference into every operation; after
/// construction it is immutable and safe for unsynchronized concurrent
/// reads.
#[derive(Debug, Clone)]
pub struct DigestRegistry {
    slots: [DigestSlot; DIGEST_SLOTS],
}

impl DigestRegistry {
    /// Build the registry, binding each slot by canonical name.
    ///
    /// The GOST slots stay unbound (the algorithm is engine-provided and
    /// absent here); operations selecting them fail with
    /// [`PrfError::DigestUnavailable`](crate::PrfError::DigestUnavailable).
    pub fn new() -> Self {
        let bind = |flag: u32, name: &str| DigestSlot {
            flag,
            algorithm: HashAlgorithm::by_name(name),
        };
        Self {
            slots: [
                bind(HANDSHAKE_MAC_MD5, "MD5"),
                bind(HANDSHAKE_MAC_SHA, "SHA-1"),
                bind(HANDSHAKE_MAC_GOST94, "GOSTR3411-94"),
                // Unused MAC-algorithm placeholder (GOST 28147-89 MAC slot).
                DigestSlot { flag: 0, algorithm: None },
                bind(HANDSHAKE_MAC_SHA256, "SHA-256"),
                bind(HANDSHAKE_MAC_SHA384, "SHA-384"),
            ],
        }
    }

    /// Fetch a slot by stable index; `None` outside `0..DIGEST_SLOTS`.
    ///
    /// The placeholder slot (index 3) is returned as `(0, unbound)`.
    pub fn lookup(&self, index: usize) -> Option<DigestSlot> {
        self.slots.get(index).copied()
    }

    /// Slots participating in `mask`, in stable index order.
    pub(crate) fn enabled(&self, mask: u32) -> impl Iterator<Item = DigestSlot> + '_ {
        self.slots.iter().copied().filter(move |s| s.enabled_in(mask))
    }
}

impl Default for DigestRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Caller-facing selectors
// ---------------------------------------------------------------------------

/// Named digest type a caller selects; each value maps 1:1 to an internal
/// slot mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestType {
    /// Legacy dual-digest construction: MD5 and SHA-1 expansions combined
    /// by XOR, each keyed with its own half of the secret.
    Md5Sha1,
    /// Single SHA-256 expansion over the whole secret.
    Sha256,
    /// Single SHA-384 expansion over the whole secret.
    Sha384,
    /// Engine-provided GOST R 34.11-94 slot. Selectable, but unbound in
    /// this build.
    Gost94,
    /// The MAC-only placeholder slot. No PRF digest backs it, so every
    /// operation fails with
    /// [`PrfError::UnknownDigestType`](crate::PrfError::UnknownDigestType).
    Gost89Mac,
}

impl DigestType {
    /// The slot mask this selector resolves to.
    pub const fn mask(self) -> u32 {
        match self {
            DigestType::Md5Sha1 => (HANDSHAKE_MAC_MD5 | HANDSHAKE_MAC_SHA) << PRF_DIGEST_SHIFT,
            DigestType::Sha256 => HANDSHAKE_MAC_SHA256 << PRF_DIGEST_SHIFT,
            DigestType::Sha384 => HANDSHAKE_MAC_SHA384 << PRF_DIGEST_SHIFT,
            DigestType::Gost94 => HANDSHAKE_MAC_GOST94 << PRF_DIGEST_SHIFT,
            DigestType::Gost89Mac => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_table_is_stable() {
        let reg = DigestRegistry::new();

        let expect = [
            (HANDSHAKE_MAC_MD5, Some(HashAlgorithm::Md5)),
            (HANDSHAKE_MAC_SHA, Some(HashAlgorithm::Sha1)),
            (HANDSHAKE_MAC_GOST94, None),
            (0, None),
            (HANDSHAKE_MAC_SHA256, Some(HashAlgorithm::Sha256)),
            (HANDSHAKE_MAC_SHA384, Some(HashAlgorithm::Sha384)),
        ];
        for (idx, (flag, alg)) in expect.iter().enumerate() {
            let slot = reg.lookup(idx).unwrap();
            assert_eq!(slot.flag, *flag, "slot {}", idx);
            assert_eq!(slot.algorithm, *alg, "slot {}", idx);
        }
    }

    #[test]
    fn lookup_out_of_range_fails() {
        let reg = DigestRegistry::new();
        assert!(reg.lookup(DIGEST_SLOTS).is_none());
        assert!(reg.lookup(usize::MAX).is_none());
    }

    #[test]
    fn placeholder_slot_never_resolves() {
        let reg = DigestRegistry::new();
        let gap = reg.lookup(3).unwrap();
        assert_eq!(gap.flag, 0);
        assert!(gap.algorithm.is_none());
        // flag 0 can never intersect any mask
        assert!(!gap.enabled_in(u32::MAX));
    }

    #[test]
    fn selector_masks_pick_expected_slots() {
        let reg = DigestRegistry::new();

        let picked: alloc::vec::Vec<u32> = reg
            .enabled(DigestType::Md5Sha1.mask())
            .map(|s| s.flag)
            .collect();
        assert_eq!(picked, [HANDSHAKE_MAC_MD5, HANDSHAKE_MAC_SHA]);

        assert_eq!(reg.enabled(DigestType::Sha256.mask()).count(), 1);
        assert_eq!(reg.enabled(DigestType::Sha384.mask()).count(), 1);
        assert_eq!(reg.enabled(DigestType::Gost94.mask()).count(), 1);
        assert_eq!(reg.enabled(DigestType::Gost89Mac.mask()).count(), 0);
    }

    #[test]
    fn by_name_round_trips_canonical_names() {
        for alg in [
            HashAlgorithm::Md5,
            HashAlgorithm::Sha1,
            HashAlgorithm::Sha256,
            HashAlgorithm::Sha384,
        ] {
            assert_eq!(HashAlgorithm::by_name(alg.name()), Some(alg));
        }
        assert!(HashAlgorithm::by_name("GOSTR3411-94").is_none());
        assert!(HashAlgorithm::by_name("sha-256").is_none());
    }
}
