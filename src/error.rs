//! Unified error type for the PRF engine.

use core::fmt;

/// Failure of a registry, expansion or digest operation.
///
/// Every public operation returns this directly; nothing is retried and
/// nothing is downgraded. Callers map these into protocol-level alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrfError {
    /// The selected slot has no bound algorithm (engine-provided digest
    /// that was never loaded).
    DigestUnavailable,
    /// The selector resolves to zero enabled registry slots.
    UnknownDigestType,
    /// A single-round or unkeyed digest was asked for more bytes than one
    /// native hash output provides.
    OutputTooLong,
    /// The underlying keyed hash rejected the given key bytes.
    KeyInitFailed,
}

impl fmt::Display for PrfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrfError::DigestUnavailable => write!(f, "digest algorithm not available"),
            PrfError::UnknownDigestType => write!(f, "unknown digest type"),
            PrfError::OutputTooLong => write!(f, "requested output exceeds digest size"),
            PrfError::KeyInitFailed => write!(f, "keyed hash rejected the key"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PrfError {}
