// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Transition error type shared by the lock pipeline.

use crate::platform::MonitorCallError;
use core::fmt;

/// Why a secure/unsecure transition failed.
///
/// Whatever the variant, the failing region's state is untouched, earlier
/// regions in the same list keep their applied state, and later regions
/// are never attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    /// Region length is zero, not a multiple of the chunk size, or counts
    /// more chunks than the wire can express. A caller bug; retrying
    /// cannot help.
    InvalidRegionSize,
    /// The chunk table could not be allocated. Transient; the caller may
    /// retry the whole transition later.
    AllocationFailure,
    /// The secure monitor rejected or failed the request. Authoritative;
    /// never retried automatically.
    MonitorCall(MonitorCallError),
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegionSize => {
                write!(f, "region length is not a positive multiple of the chunk size")
            }
            Self::AllocationFailure => write!(f, "chunk table allocation failed"),
            Self::MonitorCall(err) => write!(f, "{err}"),
        }
    }
}

impl From<MonitorCallError> for TransitionError {
    fn from(err: MonitorCallError) -> Self {
        Self::MonitorCall(err)
    }
}
