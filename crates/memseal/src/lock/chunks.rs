// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Region to chunk-table conversion.

use super::types::TransitionError;
use memseal_abi::protocol::CHUNK_SIZE;
use memseal_abi::{MemoryRegion, Paddr};
use zerocopy::IntoBytes;

#[cfg(any(test, feature = "std"))]
use std::vec::Vec;

#[cfg(not(any(test, feature = "std")))]
use alloc::vec::Vec;

/// Flat physical-address table describing one region in protocol chunks.
///
/// A table is transient: built for exactly one monitor call and dropped
/// when that call returns, success or not. It is never retained across
/// calls and never shared.
#[derive(Debug)]
pub struct ChunkTable {
    chunks: Vec<Paddr>,
}

impl ChunkTable {
    /// Split `region` into its chunk base addresses.
    ///
    /// Fails with [`TransitionError::InvalidRegionSize`] when the length
    /// is zero, not a multiple of the chunk size, or spans more chunks
    /// than the wire's 32-bit count can express. Fails with
    /// [`TransitionError::AllocationFailure`] when the table cannot be
    /// allocated; nothing is retried here.
    pub fn build(region: MemoryRegion) -> Result<Self, TransitionError> {
        let length = region.length();
        if length == 0 || length % CHUNK_SIZE != 0 {
            return Err(TransitionError::InvalidRegionSize);
        }
        let count =
            usize::try_from(region.chunk_count()).map_err(|_| TransitionError::InvalidRegionSize)?;
        if u32::try_from(count).is_err() {
            return Err(TransitionError::InvalidRegionSize);
        }

        let mut chunks = Vec::new();
        chunks
            .try_reserve_exact(count)
            .map_err(|_| TransitionError::AllocationFailure)?;
        chunks.extend(region.chunks());
        Ok(Self { chunks })
    }

    /// Number of chunks, as the wire counts them.
    #[must_use]
    pub fn chunk_count(&self) -> u32 {
        self.chunks.len() as u32
    }

    /// The chunk base addresses in protocol order.
    #[must_use]
    pub fn addresses(&self) -> &[Paddr] {
        &self.chunks
    }

    /// The table as the byte image the monitor will read.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.chunks.as_bytes()
    }
}
