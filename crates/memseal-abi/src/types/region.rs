// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Physical memory regions as the allocator hands them over.

use crate::protocol::{CHUNK_SIZE, PAGE_SIZE};
use crate::types::{Paddr, Pfn};

/// A contiguous span of physical memory requested for transition.
///
/// Produced by the external allocator and read-only to this workspace.
/// A region is well-formed for the lock protocol when its length is a
/// positive multiple of [`CHUNK_SIZE`]; the converter enforces that, this
/// type does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryRegion {
    base: Paddr,
    length: u64,
}

impl MemoryRegion {
    /// Describe a region of `length` bytes starting at `base`.
    #[inline]
    #[must_use]
    pub const fn new(base: Paddr, length: u64) -> Self {
        Self { base, length }
    }

    /// First physical address of the region.
    #[inline]
    #[must_use]
    pub const fn base(self) -> Paddr {
        self.base
    }

    /// Length of the region in bytes.
    #[inline]
    #[must_use]
    pub const fn length(self) -> u64 {
        self.length
    }

    /// Number of whole protocol chunks the region spans.
    #[inline]
    #[must_use]
    pub const fn chunk_count(self) -> u64 {
        self.length / CHUNK_SIZE
    }

    /// Number of whole pages the region spans.
    #[inline]
    #[must_use]
    pub const fn page_count(self) -> u64 {
        self.length / PAGE_SIZE
    }

    /// Chunk base addresses in protocol order: `base + i * CHUNK_SIZE`.
    pub fn chunks(self) -> impl Iterator<Item = Paddr> {
        let base = self.base;
        (0..self.chunk_count()).map(move |i| base.add(i * CHUNK_SIZE))
    }

    /// Every page frame touched by the region, in ascending order.
    ///
    /// Frames are counted inclusively: a region whose base is not
    /// page-aligned still yields the frame containing its first byte and
    /// the frame containing its last. A region reaching past the top of
    /// the address space is clipped to the last frame that exists.
    pub fn pages(self) -> impl Iterator<Item = Pfn> {
        let first = Pfn::containing(self.base).as_u64();
        let count = if self.length == 0 {
            0
        } else {
            let last = self.base.as_u64().saturating_add(self.length - 1);
            Pfn::containing(Paddr::new(last)).as_u64() - first + 1
        };
        (0..count).map(move |i| Pfn::new(first + i))
    }
}
