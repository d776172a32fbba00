// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! The lock/unlock request ABI of the memory-protection service.
//!
//! The trusted environment parses requests as a fixed binary layout, not a
//! self-describing format, so every field position here is load-bearing:
//!
//! | offset | size | field                              |
//! |--------|------|------------------------------------|
//! | 0      | 8    | chunk-list physical address        |
//! | 8      | 4    | chunk count                        |
//! | 12     | 4    | chunk size in bytes                |
//! | 16     | 4    | usage tag (always 0)               |
//! | 20     | 4    | lock flag (1 = lock, 0 = unlock)   |
//!
//! Fields are little-endian on the target. The structs below are
//! `#[repr(C, packed)]` and size-checked at compile time so the image
//! produced by [`zerocopy::IntoBytes`] is exactly this table.

use crate::types::Paddr;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

#[cfg(test)]
mod protocol_test;

/// Identifier of the memory-protection service within the secure monitor.
pub const SVC_MEMORY_PROTECTION: u32 = 0x0C;

/// Command selecting the chunked (v2) lock/unlock operation.
///
/// The older whole-range command is not spoken here; only the chunked
/// protocol survives, hence the suffix.
pub const CMD_MEM_PROTECT_LOCK_V2: u32 = 0x0A;

/// Usage tag carried in every request. The service accepts exactly one
/// value for dynamic locking.
pub const MEM_USAGE_NONE: u32 = 0;

/// The protocol's unit of locking: 1 MiB, fixed, not configurable.
pub const CHUNK_SIZE: u64 = 1024 * 1024;

/// Page size used for protection-state tracking.
pub const PAGE_SIZE: u64 = 4096;

/// log2 of [`PAGE_SIZE`].
pub const PAGE_SHIFT: u32 = 12;

const _: () = assert!(CHUNK_SIZE % PAGE_SIZE == 0);
const _: () = assert!(PAGE_SIZE == 1 << PAGE_SHIFT);

/// Wire description of one chunk table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned,
)]
#[repr(C, packed)]
pub struct MemChunks {
    /// Physical address of the flat chunk-address table.
    pub chunk_list: Paddr,
    /// Number of entries in the table.
    pub chunk_count: u32,
    /// Size of each chunk in bytes; always [`CHUNK_SIZE`].
    pub chunk_size: u32,
}

/// One complete lock or unlock request, passed byte-exact to the monitor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned,
)]
#[repr(C, packed)]
pub struct LockRequest {
    /// The chunk table to transition.
    pub chunks: MemChunks,
    /// Usage tag; always [`MEM_USAGE_NONE`].
    pub usage: u32,
    /// 1 to lock (secure), 0 to unlock (unsecure).
    pub lock: u32,
}

impl LockRequest {
    /// Build a request for the table at `chunk_list` holding `chunk_count`
    /// entries of [`CHUNK_SIZE`] bytes each.
    #[must_use]
    pub const fn new(chunk_list: Paddr, chunk_count: u32, lock: bool) -> Self {
        Self {
            chunks: MemChunks {
                chunk_list,
                chunk_count,
                chunk_size: CHUNK_SIZE as u32,
            },
            usage: MEM_USAGE_NONE,
            lock: if lock { 1 } else { 0 },
        }
    }
}

const _: () = assert!(core::mem::size_of::<MemChunks>() == 16);
const _: () = assert!(core::mem::size_of::<LockRequest>() == 24);
const _: () = assert!(core::mem::align_of::<LockRequest>() == 1);
