// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! # Memseal
//!
//! Transitions ownership of physical memory regions between the
//! general-purpose execution environment and the secure monitor's trusted
//! environment, speaking the monitor's fixed-size-chunk lock protocol.
//!
//! This crate provides:
//! - Chunk-table construction from arbitrary region lists
//! - The secure/unsecure pipeline under a global serialization lock
//! - Per-page protection-state tracking for other collaborators
//! - The protocol capability query (dynamic locking needs version 1.1.0)
//! - Platform traits for the monitor transport and cache visibility,
//!   with a recording mock for host tests
//!
//! The memory allocator producing region lists, the call transport into
//! the trusted environment, and the policy deciding *when* to transition
//! a buffer all live outside this crate; the [`platform`] traits are the
//! boundary.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

pub mod capability;
pub mod lock;
pub mod platform;
pub mod tracker;

// Re-export commonly used types at crate root
pub use capability::supports_dynamic_locking;
pub use lock::{ChunkTable, LockCoordinator, TransitionError};
pub use memseal_abi::{MemoryRegion, Paddr, Pfn};
pub use platform::{MemoryVisibility, MonitorCallError, SecureMonitor};
pub use tracker::ProtectionTracker;

/// Crate version.
pub const VERSION: &str = match option_env!("MEMSEAL_VERSION") {
    Some(v) => v,
    None => "unknown",
};
