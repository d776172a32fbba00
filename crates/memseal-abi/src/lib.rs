// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Wire ABI shared between Memseal and the secure monitor.
//!
//! This crate defines the contract with the trusted environment's
//! memory-protection service:
//! - Type definitions for physical addresses, page frames, and regions
//! - The packed lock-request layout and its protocol constants
//! - The feature-version encoding used for capability discovery
//!
//! # Design Principles
//!
//! - **Almost no dependencies**: pure data types plus `zerocopy` for the
//!   byte-exact request image, 100% host-testable
//! - **Stable layout**: wire types use `#[repr(C, packed)]` and are
//!   size-checked at compile time
//! - **64-bit only**: chunk-list addresses cross the privilege boundary
//!   as 64-bit physical addresses
//!
//! # Modules
//!
//! - [`types`]: address and region types (`Paddr`, `Pfn`, `MemoryRegion`)
//! - [`protocol`]: the lock/unlock request ABI and its constants
//! - [`version`]: feature identifiers and the version encoding

#![cfg_attr(not(test), no_std)]

pub mod protocol;
pub mod types;
pub mod version;

// Re-export commonly used types at crate root
pub use protocol::{LockRequest, MemChunks};
pub use types::{MemoryRegion, Paddr, Pfn};
pub use version::{FeatureId, FeatureVersion};
