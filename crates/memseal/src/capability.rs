// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Protocol capability query.

use crate::platform::SecureMonitor;
use memseal_abi::FeatureId;
use memseal_abi::version::MIN_DYNAMIC_LOCKING;

/// Whether the monitor's memory-protection service understands per-chunk
/// dynamic locking.
///
/// True iff the reported feature version is at least 1.1.0. A monitor
/// that cannot report a version compares as 0.0.0 and is rejected.
/// Stateless and mutation-free; safe to call repeatedly and concurrently.
#[must_use]
pub fn supports_dynamic_locking<M: SecureMonitor>(monitor: &M) -> bool {
    monitor.feature_version(FeatureId::MEMORY_PROTECTION) >= MIN_DYNAMIC_LOCKING
}

// =============================================================================
// Tests
// =============================================================================
