// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Mock platform implementation for testing.
//!
//! This module provides a recording double for both platform traits,
//! allowing the transition pipeline to be tested without a trusted
//! environment. The mock logs every flush and call in order, serves
//! scripted responses, and flags overlapping calls from racing threads.

use crate::platform::traits::{MemoryVisibility, MonitorCallError, SecureMonitor};
use core::sync::atomic::{AtomicBool, Ordering};
use memseal_abi::{FeatureId, FeatureVersion, Paddr};
use spin::Mutex;
use std::collections::{BTreeMap, VecDeque};
use std::thread;
use std::vec::Vec;

/// One observed interaction with the platform, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockEvent {
    /// `flush_range` over a buffer of this many bytes.
    Flush {
        /// Length of the flushed buffer.
        bytes: usize,
    },
    /// `invoke` with this service, command, and request image.
    Invoke {
        /// Service identifier passed to the monitor.
        service: u32,
        /// Command identifier passed to the monitor.
        command: u32,
        /// Copy of the request bytes as handed over.
        request: Vec<u8>,
    },
}

struct MockState {
    events: Vec<MockEvent>,
    responses: VecDeque<Result<u32, MonitorCallError>>,
    versions: BTreeMap<FeatureId, FeatureVersion>,
    table_paddr: Paddr,
}

/// A recording platform double implementing both platform traits.
///
/// Calls answer `Ok(0)` unless responses have been scripted with
/// [`MockPlatform::script_response`]; feature queries answer
/// [`FeatureVersion::NONE`] unless set. An in-flight flag detects calls
/// that overlap in time; with correct callers it never trips, without
/// serialization it under-reports at worst and never false-positives.
pub struct MockPlatform {
    state: Mutex<MockState>,
    in_flight: AtomicBool,
    overlapped: AtomicBool,
}

impl MockPlatform {
    /// Physical address reported for flushed tables unless overridden.
    pub const DEFAULT_TABLE_PADDR: Paddr = Paddr::new(0xC000_0000);

    /// Create a mock with no scripted responses and no known features.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                events: Vec::new(),
                responses: VecDeque::new(),
                versions: BTreeMap::new(),
                table_paddr: Self::DEFAULT_TABLE_PADDR,
            }),
            in_flight: AtomicBool::new(false),
            overlapped: AtomicBool::new(false),
        }
    }

    /// Queue the result of the next unanswered `invoke`.
    pub fn script_response(&self, response: Result<u32, MonitorCallError>) {
        self.state.lock().responses.push_back(response);
    }

    /// Set the version reported for `feature`.
    pub fn set_feature_version(&self, feature: FeatureId, version: FeatureVersion) {
        self.state.lock().versions.insert(feature, version);
    }

    /// Set the physical address reported for flushed buffers.
    pub fn set_table_paddr(&self, paddr: Paddr) {
        self.state.lock().table_paddr = paddr;
    }

    /// Everything observed so far, in order.
    #[must_use]
    pub fn events(&self) -> Vec<MockEvent> {
        self.state.lock().events.clone()
    }

    /// Number of monitor calls observed so far.
    #[must_use]
    pub fn invoke_count(&self) -> usize {
        self.state
            .lock()
            .events
            .iter()
            .filter(|event| matches!(event, MockEvent::Invoke { .. }))
            .count()
    }

    /// Whether two `invoke` calls ever overlapped in time.
    #[must_use]
    pub fn overlap_observed(&self) -> bool {
        self.overlapped.load(Ordering::SeqCst)
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureMonitor for MockPlatform {
    fn invoke(
        &self,
        service: u32,
        command: u32,
        request: &[u8],
    ) -> Result<u32, MonitorCallError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            self.overlapped.store(true, Ordering::SeqCst);
        }
        // Widen the window so an unserialized racing caller collides.
        thread::yield_now();
        let result = {
            let mut state = self.state.lock();
            state.events.push(MockEvent::Invoke {
                service,
                command,
                request: request.to_vec(),
            });
            state.responses.pop_front().unwrap_or(Ok(0))
        };
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    fn feature_version(&self, feature: FeatureId) -> FeatureVersion {
        self.state
            .lock()
            .versions
            .get(&feature)
            .copied()
            .unwrap_or(FeatureVersion::NONE)
    }
}

impl MemoryVisibility for MockPlatform {
    fn flush_range(&self, bytes: &[u8]) {
        self.state.lock().events.push(MockEvent::Flush {
            bytes: bytes.len(),
        });
    }

    fn physical_address(&self, _bytes: &[u8]) -> Paddr {
        self.state.lock().table_paddr
    }
}
