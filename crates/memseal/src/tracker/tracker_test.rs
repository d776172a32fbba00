// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for protection-state bookkeeping.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::ProtectionTracker;
use memseal_abi::Pfn;

#[test]
fn pages_start_unsecured() {
    let tracker = ProtectionTracker::new();

    assert!(!tracker.is_secured(Pfn::new(0)));
    assert!(!tracker.is_secured(Pfn::new(0x8_0000)));
    assert_eq!(tracker.secured_pages(), 0);
}

#[test]
fn marking_flags_exactly_the_given_pages() {
    let tracker = ProtectionTracker::new();

    tracker.mark_secured([Pfn::new(10), Pfn::new(11)]);

    assert!(tracker.is_secured(Pfn::new(10)));
    assert!(tracker.is_secured(Pfn::new(11)));
    assert!(!tracker.is_secured(Pfn::new(12)));
    assert_eq!(tracker.secured_pages(), 2);
}

#[test]
fn unmarking_clears_flags() {
    let tracker = ProtectionTracker::new();
    tracker.mark_secured([Pfn::new(10), Pfn::new(11)]);

    tracker.mark_unsecured([Pfn::new(10)]);

    assert!(!tracker.is_secured(Pfn::new(10)));
    assert!(tracker.is_secured(Pfn::new(11)));
    assert_eq!(tracker.secured_pages(), 1);
}

#[test]
fn remarking_is_idempotent() {
    let tracker = ProtectionTracker::new();

    tracker.mark_secured([Pfn::new(42)]);
    tracker.mark_secured([Pfn::new(42)]);

    assert!(tracker.is_secured(Pfn::new(42)));
    assert_eq!(tracker.secured_pages(), 1);
}

#[test]
fn unmarking_unknown_pages_is_harmless() {
    let tracker = ProtectionTracker::new();
    tracker.mark_secured([Pfn::new(1)]);

    tracker.mark_unsecured([Pfn::new(2), Pfn::new(3)]);

    assert!(tracker.is_secured(Pfn::new(1)));
    assert_eq!(tracker.secured_pages(), 1);
}

#[test]
fn default_tracker_is_empty() {
    let tracker = ProtectionTracker::default();

    assert_eq!(tracker.secured_pages(), 0);
}
