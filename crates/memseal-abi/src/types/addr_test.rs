// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for address and page frame types.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::addr::{Paddr, Pfn};
use crate::protocol::PAGE_SIZE;

#[test]
fn paddr_construction() {
    let addr = Paddr::new(0x8000_0000);
    assert_eq!(addr.as_u64(), 0x8000_0000);
    assert!(!addr.is_null());

    assert!(Paddr::null().is_null());
    assert_eq!(Paddr::null(), Paddr::new(0));
    assert_eq!(Paddr::default(), Paddr::null());
}

#[test]
fn paddr_offset_arithmetic() {
    let base = Paddr::new(0x8000_0000);
    assert_eq!(base.add(0x10_0000), Paddr::new(0x8010_0000));
    assert_eq!(base + 0x10_0000, Paddr::new(0x8010_0000));
    assert_eq!(base.add(0), base);
}

#[test]
fn paddr_alignment_checks() {
    let addr = Paddr::new(0x8010_0000);
    assert_eq!(addr.is_aligned(PAGE_SIZE), Some(true));
    assert_eq!(addr.is_aligned(1024 * 1024), Some(true));
    assert_eq!(Paddr::new(0x8010_0800).is_aligned(PAGE_SIZE), Some(false));

    // Zero and non-power-of-two alignments are invalid questions.
    assert_eq!(addr.is_aligned(0), None);
    assert_eq!(addr.is_aligned(3), None);
}

#[test]
fn paddr_formatting() {
    let addr = Paddr::new(0x8000_0000);
    assert_eq!(format!("{addr:?}"), "Paddr(0x80000000)");
    assert_eq!(format!("{addr}"), "0x80000000");
}

#[test]
fn paddr_from_u64() {
    let addr: Paddr = 0x4000_1000_u64.into();
    assert_eq!(addr, Paddr::new(0x4000_1000));
}

#[test]
fn pfn_containing_frame_boundaries() {
    assert_eq!(Pfn::containing(Paddr::new(0)), Pfn::new(0));
    assert_eq!(Pfn::containing(Paddr::new(0xFFF)), Pfn::new(0));
    assert_eq!(Pfn::containing(Paddr::new(0x1000)), Pfn::new(1));
    assert_eq!(Pfn::containing(Paddr::new(0x1FFF)), Pfn::new(1));
    assert_eq!(
        Pfn::containing(Paddr::new(0x8000_0000)),
        Pfn::new(0x8_0000)
    );
}

#[test]
fn pfn_base_round_trip() {
    let pfn = Pfn::new(0x8_0000);
    assert_eq!(pfn.base(), Paddr::new(0x8000_0000));
    assert_eq!(Pfn::containing(pfn.base()), pfn);
    assert_eq!(pfn.as_u64(), 0x8_0000);
}

#[test]
fn pfn_ordering_follows_addresses() {
    let low = Pfn::containing(Paddr::new(0x1000));
    let high = Pfn::containing(Paddr::new(0x2000));
    assert!(low < high);
}

#[test]
fn pfn_formatting() {
    let pfn = Pfn::new(0x80);
    assert_eq!(format!("{pfn:?}"), "Pfn(0x80)");
    assert_eq!(format!("{pfn}"), "0x80");
    assert_eq!(Pfn::from(0x80_u64), pfn);
}
