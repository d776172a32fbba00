// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Address and region types exchanged with the secure monitor.

#[cfg(test)]
mod addr_test;


mod addr;
mod region;

pub use addr::{Paddr, Pfn};
pub use region::MemoryRegion;
