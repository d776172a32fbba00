// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Platform abstraction for the memory-protection pipeline.
//!
//! This module abstracts the two services the coordinator needs from its
//! embedding: the synchronous call transport into the secure monitor and
//! cache maintenance across the privilege boundary. The traits allow the
//! whole pipeline to be tested on the host system.


// Mock requires std, only available with std or test
#[cfg(any(test, feature = "std"))]
mod mock;
mod traits;

#[cfg(any(test, feature = "std"))]
pub use mock::{MockEvent, MockPlatform};
pub use traits::{MemoryVisibility, MonitorCallError, SecureMonitor};
