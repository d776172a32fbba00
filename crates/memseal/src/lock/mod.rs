// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Lock/unlock transitions against the secure monitor.
//!
//! A transition takes an ordered region list, rewrites each region as a
//! transient chunk table, and walks the list under the global
//! serialization lock: flush table, call monitor, record page state.



mod chunks;
mod coordinator;
mod types;

pub use chunks::ChunkTable;
pub use coordinator::LockCoordinator;
pub use types::TransitionError;
