// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Platform abstraction traits.

use core::fmt;
use memseal_abi::{FeatureId, FeatureVersion, Paddr};

/// Raw nonzero status returned by the secure monitor for a failed call.
///
/// The trusted environment's refusal is authoritative; callers surface the
/// code verbatim and never retry on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorCallError(i32);

impl MonitorCallError {
    /// Wrap a nonzero monitor status code.
    #[inline]
    #[must_use]
    pub const fn new(status: i32) -> Self {
        Self(status)
    }

    /// The status code as the monitor returned it.
    #[inline]
    #[must_use]
    pub const fn status(self) -> i32 {
        self.0
    }
}

impl fmt::Display for MonitorCallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "secure monitor returned status {}", self.0)
    }
}

/// Synchronous call transport into the trusted environment.
///
/// An `invoke` is a blocking round trip: the calling thread is suspended
/// until the monitor returns. There is no timeout or abort path; a hung
/// monitor call hangs the caller.
pub trait SecureMonitor {
    /// Perform one call to `command` of `service`, handing over `request`
    /// byte-exact.
    ///
    /// Returns the monitor's response word on status 0, the nonzero
    /// status otherwise.
    fn invoke(
        &self,
        service: u32,
        command: u32,
        request: &[u8],
    ) -> Result<u32, MonitorCallError>;

    /// Report the version of a monitor feature.
    ///
    /// Monitors that cannot answer the query report
    /// [`FeatureVersion::NONE`].
    fn feature_version(&self, feature: FeatureId) -> FeatureVersion;
}

/// Cache maintenance across the privilege boundary.
///
/// No implicit memory barrier is assumed between the two environments:
/// buffers written here must be flushed before the monitor reads them,
/// and the monitor addresses them physically.
pub trait MemoryVisibility {
    /// Write back the caches covering `bytes` so the trusted environment
    /// observes the written data.
    fn flush_range(&self, bytes: &[u8]);

    /// Resolve `bytes` to the physical address the monitor will read.
    fn physical_address(&self, bytes: &[u8]) -> Paddr;
}

impl<T: SecureMonitor + ?Sized> SecureMonitor for &T {
    fn invoke(
        &self,
        service: u32,
        command: u32,
        request: &[u8],
    ) -> Result<u32, MonitorCallError> {
        (**self).invoke(service, command, request)
    }

    fn feature_version(&self, feature: FeatureId) -> FeatureVersion {
        (**self).feature_version(feature)
    }
}

impl<T: MemoryVisibility + ?Sized> MemoryVisibility for &T {
    fn flush_range(&self, bytes: &[u8]) {
        (**self).flush_range(bytes);
    }

    fn physical_address(&self, bytes: &[u8]) -> Paddr {
        (**self).physical_address(bytes)
    }
}
