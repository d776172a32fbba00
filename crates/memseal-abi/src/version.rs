// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Feature identifiers and the monitor's version encoding.
//!
//! The monitor reports per-feature protocol versions as a single 32-bit
//! value, `major:10 | minor:10 | patch:12` from the most significant bit
//! down. Field widths are chosen so that numeric order equals semantic
//! order, which keeps capability checks a plain integer comparison.

use core::fmt;

/// Identifies a monitor feature in version queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeatureId(u32);

impl FeatureId {
    /// The memory-protection (content protection) feature.
    pub const MEMORY_PROTECTION: Self = Self(12);

    /// Create a feature identifier from its raw value.
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw identifier.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// An encoded feature version as the monitor reports it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeatureVersion(u32);

impl FeatureVersion {
    /// The version a monitor reports when it cannot answer the query.
    ///
    /// Encoded as 0.0.0, it compares below every real version, so
    /// capability checks reject it without a special case.
    pub const NONE: Self = Self(0);

    /// Encode a version from its fields.
    ///
    /// Fields are masked to their widths (major and minor to 10 bits,
    /// patch to 12), matching what the monitor itself does.
    #[inline]
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self(((major & 0x3FF) << 22) | ((minor & 0x3FF) << 12) | (patch & 0xFFF))
    }

    /// Wrap a raw encoded value as reported by the monitor.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw encoded value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Major field.
    #[inline]
    #[must_use]
    pub const fn major(self) -> u32 {
        (self.0 >> 22) & 0x3FF
    }

    /// Minor field.
    #[inline]
    #[must_use]
    pub const fn minor(self) -> u32 {
        (self.0 >> 12) & 0x3FF
    }

    /// Patch field.
    #[inline]
    #[must_use]
    pub const fn patch(self) -> u32 {
        self.0 & 0xFFF
    }
}

impl fmt::Debug for FeatureVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FeatureVersion({}.{}.{})",
            self.major(),
            self.minor(),
            self.patch()
        )
    }
}

impl fmt::Display for FeatureVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.patch())
    }
}

/// Oldest version whose memory-protection service understands per-chunk
/// dynamic locking.
pub const MIN_DYNAMIC_LOCKING: FeatureVersion = FeatureVersion::new(1, 1, 0);

// =============================================================================
// Tests
// =============================================================================
