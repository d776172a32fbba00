// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for the lock-request wire format.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use zerocopy::{FromBytes, IntoBytes};

#[test]
fn protocol_constants() {
    assert_eq!(SVC_MEMORY_PROTECTION, 0x0C);
    assert_eq!(CMD_MEM_PROTECT_LOCK_V2, 0x0A);
    assert_eq!(MEM_USAGE_NONE, 0);
    assert_eq!(CHUNK_SIZE, 1024 * 1024);
    assert_eq!(PAGE_SIZE, 4096);
    assert_eq!(PAGE_SHIFT, 12);
}

#[test]
fn wire_structs_are_packed() {
    assert_eq!(core::mem::size_of::<MemChunks>(), 16);
    assert_eq!(core::mem::size_of::<LockRequest>(), 24);
    assert_eq!(core::mem::align_of::<MemChunks>(), 1);
    assert_eq!(core::mem::align_of::<LockRequest>(), 1);
}

#[test]
fn lock_request_byte_image() {
    let request = LockRequest::new(Paddr::new(0x0000_00AB_CDEF_1234), 3, true);
    let expected: [u8; 24] = [
        // chunk-list physical address
        0x34, 0x12, 0xEF, 0xCD, 0xAB, 0x00, 0x00, 0x00,
        // chunk count
        0x03, 0x00, 0x00, 0x00,
        // chunk size (1 MiB)
        0x00, 0x00, 0x10, 0x00,
        // usage tag
        0x00, 0x00, 0x00, 0x00,
        // lock flag
        0x01, 0x00, 0x00, 0x00,
    ];
    assert_eq!(request.as_bytes(), expected);
}

#[test]
fn unlock_clears_the_lock_flag() {
    let request = LockRequest::new(Paddr::new(0x8000_0000), 1, false);
    let bytes = request.as_bytes();
    assert_eq!(&bytes[20..24], &[0, 0, 0, 0]);

    let locked = LockRequest::new(Paddr::new(0x8000_0000), 1, true);
    assert_eq!(&locked.as_bytes()[20..24], &[1, 0, 0, 0]);
}

#[test]
fn usage_tag_is_always_zero() {
    let request = LockRequest::new(Paddr::new(0xFFFF_FFFF_FFFF_F000), u32::MAX, true);
    assert_eq!(&request.as_bytes()[16..20], &[0, 0, 0, 0]);
}

#[test]
fn request_fields_land_where_built() {
    let request = LockRequest::new(Paddr::new(0xDEAD_0000), 42, true);
    let chunks = request.chunks;
    let chunk_list = chunks.chunk_list;
    let chunk_count = chunks.chunk_count;
    let chunk_size = chunks.chunk_size;
    let usage = request.usage;
    let lock = request.lock;

    assert_eq!(chunk_list, Paddr::new(0xDEAD_0000));
    assert_eq!(chunk_count, 42);
    assert_eq!(u64::from(chunk_size), CHUNK_SIZE);
    assert_eq!(usage, MEM_USAGE_NONE);
    assert_eq!(lock, 1);
}

#[test]
fn read_back_from_bytes() {
    let request = LockRequest::new(Paddr::new(0x4000_0000), 7, false);
    let decoded = LockRequest::read_from_bytes(request.as_bytes()).unwrap();
    assert_eq!(decoded, request);
}

#[test]
fn truncated_request_is_rejected() {
    let request = LockRequest::new(Paddr::new(0x4000_0000), 7, true);
    let bytes = request.as_bytes();
    assert!(LockRequest::read_from_bytes(&bytes[..23]).is_err());
}
