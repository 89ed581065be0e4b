//! A deterministic structural hasher.
//!
//! [`HashCodeHasher`] folds every primitive written into it with
//! `state = state * 31 + word` over wrapping 32-bit arithmetic, starting from
//! zero. A key made of a single 32-bit integer therefore hashes to itself,
//! which keeps the bucket placement of small integer keys predictable: with
//! the default 16 buckets the keys `1, 2, 3` land in buckets `1, 2, 3`.
//!
//! The hasher is unseeded. Use [`RandomState`](crate::RandomState) when keys
//! come from an untrusted source.

use core::hash::BuildHasher;
use core::hash::Hasher;

const MULTIPLIER: u32 = 31;

/// Unseeded hasher producing 32-bit structural hash codes.
///
/// # Examples
///
/// ```rust
/// use core::hash::BuildHasher;
///
/// use chain_hash::HashCodeBuilder;
///
/// assert_eq!(HashCodeBuilder.hash_one(7i32), 7);
/// assert_eq!(HashCodeBuilder.hash_one(-1i32), 0xFFFF_FFFF);
/// assert_eq!(HashCodeBuilder.hash_one((1u32, 2u32)), 31 + 2);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct HashCodeHasher {
    state: u32,
}

impl HashCodeHasher {
    #[inline(always)]
    fn fold(&mut self, word: u32) {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(word);
    }
}

impl Hasher for HashCodeHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.state as u64
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.fold(byte as u32);
        }
    }

    #[inline]
    fn write_u8(&mut self, i: u8) {
        self.fold(i as u32);
    }

    #[inline]
    fn write_u16(&mut self, i: u16) {
        self.fold(i as u32);
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.fold(i);
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.fold((i ^ (i >> 32)) as u32);
    }

    #[inline]
    fn write_u128(&mut self, i: u128) {
        self.write_u64(i as u64);
        self.write_u64((i >> 64) as u64);
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.write_u64(i as u64);
    }

    // Narrow signed integers are sign-extended so that `-1i8` and `-1i32`
    // share a hash code.
    #[inline]
    fn write_i8(&mut self, i: i8) {
        self.fold(i as i32 as u32);
    }

    #[inline]
    fn write_i16(&mut self, i: i16) {
        self.fold(i as i32 as u32);
    }

    #[inline]
    fn write_i32(&mut self, i: i32) {
        self.fold(i as u32);
    }

    #[inline]
    fn write_i64(&mut self, i: i64) {
        self.write_u64(i as u64);
    }

    #[inline]
    fn write_isize(&mut self, i: isize) {
        self.write_i64(i as i64);
    }
}

/// [`BuildHasher`] for [`HashCodeHasher`]; the default hasher of
/// [`HashMap`](crate::HashMap).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HashCodeBuilder;

impl BuildHasher for HashCodeBuilder {
    type Hasher = HashCodeHasher;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        HashCodeHasher::default()
    }
}
