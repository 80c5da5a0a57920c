//! LUTs for 13-bit rank masks (0..8191).
//!
//! Bit `i` of a mask is rank index `i` (Two = 0 .. Ace = 12).
//!
//! - HIBIT13[mask]        -> highest set rank index (0..12) or -1
//! - STRAIGHT_TOP13[mask] -> poker value (5..=14) of the top card of a straight
//!                           made of exactly the ranks in `mask`, or 0.
//!                           The wheel A2345 tops out at 5.

pub const MASK13: u16 = (1u16 << 13) - 1;

const N: usize = 1 << 13;
const WHEEL_MASK: u16 = (1u16 << 12) | (1u16 << 0) | (1u16 << 1) | (1u16 << 2) | (1u16 << 3);

const fn popcount_u16(mut x: u16) -> u8 {
    let mut c: u8 = 0;
    while x != 0 {
        c += (x & 1) as u8;
        x >>= 1;
    }
    c
}

const fn hibit_index_u16(x: u16) -> i8 {
    let mut i: i8 = 12;
    while i >= 0 {
        if (x & (1u16 << (i as u16))) != 0 {
            return i;
        }
        i -= 1;
    }
    -1
}

/// Five consecutive ranks and nothing else. Unlike a 7-card scan this only
/// accepts masks with exactly five bits, since it scores a single 5-card hand.
const fn straight_top_u16(mask: u16) -> u8 {
    if popcount_u16(mask) != 5 {
        return 0;
    }
    if mask == WHEEL_MASK {
        return 5;
    }
    let mut s: u16 = 0;
    while s <= 8 {
        if mask == 0x1F << s {
            // index of the top bit is s + 4, value is index + 2
            return (s + 6) as u8;
        }
        s += 1;
    }
    0
}

const fn build_hibit13() -> [i8; N] {
    let mut arr = [0i8; N];
    let mut i: usize = 0;
    while i < N {
        arr[i] = hibit_index_u16(i as u16);
        i += 1;
    }
    arr
}

const fn build_straight_top13() -> [u8; N] {
    let mut arr = [0u8; N];
    let mut i: usize = 0;
    while i < N {
        arr[i] = straight_top_u16(i as u16);
        i += 1;
    }
    arr
}

pub const HIBIT13: [i8; N] = build_hibit13();
pub const STRAIGHT_TOP13: [u8; N] = build_straight_top13();

#[inline(always)]
pub fn hibit13(mask: u16) -> i8 {
    HIBIT13[(mask & MASK13) as usize]
}

#[inline(always)]
pub fn straight_top13(mask: u16) -> u8 {
    STRAIGHT_TOP13[(mask & MASK13) as usize]
}

/// Rank indices of a mask, highest first.
#[derive(Clone, Copy, Debug)]
pub struct Descending(u16);

impl Descending {
    #[inline(always)]
    pub fn new(mask: u16) -> Self {
        Self(mask & MASK13)
    }
}

impl Iterator for Descending {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<u8> {
        let hi = hibit13(self.0);
        if hi < 0 {
            return None;
        }
        self.0 &= !(1u16 << (hi as u16));
        Some(hi as u8)
    }
}
