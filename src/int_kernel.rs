//! Extended-precision integer primitives used by every layer above this one.
//!
//! Nothing in this module calls upward into the calendar or time-scale code; it only ever deals
//! in bare integers. The arithmetic-shift and floor-division helpers are implemented with the
//! mask trick rather than relying on the platform's native shift/division, because that's the
//! one thing this module is actually tested against (see the unit tests below).

/// Quotient/remainder pair, remainder always in `[0, d)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DivResult<Q> {
    pub q: Q,
    pub r: u32,
}

pub type DivI32 = DivResult<i32>;
pub type DivU32 = DivResult<u32>;
pub type DivI64 = DivResult<i64>;

/// Sign-preserving (arithmetic) right shift of a 32-bit signed integer, `s` in `0..32`.
#[must_use]
pub const fn asr32(v: i32, s: u32) -> i32 {
    let m = (0u32).wrapping_sub((v < 0) as u32);
    let u = m ^ ((m ^ (v as u32)) >> s);
    u as i32
}

/// Sign-preserving (arithmetic) right shift of a 64-bit signed integer, `s` in `0..64`.
#[must_use]
pub const fn asr64(v: i64, s: u32) -> i64 {
    let m = (0u64).wrapping_sub((v < 0) as u64);
    let u = m ^ ((m ^ (v as u64)) >> s);
    u as i64
}

/// Floor-divide a signed dividend by an unsigned divisor: `q = floor(n / d)`, `r = n - q*d`.
#[must_use]
pub const fn floor_div_i32_u32(n: i32, d: u32) -> DivI32 {
    let m = (0u32).wrapping_sub((n < 0) as u32);
    let q = m ^ ((m ^ (n as u32)) / d);
    DivResult {
        q: q as i32,
        r: (n as u32).wrapping_sub(q.wrapping_mul(d)),
    }
}

/// Floor-divide `(a - b)` by `d`, computed entirely in wrapping unsigned arithmetic.
#[must_use]
pub const fn floor_sub_div_i32(a: i32, b: i32, d: u32) -> DivI32 {
    let m = (0u32).wrapping_sub((a < b) as u32);
    let n = (a as u32).wrapping_sub(b as u32);
    let q = m ^ ((m ^ n) / d);
    DivResult {
        q: q as i32,
        r: n.wrapping_sub(q.wrapping_mul(d)),
    }
}

/// Mathematical (floor) `x mod 7`, result in `0..7`.
#[must_use]
pub const fn mod7(x: i32) -> i32 {
    let xred = (7u32 << 17)
        .wrapping_add((x as u32) & 0x7FFF)
        .wrapping_add(asr32(x, 15) as u32);
    (xred % 7) as i32
}

/// `(a + b) mod 7`, result in `0..7`.
#[must_use]
pub const fn add_mod7(a: i32, b: i32) -> i32 {
    let xred = (7u32 << 17)
        .wrapping_add((a as u32) & 0x7FFF)
        .wrapping_add(asr32(a, 15) as u32)
        .wrapping_add((b as u32) & 0x7FFF)
        .wrapping_add(asr32(b, 15) as u32);
    (xred % 7) as i32
}

/// `(a - b) mod 7`, result in `0..7`.
#[must_use]
pub const fn sub_mod7(a: i32, b: i32) -> i32 {
    let xred = (7u32 << 17)
        .wrapping_add((a as u32) & 0x7FFF)
        .wrapping_add(asr32(a, 15) as u32)
        .wrapping_sub((b as u32) & 0x7FFF)
        .wrapping_sub(asr32(b, 15) as u32);
    (xred % 7) as i32
}

/// Single Granlund-Möller division core step.
///
/// Preconditions: `d` is normalized (`2^31 <= d < 2^32`), `v = floor((2^64-1)/d) - 2^32`, and
/// `u1 < d` so the quotient fits in one limb. Returns `q, r` with
/// `u1*2^32 + u0 == q*d + r` and `0 <= r < d`.
#[must_use]
pub const fn div_gm(u1: u32, u0: u32, d: u32, v: u32) -> DivU32 {
    let accu = (u1 as u64) * (v as u64) + (u0 as u64);
    let mut q0 = accu as u32;
    let mut q1 = ((accu >> 32) as u32).wrapping_add(u1).wrapping_add(1);

    let mut r = u0.wrapping_sub(q1.wrapping_mul(d));
    if r > q0 {
        q1 = q1.wrapping_sub(1);
        r = r.wrapping_add(d);
    }
    if r >= d {
        q1 = q1.wrapping_add(1);
        r = r.wrapping_sub(d);
    }
    q0 = r;
    let _ = q0;
    DivResult { q: q1, r }
}

/// Chained Granlund-Möller division of a signed 64-bit dividend by an unsigned 32-bit divisor.
///
/// `d` and `v` must already be the normalized divisor/inverse pair for the *caller's* original
/// (un-normalized) divisor, and `s` the shift needed to normalize it, exactly as harvested from
/// each call site's precomputed constants.
#[must_use]
pub const fn div_gm64(u: i64, d: u32, v: u32, s: u32) -> DivI64 {
    let m = (0u32).wrapping_sub((u < 0) as u32);
    let ut = u as u64;
    let utl = m ^ ((ut << s) as u32);
    let utm = m ^ ((ut >> (32 - s)) as u32);
    let uth = if s != 0 {
        (m >> (32 - s)) ^ ((ut >> (64 - s)) as u32)
    } else {
        0
    };

    let step1 = div_gm(uth, utm, d, v);
    let step2 = div_gm(step1.r, utl, d, v);

    let mut ut2 = (m ^ step1.q) as u64;
    ut2 <<= 32;
    ut2 |= (m ^ step2.q) as u64;

    let q = if m != 0 { -((!ut2) as i64) - 1 } else { ut2 as i64 };
    let r = ((m ^ step2.r).wrapping_add(m & d)) >> s;
    DivResult { q, r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asr32_matches_native_shift() {
        for &v in &[0i32, 1, -1, i32::MIN, i32::MAX, -12345, 12345] {
            for s in 0u32..32 {
                assert_eq!(asr32(v, s), v >> s, "v={v} s={s}");
            }
        }
    }

    #[test]
    fn asr64_matches_native_shift() {
        for &v in &[0i64, 1, -1, i64::MIN, i64::MAX, -123456789, 123456789] {
            for s in 0u32..64 {
                assert_eq!(asr64(v, s), v >> s, "v={v} s={s}");
            }
        }
    }

    #[test]
    fn floor_div_matches_euclid_floor() {
        for n in -200..200i32 {
            for d in [1u32, 2, 3, 7, 86400] {
                let got = floor_div_i32_u32(n, d);
                let q = n.div_euclid(d as i32);
                let r = n.rem_euclid(d as i32);
                assert_eq!(got.q, q, "n={n} d={d}");
                assert_eq!(got.r, r as u32, "n={n} d={d}");
            }
        }
    }

    #[test]
    fn mod7_matches_reference() {
        for x in -1000..1000i32 {
            let want = x.rem_euclid(7);
            assert_eq!(mod7(x), want, "x={x}");
        }
    }

    #[test]
    fn add_sub_mod7_consistent() {
        for a in -50..50i32 {
            for b in -50..50i32 {
                assert_eq!(add_mod7(a, b), (a + b).rem_euclid(7));
                assert_eq!(sub_mod7(a, b), (a - b).rem_euclid(7));
            }
        }
    }

    #[test]
    fn div_gm_matches_u128_reference() {
        let d = 0x8eac4000u32;
        let v = 0xcb5835e6u32;
        for &(u1, u0) in &[
            (0u32, 0u32),
            (0, 0xFFFF_FFFF),
            (d - 1, 0),
            (d - 1, 0xFFFF_FFFF),
            (12345, 0x1000_0000),
        ] {
            let got = div_gm(u1, u0, d, v);
            let num = ((u1 as u128) << 32) | (u0 as u128);
            let want_q = num / (d as u128);
            let want_r = num % (d as u128);
            assert_eq!(got.q as u128, want_q, "u1={u1} u0={u0}");
            assert_eq!(got.r as u128, want_r, "u1={u1} u0={u0}");
        }
    }

    #[test]
    fn div_gm64_matches_native_division_for_days() {
        // Same constants as the day-kernel's seconds-per-day split (divisor 86400, s=15).
        let d = 0xa8c0_0000u32;
        let v = 0x845c_8a0cu32;
        for &u in &[0i64, 86399, 86400, -1, -86400, -86401, 1_700_000_000, -1_700_000_000] {
            let got = div_gm64(u, d, v, 15);
            assert_eq!(got.q, u.div_euclid(86400), "u={u}");
            assert_eq!(got.r, u.rem_euclid(86400) as u32, "u={u}");
        }
    }
}
