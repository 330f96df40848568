//! Second/day splitting and merging, and the POSIX-epoch-to-RDN bridge.

use crate::civil::{CivilTime, Rdn};
use crate::consts::RDN_UNIX;
use crate::int_kernel::{div_gm64, floor_sub_div_i32, DivI64};

/// Floor-divide a POSIX-epoch second count by 86400: full days elapsed and seconds into the day.
#[must_use]
pub const fn time_to_days(tt: i64) -> DivI64 {
    div_gm64(tt, 0xa8c0_0000, 0x845c_8a0c, 15)
}

/// Split a POSIX-epoch second count into an RDN and seconds-since-midnight.
#[must_use]
pub const fn time_to_rdn(tt: i64) -> DivI64 {
    let qr = time_to_days(tt);
    DivI64 {
        q: qr.q + RDN_UNIX as i64,
        r: qr.r,
    }
}

/// Add `ofs` to a time-of-day `dt` (both in seconds) under floor-mod-86400, returning the
/// broken-down clock and the number of excess days.
#[must_use]
pub const fn day_time_split(dt: i32, ofs: i32) -> (CivilTime, i32) {
    let qr = floor_sub_div_i32(dt, -ofs, 86400);
    let m = qr.r / 60;
    let h = m / 60;
    let time = CivilTime {
        sec: (qr.r - m * 60) as i8,
        min: (m - h * 60) as i8,
        hour: h as i8,
    };
    (time, qr.q)
}

/// Merge hour/minute/second (each possibly off-scale) into accumulated seconds.
#[must_use]
pub const fn day_time_merge(h: i16, m: i16, s: i16) -> i32 {
    (h as i32 * 60 + m as i32) * 60 + s as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_to_days_matches_euclid() {
        for tt in [0i64, 86399, 86400, -1, -86400, 1_753_000_000, -1_753_000_000] {
            let qr = time_to_days(tt);
            assert_eq!(qr.q, tt.div_euclid(86400));
            assert_eq!(qr.r, tt.rem_euclid(86400) as u32);
        }
    }

    #[test]
    fn split_merge_round_trip() {
        let (t, excess) = day_time_split(3723, 0);
        assert_eq!(excess, 0);
        assert_eq!((t.hour, t.min, t.sec), (1, 2, 3));
        assert_eq!(day_time_merge(t.hour as i16, t.min as i16, t.sec as i16), 3723);
    }

    #[test]
    fn split_handles_negative_offset_crossing_midnight() {
        let (t, excess) = day_time_split(0, -3600);
        assert_eq!(excess, -1);
        assert_eq!((t.hour, t.min, t.sec), (23, 0, 0));
    }
}
