//! GPS time scale: 1024-week era unfolding and raw week/time-of-week packing.

use crate::civil::{GpsRaw, Rdn};
use crate::consts::{PHI_GPS, RDN_GPS, SYS_PHI_GPS};
use crate::error::Outcome;
use crate::gregorian::{date_to_rdn_gd, rellez_gd};
use crate::int_kernel::{div_gm64, floor_div_i32_u32, floor_sub_div_i32};

const WEEK_SECS: i64 = 604_800;
const FULL_CYCLE_SECS: i64 = WEEK_SECS * 1024;
const FULL_CYCLE_DAYS: i32 = 1024 * 7;

/// Map a POSIX-epoch second count to a raw GPS week/time-of-week pair, applying `ls` leap
/// seconds (GPS time runs ahead of UTC by the accumulated leap-second count).
#[must_use]
pub const fn gps_map_time(tt: i64, ls: i16) -> GpsRaw {
    let secs_in_cycle = div_gm64(tt, 0x93a8_0000, 0xbbd7_7933, 2).r as i32;
    let secs = secs_in_cycle - SYS_PHI_GPS as i32 + ls as i32;
    let qr = floor_div_i32_u32(secs, WEEK_SECS as u32);
    GpsRaw {
        week: (qr.q & 1023) as u16,
        tow: qr.r,
    }
}

/// Unfold a raw GPS week/time-of-week into an RDN using day-based arithmetic, mapped into the
/// 1024-week era starting at `base_rdn` (clamped forward to the GPS epoch if earlier).
#[must_use]
pub const fn gps_map_raw1(w: u16, t: u32, ls: i16, base_rdn: Rdn) -> Outcome<Rdn> {
    let dt = floor_sub_div_i32(t as i32, ls as i32, 86400);
    let days = ((w & 1023) as i32) * 7 + dt.q + PHI_GPS;

    let base_rdn = if base_rdn < RDN_GPS { RDN_GPS } else { base_rdn };
    let rem = floor_sub_div_i32(days + 1, base_rdn, FULL_CYCLE_DAYS as u32).r;

    if rem > (i32::MAX as u32).wrapping_sub(base_rdn as u32) {
        Outcome::Range(i32::MAX)
    } else {
        Outcome::Ok(base_rdn + rem as i32)
    }
}

/// Unfold a raw GPS week/time-of-week into a POSIX-epoch second count using second-based
/// arithmetic, mapped into the 1024-week era closest to (but not exceeding a full cycle away
/// from) `base`.
#[must_use]
pub const fn gps_map_raw2(w: u16, t: u32, ls: i16, base: i64) -> i64 {
    let secs = ((w & 1023) as i64) * WEEK_SECS + t as i64 - ls as i64 + SYS_PHI_GPS;
    let tbase = if base < SYS_PHI_GPS { SYS_PHI_GPS } else { base };

    let r = secs - tbase;
    let folded = div_gm64(r, 0x93a8_0000, 0xbbd7_7933, 2).r as i64;
    tbase + folded
}

/// Remap an RDN into the 1024-week era starting at `base_rdn`.
#[must_use]
pub const fn gps_remap_rdn(rdn: Rdn, base_rdn: Rdn) -> Outcome<Rdn> {
    let qr = floor_sub_div_i32(rdn, base_rdn, FULL_CYCLE_DAYS as u32);
    if (i32::MAX as u32).wrapping_sub(base_rdn as u32) < qr.r {
        Outcome::Range(i32::MAX)
    } else {
        Outcome::Ok(base_rdn + qr.r as i32)
    }
}

/// Recover a full year for a GPS-era date fragment whose year may have been given as a 2-digit
/// value. Years `>= 1980` pass through unchanged.
#[must_use]
pub fn gps_full_year(y: i16, m: i8, d: i8, wd: Option<u8>) -> i16 {
    if y >= 1980 {
        return y;
    }
    let y2 = floor_div_i32_u32(y as i32, 100).r as u16;
    if let Some(wd) = wd {
        if let Outcome::Ok(z) = rellez_gd(y2, m as u16, d as u16, wd as u16, 1980) {
            if z >= 1980 {
                return z;
            }
        }
    }
    if y2 >= 80 {
        y2 as i16 + 1900
    } else {
        y2 as i16 + 2000
    }
}

/// Compose [`gps_full_year`], [`crate::gregorian::date_to_rdn_gd`] and [`gps_remap_rdn`] into the
/// natural "I have a date of uncertain century, give me the RDN in the right GPS era" entry
/// point. Present in the reference implementation (`ucal_GpsDateUnfold`) though dropped by the
/// distillation this crate was otherwise built from.
#[must_use]
pub fn gps_date_unfold(y: i16, m: i8, d: i8, wd: Option<u8>, base_day: Rdn) -> Outcome<Rdn> {
    let year = gps_full_year(y, m, d, wd);
    gps_remap_rdn(date_to_rdn_gd(year, m as i16, d as i16), base_day)
}
