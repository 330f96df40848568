//! Proleptic Gregorian civil calendar: day kernel `dateToRdnGD`/`rdnToDateGD` family.

use crate::civil::{days_to_month, months_to_days, CivilDate, Rdn, SDTAB};
use crate::error::Outcome;
use crate::int_kernel::{asr32, div_gm64, sub_mod7};

/// Elapsed leap days between year 0 and year `ey` (floor convention, works for negative `ey`).
#[must_use]
pub const fn leap_days_in_years_gd(ey: i32) -> i32 {
    asr32(ey, 2) - ey.div_euclid(100) + ey.div_euclid(400)
}

struct YearSplit {
    years_elapsed: i32,
    doy_elapsed: u32,
    leap: bool,
}

/// Split an RDN into elapsed years since the epoch and elapsed day-of-year (0-based), plus the
/// leap-year flag for that year.
fn days_to_years_gd(rdn: Rdn) -> YearSplit {
    // (rdn - 1) * 4 + 3 == rdn * 4 - 1
    let n = (rdn as i64) * 4 - 1;
    let split = div_gm64(n, 0x8eac_4000, 0xcb58_35e6, 14);
    let qc = split.q;
    let mut sday = (split.r) | 3;
    let qy = sday / 1461;
    sday -= qy * 1461;

    let leap = (qy & 3 == 3) && (qy <= (96 + (qc & 3) as u32));
    YearSplit {
        years_elapsed: (qc * 100) as i32 + qy as i32,
        doy_elapsed: sday >> 2,
        leap,
    }
}

/// Convert an RDN to a Gregorian civil date. `None` if the resulting year overflows `i16`.
#[must_use]
pub fn rdn_to_date_gd(rdn: Rdn) -> Option<CivilDate> {
    let ys = days_to_years_gd(rdn);
    let year = ys.years_elapsed + 1;
    if !(i32::from(i16::MIN)..=i32::from(i16::MAX)).contains(&year) {
        return None;
    }
    let md = days_to_month(ys.doy_elapsed as u16, ys.leap);
    Some(CivilDate {
        year: year as i16,
        doy: (ys.doy_elapsed + 1) as u16,
        dow: (sub_mod7(rdn, 1) + 1) as u8,
        leap: ys.leap,
        month: (md.q + 1) as u8,
        mday: (md.r + 1) as u8,
    })
}

/// Convert a Gregorian civil date to its RDN, using the shifted (March-first) calendar.
#[must_use]
pub const fn date_to_rdn_gd(y: i16, m: i16, d: i16) -> Rdn {
    let em = months_to_days(m);
    let ey = y as i32 - 1 + em.q;
    (ey * 365 + leap_days_in_years_gd(ey) + em.r as i32 + d as i32 - 306) as Rdn
}

/// RDN of the first day (January 1) of Gregorian year `y`.
#[must_use]
pub const fn year_start_gd(y: i16) -> Rdn {
    let ey = y as i32 - 1;
    (ey * 365 + leap_days_in_years_gd(ey) + 1) as Rdn
}

/// Recover a full year in `[ybase, ybase+399]` from a 2-digit year, month, day and weekday,
/// inverting Zeller's congruence. `w` is `1..=7`, Monday is 1.
#[must_use]
pub fn rellez_gd(y: u16, m: u16, d: u16, w: u16, ybase: i16) -> Outcome<i16> {
    let mut y = y % 100;
    let mut d = d.wrapping_sub(1);
    let w = w % 7;
    if !(1..=12).contains(&m) || d > 32 {
        return Outcome::Invalid;
    }

    let mut m = m + 9;
    if m >= 12 {
        m -= 12;
    } else {
        // mirrors the C `--y > 100u` wraparound test on uint16_t
        y = y.wrapping_sub(1);
        if y > 100 {
            y = y.wrapping_add(100);
        }
    }

    if y == 99 && m == 11 && d == 28 {
        if w != 2 {
            // ucal_wdTUE % 7 == 2
            return Outcome::Invalid;
        }
    } else if d as usize >= usize::from(SDTAB[usize::from((y + 1) & 3 == 0)][usize::from(m)]) {
        return Outcome::Invalid;
    }

    d += y + (y >> 2);
    d += (m * 83 + 16) >> 5;

    // day zero (0000-03-01) was a Wednesday (weekday 3 in the 1..=7/Monday=1 scheme).
    let c_full = (d as u32 + 7 + 3).wrapping_sub(w as u32).wrapping_mul(0x12493) >> 14;
    let mut c = (c_full & 7) as u16;
    if c >= 4 {
        return Outcome::Invalid;
    }

    if m > 9 {
        y += 1;
        if y >= 100 {
            y -= 100;
            c = (c + 1) & 3;
        }
    }
    y += c * 100;

    let rem = crate::int_kernel::floor_sub_div_i32(y as i32, i32::from(ybase), 400).r;
    let rem = rem as u16;
    if rem > (i16::MAX as u16).wrapping_sub(ybase as u16) {
        return Outcome::Range(i16::MIN);
    }
    Outcome::Ok(ybase + rem as i16)
}
