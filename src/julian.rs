//! Proleptic Julian civil calendar. Structurally mirrors [`crate::gregorian`] with simpler
//! leap-year arithmetic and a single-phase 1461-day cycle split.

use crate::civil::{days_to_month, months_to_days, CivilDate, Rdn, SDTAB};
use crate::error::Outcome;
use crate::int_kernel::{asr32, div_gm64, sub_mod7};

/// Elapsed leap days between year 0 and year `ey`: every 4th year, no centennial exception.
#[must_use]
pub const fn leap_days_in_years_jd(ey: i32) -> i32 {
    asr32(ey, 2)
}

struct YearSplit {
    years_elapsed: i32,
    doy_elapsed: u32,
    leap: bool,
}

fn days_to_years_jd(rdn: Rdn) -> YearSplit {
    // (rdn - 1 + 2) * 4 + 3 == rdn * 4 + 7
    let n = (rdn as i64) * 4 + 7;
    let split = div_gm64(n, 0xb6a0_0000, 0x66db_072f, 21);
    let qy = split.q;
    let sday = split.r;
    let leap = qy & 3 == 3;
    YearSplit {
        years_elapsed: qy as i32,
        doy_elapsed: sday >> 2,
        leap,
    }
}

/// Convert an RDN to a Julian civil date. `None` if the resulting year overflows `i16`.
#[must_use]
pub fn rdn_to_date_jd(rdn: Rdn) -> Option<CivilDate> {
    let ys = days_to_years_jd(rdn);
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

/// Convert a Julian civil date to its RDN, using the shifted (March-first) calendar.
#[must_use]
pub const fn date_to_rdn_jd(y: i16, m: i16, d: i16) -> Rdn {
    let em = months_to_days(m);
    let ey = y as i32 - 1 + em.q;
    (ey * 365 + leap_days_in_years_jd(ey) + em.r as i32 + d as i32 - 308) as Rdn
}

/// RDN of the first day (January 1) of Julian year `y`.
#[must_use]
pub const fn year_start_jd(y: i16) -> Rdn {
    let ey = y as i32 - 1;
    (ey * 365 + leap_days_in_years_jd(ey) + 1) as Rdn
}

/// Recover a full year in `[ybase, ybase+699]` from a 2-digit year, month, day and weekday. The
/// Julian century shifts the weekday by 6 days rather than 5, giving a 700-year period (the LCM
/// of 100 and 7) and a modular inverse of 1 rather than 4.
#[must_use]
pub fn rellez_jd(y: u16, m: u16, d: u16, w: u16, ybase: i16) -> Outcome<i16> {
    let mut y = y % 100;
    let w = w % 7;
    let mut d = d.wrapping_sub(1);
    if !(1..=12).contains(&m) || d > 32 {
        return Outcome::Invalid;
    }

    let mut m = m + 9;
    if m >= 12 {
        m -= 12;
    } else {
        y = y.wrapping_sub(1);
        if y > 100 {
            y = y.wrapping_add(100);
        }
    }

    if d as usize >= usize::from(SDTAB[usize::from((y + 1) & 3 == 0)][usize::from(m)]) {
        return Outcome::Invalid;
    }

    d += y + (y >> 2);
    d += (m * 83 + 16) >> 5;

    // day zero (0000-03-01 JULIAN) was a Monday (weekday 1).
    let mut c = (d as u32 + 7 + 1).wrapping_sub(w as u32) % 7;

    if m > 9 {
        y += 1;
        if y >= 100 {
            y -= 100;
            c = (c + 1) & 3;
        }
    }
    let y = y as u32 + c * 100;

    let rem = crate::int_kernel::floor_sub_div_i32(y as i32, i32::from(ybase), 700).r;
    let rem = rem as u16;
    if rem > (i16::MAX as u16).wrapping_sub(ybase as u16) {
        return Outcome::Range(i16::MIN);
    }
    Outcome::Ok(ybase + rem as i16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_over_wide_range() {
        for rdn in (-2_000_000..2_000_000i32).step_by(9173) {
            let cd = rdn_to_date_jd(rdn).expect("representable");
            assert_eq!(date_to_rdn_jd(cd.year, cd.month as i16, cd.mday as i16), rdn);
        }
    }

    #[test]
    fn calendar_reform_parity() {
        // 1582-10-15 Gregorian == 1582-10-05 Julian.
        let g = crate::gregorian::date_to_rdn_gd(1582, 10, 15);
        let j = date_to_rdn_jd(1582, 10, 5);
        assert_eq!(g, j);
        assert_eq!(g, date_to_rdn_jd(1582, 10, 4) + 1);
    }

    #[test]
    fn rellez_recovers_calendar_reform_year() {
        // 1582-10-04 (Julian, last day before the reform) was a Thursday.
        let y = rellez_jd(82, 10, 4, 4, 1500).ok().unwrap();
        assert_eq!(y, 1582);
    }
}
