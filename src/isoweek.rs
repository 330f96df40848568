//! ISO-8601 week calendar.

use crate::int_kernel::{asr32, div_gm64, floor_div_i32_u32, floor_sub_div_i32, DivI32};
use crate::civil::{Rdn, WeekDate};

const WEEKS_IN_CENTURY_TAB: [u16; 4] = [157, 449, 597, 889];
const SPLIT_ERA_TAB: [u16; 4] = [85, 130, 17, 62];

/// Number of complete ISO weeks elapsed between the week-year epoch and the start of week-year
/// `years + 1`.
#[must_use]
pub const fn weeks_in_years_wd(years: i32) -> i32 {
    let s100 = floor_div_i32_u32(years, 100);
    let ci_full = s100.q * 3 + 1;
    let cs = asr32(ci_full, 2);
    let ci = (ci_full & 3) as usize;

    let cw = (s100.r * 53431 + WEEKS_IN_CENTURY_TAB[ci] as u32) / 1024;
    s100.q * 5217 + cs + cw as i32
}

/// RDN of the Monday that begins ISO week 1 of year `y`.
#[must_use]
pub const fn year_start_wd(y: i16) -> Rdn {
    weeks_in_years_wd(y as i32 - 1) * 7 + 1
}

/// Split an elapsed-weeks count into elapsed ISO years (`.q`) and the remaining elapsed weeks in
/// the partial year (`.r`).
#[must_use]
pub const fn split_era_weeks_wd(weeks: i32) -> DivI32 {
    // (weeks * 4 + 2) / 20871, floor division.
    let n = (weeks as i64) * 4 + 2;
    let split = div_gm64(n, 0xa30e_0000, 0x91ed_2f29, 17);
    let cc = split.q as i32;
    let ci = (split.q & 3) as usize;

    let sw = (split.r / 4) * 157 + SPLIT_ERA_TAB[ci] as u32;
    let cy = sw / 8192;
    let sw = sw % 8192;

    DivI32 {
        q: 100 * cc + cy as i32,
        r: sw / 157,
    }
}

/// Convert an ISO week-date to its RDN.
#[must_use]
pub const fn date_to_rdn_wd(y: i16, w: i16, d: i16) -> Rdn {
    (weeks_in_years_wd(y as i32 - 1) + w as i32 - 1) * 7 + d as i32
}

/// Convert an RDN to an ISO week-date. `None` if the resulting year overflows `i16`.
#[must_use]
pub fn rdn_to_date_wd(rdn: Rdn) -> Option<WeekDate> {
    let qr = floor_sub_div_i32(rdn, 1, 7);
    let dow = (qr.r + 1) as u8;

    let qr = split_era_weeks_wd(qr.q);
    let week = (qr.r + 1) as u8;

    if qr.q >= i32::from(i16::MAX) || qr.q < i32::from(i16::MIN) - 1 {
        return None;
    }
    Some(WeekDate {
        year: (qr.q + 1) as i16,
        week,
        dow,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gregorian::rdn_to_date_gd;

    #[test]
    fn round_trips_over_wide_range() {
        for rdn in (-2_000_000..2_000_000i32).step_by(9173) {
            let wd = rdn_to_date_wd(rdn).expect("representable");
            assert_eq!(date_to_rdn_wd(wd.year, wd.week as i16, wd.dow as i16), rdn);
        }
    }

    #[test]
    fn weekday_matches_gregorian_weekday() {
        for rdn in (-500_000..500_000i32).step_by(1327) {
            let wd = rdn_to_date_wd(rdn).unwrap();
            let gd = rdn_to_date_gd(rdn).unwrap();
            assert_eq!(wd.dow, gd.dow);
        }
    }

    #[test]
    fn weeks_per_year_is_52_or_53() {
        for y in -1000..1000i16 {
            let weeks = weeks_in_years_wd(y as i32) - weeks_in_years_wd(y as i32 - 1);
            assert!(weeks == 52 || weeks == 53);
        }
    }
}
