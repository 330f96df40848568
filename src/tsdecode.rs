//! Decimal-fraction and ASN.1 time stamp decoding, grounded on `tsdecode.c`.
//!
//! The reference falls back to the platform's `mktime()` when a timestamp carries no explicit
//! zone offset. There is no such fallback in `no_std`; callers of [`dec_asn1_utc_time23`] and
//! [`dec_asn1_gen_time24`] instead pass an optional [`ConvCtx`] to resolve zone-less time stamps
//! through this crate's own [`crate::tz`] engine.

use crate::civil::{is_leap_year_gd, MDTAB};
use crate::error::{Error, Outcome};
use crate::gregorian::date_to_rdn_gd;
use crate::int_kernel::{div_gm, floor_sub_div_i32, DivU32};
use crate::tz::{get_info_local2utc, ConvCtx, Hint};

const POW10_TAB: [u32; 9] = [
    100_000_000, 10_000_000, 1_000_000, 100_000, 10_000, 1_000, 100, 10, 1,
];
const POW10_9: u32 = 1_000_000_000;

struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            buf: s.as_bytes(),
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos == self.buf.len()
    }

    fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }
}

fn pnum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0u32, |acc, &b| acc * 10 + u32::from(b - b'0'))
}

fn parse_dot(cur: &mut Cursor<'_>) -> bool {
    if cur.peek() == Some(b'.') {
        cur.pos += 1;
        true
    } else {
        false
    }
}

/// Parse a run of fractional-second digits (without the leading `.`) into nanoseconds,
/// round-to-even on a tie past the 10th digit.
#[must_use]
fn dec_nano_raw(cur: &mut Cursor<'_>) -> u32 {
    let mut nsec = 0u32;
    let mut rnd = 0u32;
    let mut nch = 0u32;

    while let Some(b) = cur.peek() {
        if !b.is_ascii_digit() {
            break;
        }
        cur.pos += 1;
        nch += 1;
        let xch = u32::from(b - b'0');
        if nch < 10 {
            nsec = nsec * 10 + xch;
        } else if nch == 10 {
            rnd = xch;
        } else if rnd == 5 {
            rnd += u32::from(xch != 0);
        }
    }

    if nch > 0 && nch < 9 {
        nsec *= POW10_TAB[(nch - 1) as usize];
    } else {
        if rnd == 5 {
            rnd += nsec & 1;
        }
        if rnd > 5 {
            nsec += 1;
        }
    }
    nsec
}

/// Parse `.<digits>` into nanoseconds, or `0` if there is no fractional part at all.
#[must_use]
fn dec_nano(cur: &mut Cursor<'_>) -> u32 {
    if parse_dot(cur) {
        dec_nano_raw(cur)
    } else {
        0
    }
}

// Normalized divisor and Granlund-Möller inverse for division by 10^8.
const FRAC_D: u32 = 0xbebc_2000;
const FRAC_V: u32 = 0x5798_ee23;

/// Parse a run of decimal digits (without the leading `.`) as a `Q0.32` binary fraction,
/// processing 8 decimal digits per Granlund-Möller division step instead of one at a time.
#[must_use]
fn dec_frac_raw(cur: &mut Cursor<'_>) -> DivU32 {
    let start = cur.pos;
    let mut lnz = cur.pos;
    while let Some(b) = cur.peek() {
        if !b.is_ascii_digit() {
            break;
        }
        cur.pos += 1;
        if b != b'0' {
            lnz = cur.pos;
        }
    }

    let mut drop = (lnz - start) > 24;
    let end = if drop { start + 24 } else { lnz };

    let mut accu = DivU32 { q: 0, r: 0 };
    let mut xrem = 0u32;
    let mut pos = end;
    while pos != start {
        let nch = ((pos - start - 1) & 7) + 1;
        pos -= nch;
        let digits = &cur.buf[pos..pos + nch];

        accu.r = pnum(digits) * POW10_TAB[nch];
        accu.r = (accu.r << 5) | (accu.q >> 27);
        accu.q = (accu.q << 5) | (xrem >> 27);
        drop = drop || (xrem << 5) != 0;
        accu = div_gm(accu.r, accu.q, FRAC_D, FRAC_V);
        xrem = accu.r;
    }

    accu.r = accu.q;
    let round_up = xrem > (FRAC_D >> 1) || (xrem == (FRAC_D >> 1) && ((accu.r & 1) != 0 || drop));
    accu.q = 0;
    if round_up {
        accu.r += 1;
        accu.q = u32::from(accu.r == 0);
    }
    accu
}

/// Parse `.<digits>` as a `Q0.32` binary fraction, or `0` if there is no fractional part.
#[must_use]
fn dec_frac(cur: &mut Cursor<'_>) -> DivU32 {
    if parse_dot(cur) {
        dec_frac_raw(cur)
    } else {
        DivU32 { q: 0, r: 0 }
    }
}

/// Parse up to `ndig` decimal digits into pairs packed two-per-byte (a BCD-ish digit group, as
/// ASN.1 time strings encode `YYMMDDhhmm(ss)`). Returns the number of individual digits consumed.
fn parse_digit_groups(cur: &mut Cursor<'_>, ndig: usize, out: &mut [u8]) -> usize {
    let mut cdi = 0usize;
    while cdi < ndig {
        match cur.peek() {
            Some(b) if b.is_ascii_digit() => {
                cur.pos += 1;
                let xch = u32::from(b - b'0');
                if cdi & 1 == 1 {
                    out[cdi >> 1] = (u32::from(out[cdi >> 1]) * 10 + xch) as u8;
                } else {
                    out[cdi >> 1] = xch as u8;
                }
                cdi += 1;
            }
            _ => break,
        }
    }
    cdi
}

/// Parse a `Z` or `[+-]hhmm` zone offset, in minutes east of UTC.
fn parse_tz_offset(cur: &mut Cursor<'_>) -> Option<i32> {
    match cur.peek() {
        Some(b'Z') => {
            cur.pos += 1;
            Some(0)
        }
        Some(sign @ (b'+' | b'-')) => {
            cur.pos += 1;
            let mut tzo = [0u8; 2];
            if parse_digit_groups(cur, 4, &mut tzo) != 4 || tzo[0] > 23 || tzo[1] > 59 {
                return None;
            }
            let minutes = i32::from(tzo[0]) * 60 + i32::from(tzo[1]);
            Some(if sign == b'-' { -minutes } else { minutes })
        }
        _ => None,
    }
}

fn validate(year: i16, adg: &[u8; 5]) -> bool {
    let (mon, day) = (adg[0], adg[1]);
    if mon < 1 || mon > 12 {
        return false;
    }
    let dim = MDTAB[usize::from(is_leap_year_gd(year))][usize::from(mon - 1)];
    if day < 1 || day > dim {
        return false;
    }
    adg[2] <= 23 && adg[3] <= 59 && adg[4] <= 60
}

/// A decoded, UTC-normalized ASN.1 time stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asn1Time {
    /// Seconds since the UNIX epoch.
    pub unix_secs: i64,
    /// Nanoseconds, normalized into `0..1_000_000_000`.
    pub nanos: u32,
}

/// The broken-down fields of an ASN.1 time stamp, validated but not assembled into a UTC instant.
///
/// Returned by [`dec_asn1_utc_time23_fields`]/[`dec_asn1_gen_time24_fields`] for callers with no
/// [`PosixZone`](crate::tz::PosixZone) at hand to resolve a zone-less stamp's local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asn1Fields {
    pub year: i16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub min: u8,
    pub sec: u8,
    /// Nanoseconds, normalized into `0..1_000_000_000`.
    pub nanos: u32,
    /// Zone offset in minutes east of UTC, if the string carried one explicitly.
    pub tzo_minutes: Option<i32>,
}

// Only ever called with an already-validated `fields` (see `dec_asn1_*_fields`).
fn assemble(fields: Asn1Fields, zone: Option<&mut ConvCtx<'_>>) -> Outcome<Asn1Time> {
    let rdn_off =
        i64::from(date_to_rdn_gd(fields.year, i16::from(fields.month), i16::from(fields.day)) - crate::consts::RDN_UNIX);
    let secs_of_day = (i64::from(fields.hour) * 60 + i64::from(fields.min)) * 60 + i64::from(fields.sec);

    let mut unix_secs = match fields.tzo_minutes {
        Some(tzo) => rdn_off * 86400 + secs_of_day - i64::from(tzo) * 60,
        None => {
            let local_secs = rdn_off * 86400 + secs_of_day;
            let Some(zone) = zone else {
                return Outcome::Invalid;
            };
            let Some(info) = get_info_local2utc(zone, local_secs, Hint::None) else {
                return Outcome::Invalid;
            };
            local_secs - i64::from(info.offs)
        }
    };

    let mut nsec = fields.nanos;
    while nsec >= POW10_9 {
        unix_secs += 1;
        nsec -= POW10_9;
    }
    Outcome::Ok(Asn1Time {
        unix_secs,
        nanos: nsec,
    })
}

/// Parse an ASN.1 `UTCTime` (tag 23): `YYMMDDhhmm[ss][.f][Z|+-hhmm]`, without assembling a UTC
/// instant. `ybase` anchors the 2-digit year into the 100-year window `[ybase, ybase+99]` closest
/// to `ybase` (e.g. `1950` recovers `1950..=2049`).
#[must_use]
pub fn dec_asn1_utc_time23_fields(s: &str, ybase: i16) -> Outcome<Asn1Fields> {
    let mut cur = Cursor::new(s);
    let mut adg = [0u8; 6];
    let cdi = parse_digit_groups(&mut cur, 12, &mut adg);

    if cdi != 10 && cdi != 12 {
        return Outcome::Invalid;
    }
    if cdi == 10 {
        adg[5] = 0;
    }
    let frc = dec_nano(&mut cur);
    let y = ybase + floor_sub_div_i32(i32::from(adg[0]), i32::from(ybase), 100).r as i16;

    if !validate(y, &[adg[1], adg[2], adg[3], adg[4], adg[5]]) {
        return Outcome::Invalid;
    }
    let tzo_minutes = if cur.at_end() {
        None
    } else {
        match parse_tz_offset(&mut cur) {
            Some(tzo) => Some(tzo),
            None => return Outcome::Invalid,
        }
    };
    Outcome::Ok(Asn1Fields {
        year: y,
        month: adg[1],
        day: adg[2],
        hour: adg[3],
        min: adg[4],
        sec: adg[5],
        nanos: frc,
        tzo_minutes,
    })
}

/// Parse an ASN.1 `GeneralizedTime` (tag 24): `YYYYMMDDhhmm[ss][.f][Z|+-hhmm]`, without assembling
/// a UTC instant.
#[must_use]
pub fn dec_asn1_gen_time24_fields(s: &str) -> Outcome<Asn1Fields> {
    let mut cur = Cursor::new(s);
    let mut adg = [0u8; 7];
    let cdi = parse_digit_groups(&mut cur, 14, &mut adg);

    if cdi != 10 && cdi != 12 && cdi != 14 {
        return Outcome::Invalid;
    }
    if cdi == 10 {
        adg[5] = 0;
    }
    if cdi <= 12 {
        adg[6] = 0;
    }
    let frc = dec_nano(&mut cur);
    let y = i16::from(adg[0]) * 100 + i16::from(adg[1]);

    if !validate(y, &[adg[2], adg[3], adg[4], adg[5], adg[6]]) {
        return Outcome::Invalid;
    }
    let tzo_minutes = if cur.at_end() {
        None
    } else {
        match parse_tz_offset(&mut cur) {
            Some(tzo) => Some(tzo),
            None => return Outcome::Invalid,
        }
    };
    Outcome::Ok(Asn1Fields {
        year: y,
        month: adg[2],
        day: adg[3],
        hour: adg[4],
        min: adg[5],
        sec: adg[6],
        nanos: frc,
        tzo_minutes,
    })
}

/// Decode an ASN.1 `UTCTime` (tag 23) into a UTC-normalized instant.
///
/// `local_zone` resolves timestamps with no explicit zone offset; without one, a zone-less input
/// is reported [`Outcome::Invalid`]. Callers with no zone available can fall back to
/// [`dec_asn1_utc_time23_fields`] and work with the raw broken-down fields instead.
#[must_use]
pub fn dec_asn1_utc_time23(s: &str, ybase: i16, local_zone: Option<&mut ConvCtx<'_>>) -> Outcome<Asn1Time> {
    match dec_asn1_utc_time23_fields(s, ybase) {
        Outcome::Ok(fields) => assemble(fields, local_zone),
        Outcome::Range(_) | Outcome::Invalid => Outcome::Invalid,
    }
}

/// Decode an ASN.1 `GeneralizedTime` (tag 24) into a UTC-normalized instant. See
/// [`dec_asn1_utc_time23`] for `local_zone`'s role.
#[must_use]
pub fn dec_asn1_gen_time24(s: &str, local_zone: Option<&mut ConvCtx<'_>>) -> Outcome<Asn1Time> {
    match dec_asn1_gen_time24_fields(s) {
        Outcome::Ok(fields) => assemble(fields, local_zone),
        Outcome::Range(_) | Outcome::Invalid => Outcome::Invalid,
    }
}
