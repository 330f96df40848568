//! NTP time scale: periodic expansion of the 32-bit, 1900-epoch second count.

use crate::consts::SYS_PHI_NTP;

/// Fold a POSIX-epoch second count into the 32-bit NTP second count (mod 2^32, 1900-01-01 epoch).
#[must_use]
pub const fn time_to_ntp(t: i64) -> u32 {
    (t as u64).wrapping_sub(SYS_PHI_NTP as u64) as u32
}

/// Unfold a 32-bit NTP second count around `pivot` (a POSIX-epoch second count), returning the
/// POSIX-epoch second count in `[pivot - 2^31, pivot + 2^31)` that folds to `secs`.
///
/// The result never precedes the POSIX epoch: a `pivot` below `2^31` is treated as if it were
/// `0`, mirroring the reference implementation's refusal to unfold into negative UNIX time.
#[must_use]
pub const fn ntp_to_time(secs: u32, pivot: i64) -> i64 {
    let tbase: i64 = if pivot > i32::MAX as i64 {
        pivot - 0x8000_0000
    } else {
        0
    };
    let folded = (secs as u64).wrapping_add(SYS_PHI_NTP as u64);
    let diff = folded.wrapping_sub(tbase as u64) as u32;
    tbase + diff as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_at_epoch() {
        assert_eq!(ntp_to_time(time_to_ntp(0), 0), 0);
    }

    #[test]
    fn round_trip_with_far_pivot() {
        let pivot = 1_724_000_000i64; // 2024-08-18ish
        let folded = time_to_ntp(pivot);
        assert_eq!(ntp_to_time(folded, pivot), pivot);
    }

    #[test]
    fn never_precedes_unix_epoch_for_small_pivot() {
        for secs in [0u32, 1, u32::MAX] {
            assert!(ntp_to_time(secs, 0) >= 0);
        }
    }
}
