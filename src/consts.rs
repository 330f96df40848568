//! Epoch and phase constants shared by the time-scale modules.

use crate::civil::Rdn;

/// RDN of 1900-01-01, the NTP epoch.
pub const RDN_NTP: Rdn = 693_596;
/// RDN of 1970-01-01, the POSIX/UNIX epoch.
pub const RDN_UNIX: Rdn = 719_163;
/// RDN of 1980-01-06, the GPS epoch.
pub const RDN_GPS: Rdn = 722_820;
/// Days from RDN 0 to the GPS epoch.
pub const PHI_GPS: i32 = 6019;
/// Seconds from 1900-01-01 to 1970-01-01, modulo 2^32.
pub const SYS_PHI_NTP: u32 = 0x7c55_8180;
/// Seconds from 1970-01-01 to 1980-01-06.
pub const SYS_PHI_GPS: i64 = 0x12d5_3d80;
