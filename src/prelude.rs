//! Reexports for common types and entry points.

#[doc(no_inline)]
pub use crate::error::{Error, Outcome};
#[doc(no_inline)]
pub use crate::weekday::Weekday;

#[doc(no_inline)]
pub use crate::civil::{CivilDate, CivilTime, GpsRaw, Rdn, WeekDate};

#[doc(no_inline)]
pub use crate::gregorian::{date_to_rdn_gd, rdn_to_date_gd};
#[doc(no_inline)]
pub use crate::julian::{date_to_rdn_jd, rdn_to_date_jd};
#[doc(no_inline)]
pub use crate::isoweek::{date_to_rdn_wd, rdn_to_date_wd};

#[doc(no_inline)]
pub use crate::tz::{ConvCtx, ConvInfo, Hint, PosixZone};
#[doc(no_inline)]
pub use crate::tsdecode::{Asn1Fields, Asn1Time};
