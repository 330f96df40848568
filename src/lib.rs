#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::trivially_copy_pass_by_ref)]

#[cfg(feature = "std")]
extern crate std;

pub mod civil;
pub mod consts;
pub mod error;
pub mod gps;
pub mod gregorian;
pub mod int_kernel;
pub mod isoweek;
pub mod julian;
pub mod ntp;
pub mod timescale;
pub mod tsdecode;
pub mod tz;
pub mod weekday;

pub mod prelude;

pub use error::{Error, Outcome};
pub use weekday::Weekday;
