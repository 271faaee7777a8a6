//! Timestamp sources for the time-based and random layouts

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha12Rng;

use crate::Error;

/// Number of 100-nanosecond intervals between 1582-10-15T00:00:00Z (the Gregorian reform)
/// and the Unix epoch.
pub const GREGORIAN_OFFSET: u64 = 122_192_928_000_000_000;

/// Produces the 64-bit value written into the time fields of a UUID.
///
/// Only the low 60 bits survive in a UUID; the top nibble is overwritten by the version.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TimestampSource {
    /// 100-nanosecond intervals since the Gregorian reform, as used by version 1.
    Gregorian,

    /// The Gregorian timestamp mixed with the numeric ID of the calling principal, as used by
    /// version 2 (DCE Security).
    Dce,

    /// A 63-bit pseudo-random number used only as filler by version 4.
    Random,
}

impl TimestampSource {
    /// Returns a fresh timestamp value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Environment`] if the system clock reads earlier than the Unix epoch or,
    /// for [`TimestampSource::Dce`], if the principal ID cannot be resolved.
    pub fn produce_timestamp(&self) -> Result<u64, Error> {
        match self {
            Self::Gregorian => gregorian_ticks(),
            Self::Dce => Ok((gregorian_ticks()? ^ 0xffff_ffff) | u64::from(principal_id()?)),
            Self::Random => {
                let seed = unix_nanos()? as u64;
                Ok(ChaCha12Rng::seed_from_u64(seed).next_u64() >> 1)
            }
        }
    }

    /// Returns the UUID version this source serves.
    pub const fn version(&self) -> u8 {
        match self {
            Self::Gregorian => 1,
            Self::Dce => 2,
            Self::Random => 4,
        }
    }
}

fn unix_nanos() -> Result<u128, Error> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .map_err(|err| Error::Environment(format!("clock may have gone backwards: {err}")))
}

fn gregorian_ticks() -> Result<u64, Error> {
    Ok((unix_nanos()? / 100) as u64 + GREGORIAN_OFFSET)
}

/// Returns the real user ID of the calling process.
#[cfg(unix)]
fn principal_id() -> Result<u32, Error> {
    // getuid(2) is always successful
    Ok(unsafe { libc::getuid() })
}

#[cfg(not(unix))]
fn principal_id() -> Result<u32, Error> {
    Err(Error::Environment(
        "no numeric principal ID on this platform".to_owned(),
    ))
}
