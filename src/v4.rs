//! UUIDv4-related functionality

use crate::{
    generator::{with_rand08::Adapter, Rng},
    layout,
    timestamp::TimestampSource,
    Error, Uuid, Variant,
};
use rand::rngs::OsRng;

/// Generates a UUIDv4 object.
///
/// This function reads the operating system's entropy source directly and shares no state with
/// other callers, so it never contends with concurrent generation.
///
/// # Errors
///
/// Returns [`Error::Environment`] if the operating system cannot supply entropy.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid4()?;
/// println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn uuid4() -> Result<Uuid, Error> {
    generate(&mut Adapter(OsRng))
}

/// Lays out a version 4 UUID: random filler from [`TimestampSource::Random`] in the time fields,
/// then independent random bytes from `rng` in the clock sequence and node fields.
pub(crate) fn generate<R: Rng>(rng: &mut R) -> Result<Uuid, Error> {
    let mut bytes = [0u8; 16];
    layout::put_timestamp(&mut bytes, TimestampSource::Random.produce_timestamp()?);
    layout::set_version(&mut bytes, 4);
    rng.try_fill_bytes(&mut bytes[8..])?;
    layout::set_variant(&mut bytes, Variant::Rfc4122);
    Ok(Uuid::from_raw(bytes))
}
