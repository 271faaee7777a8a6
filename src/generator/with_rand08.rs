//! Integration with `rand` (v0.8) crate.

use super::{Generator, Rng};
use crate::Error;
use rand::RngCore;

/// An adapter that implements [`Rng`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> Rng for Adapter<T> {
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0
            .try_fill_bytes(dest)
            .map_err(|err| Error::Environment(format!("no entropy source: {err}")))
    }
}

impl<T: RngCore> Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Generator;
    ///
    /// let mut g = Generator::with_rand08(rand::thread_rng())?;
    /// println!("{}", g.generate_v1()?);
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    pub fn with_rand08(rng: T) -> Result<Self, Error> {
        Self::new(Adapter(rng))
    }
}
