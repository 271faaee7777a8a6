//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::{Error, Uuid};
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
///
/// The lock is held by the caller for the whole generation, so time-based UUIDs observe a strict
/// total order of clock sequence values across threads.
fn lock_global_gen() -> Result<sync::MutexGuard<'static, GlobalGenInner>, Error> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    let g = match G.get() {
        Some(g) => g,
        None => {
            let inner = GlobalGenInner::new()?;
            G.get_or_init(|| sync::Mutex::new(inner))
        }
    };
    // the generator holds no invariant that a panicking holder could have broken
    Ok(g.lock().unwrap_or_else(sync::PoisonError::into_inner))
}

/// Generates a UUIDv1 object.
///
/// This function employs a global generator whose clock sequence is randomly seeded once and
/// incremented by every call to this function or [`uuid2`]. On Unix, this function reseeds the
/// generator when the process ID changes (i.e., upon process forks) to prevent collisions across
/// processes.
///
/// # Errors
///
/// Returns [`Error::Environment`] if the generator cannot be seeded or the system clock reads
/// earlier than the Unix epoch.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid1()?;
/// println!("{}", uuid); // e.g., "1ec9414c-232a-11ed-8e91-0242ac120002"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = rfc4122::uuid1()?.to_string();
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn uuid1() -> Result<Uuid, Error> {
    lock_global_gen()?.get_mut()?.generate_v1()
}

/// Generates a UUIDv2 (DCE Security) object.
///
/// Shares the global generator with [`uuid1`].
///
/// # Errors
///
/// Returns [`Error::Environment`] if the generator cannot be seeded, the system clock reads
/// earlier than the Unix epoch, or the user ID of the process cannot be resolved.
///
/// # Examples
///
/// ```rust
/// # #[cfg(unix)]
/// # {
/// let uuid = rfc4122::uuid2()?;
/// assert_eq!(uuid.version(), 2);
/// # }
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn uuid2() -> Result<Uuid, Error> {
    lock_global_gen()?.get_mut()?.generate_v2()
}

mod inner {
    use rand::{
        rngs::{adapter::ReseedingRng, OsRng},
        RngCore, SeedableRng,
    };
    use rand_chacha::ChaCha12Core;

    use crate::{
        generator::{Generator, Rng},
        Error,
    };

    /// The type alias for the random number generator of the global generator.
    ///
    /// The global generator currently employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to
    /// emulate the strategy used by [`rand::rngs::ThreadRng`].
    #[derive(Debug)]
    pub struct GlobalGenRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl GlobalGenRng {
        fn new() -> Result<Self, Error> {
            let core = ChaCha12Core::from_rng(OsRng)
                .map_err(|err| Error::Environment(format!("no entropy source: {err}")))?;
            Ok(Self(ReseedingRng::new(core, 1024 * 64, OsRng)))
        }
    }

    impl Rng for GlobalGenRng {
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
            self.0
                .try_fill_bytes(dest)
                .map_err(|err| Error::Environment(format!("no entropy source: {err}")))
        }
    }

    /// A thin wrapper to reseed the clock sequence when the process ID changes (i.e., upon Unix
    /// forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: Generator<GlobalGenRng>,
    }

    impl GlobalGenInner {
        pub fn new() -> Result<Self, Error> {
            let generator = Generator::new(GlobalGenRng::new()?)?;
            log::debug!(
                "initialized global UUID generator (node {:02x?})",
                generator.node()
            );
            Ok(Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator,
            })
        }

        /// Returns a mutable reference to the inner [`Generator`] instance, reseeding the random
        /// number generator and clock sequence on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> Result<&mut Generator<GlobalGenRng>, Error> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                log::debug!("process ID changed; reseeding global UUID generator");
                *self = Self::new()?;
            }
            Ok(&mut self.generator)
        }
    }
}
