//! Time-based UUID generator and related types.

use crate::{layout, node, timestamp::TimestampSource, Error, Uuid, Variant};

pub mod with_rand08;

/// A trait that defines the minimum random number generator interface for [`Generator`].
pub trait Rng {
    /// Fills `dest` with random data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Environment`] if no entropy is available.
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error>;
}

/// Represents a UUID generator that owns the clock sequence and node identifier shared by
/// version 1 and version 2 UUIDs.
///
/// Every time-based UUID increments the clock sequence by one (modulo 2^16), so UUIDs generated
/// within the same clock tick still differ. A generator requires exclusive access to generate
/// time-based UUIDs, and it is up to the caller to choose the scope in which it is shared. The
/// following example shares one across threads using Rust's standard synchronization
/// mechanism, which is also how the process-wide generator behind [`uuid1`](crate::uuid1) works.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use rfc4122::Generator;
/// use std::{sync, thread};
///
/// let g = sync::Arc::new(sync::Mutex::new(Generator::with_rand08(OsRng)?));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate_v1().unwrap(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// # Ok::<(), rfc4122::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Generator<R> {
    clock_seq: u16,
    node: [u8; 6],

    /// The random number generator used by the generator.
    rng: R,
}

impl<R: Rng> Generator<R> {
    /// Creates a generator instance, seeding the clock sequence from `rng` and resolving the
    /// node identifier from the host's network interfaces.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Environment`] if `rng` cannot supply entropy.
    pub fn new(mut rng: R) -> Result<Self, Error> {
        let clock_seq = seed_clock_seq(&mut rng)?;
        let node = node::resolve(&mut rng)?;
        Ok(Self::with_state(rng, clock_seq, node))
    }

    /// Creates a generator instance from an explicit clock sequence and node identifier.
    pub const fn with_state(rng: R, clock_seq: u16, node: [u8; 6]) -> Self {
        Self {
            clock_seq,
            node,
            rng,
        }
    }

    /// Returns the clock sequence value used by the latest time-based UUID.
    pub const fn clock_seq(&self) -> u16 {
        self.clock_seq
    }

    /// Returns the node identifier copied into time-based UUIDs.
    pub const fn node(&self) -> [u8; 6] {
        self.node
    }

    /// Generates a new version 1 UUID from the current Gregorian timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Environment`] if the system clock reads earlier than the Unix epoch.
    pub fn generate_v1(&mut self) -> Result<Uuid, Error> {
        self.generate_time_based(TimestampSource::Gregorian)
    }

    /// Generates a new version 2 (DCE Security) UUID from the current timestamp mixed with the
    /// user ID of the calling process.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Environment`] if the system clock reads earlier than the Unix epoch or
    /// the user ID cannot be resolved.
    pub fn generate_v2(&mut self) -> Result<Uuid, Error> {
        self.generate_time_based(TimestampSource::Dce)
    }

    fn generate_time_based(&mut self, source: TimestampSource) -> Result<Uuid, Error> {
        let timestamp = source.produce_timestamp()?;
        Ok(self.generate_time_based_core(source.version(), timestamp))
    }

    /// Generates a new time-based UUID from the `timestamp` passed.
    ///
    /// Increments the clock sequence, then lays out `timestamp`, `version`, the clock sequence,
    /// the RFC 4122 variant, and the node identifier.
    ///
    /// # Panics
    ///
    /// Panics if `version` is not 1 or 2.
    pub fn generate_time_based_core(&mut self, version: u8, timestamp: u64) -> Uuid {
        assert!(
            version == 1 || version == 2,
            "`version` must be 1 or 2 for time-based UUIDs"
        );

        let mut bytes = [0u8; 16];
        layout::put_timestamp(&mut bytes, timestamp);
        layout::set_version(&mut bytes, version);

        self.clock_seq = self.clock_seq.wrapping_add(1);
        layout::put_clock_seq(&mut bytes, self.clock_seq);
        // must come after the clock sequence, which owns the rest of byte 8
        layout::set_variant(&mut bytes, Variant::Rfc4122);

        layout::put_node(&mut bytes, &self.node);
        Uuid::from_raw(bytes)
    }

    /// Generates a new version 4 UUID utilizing the random number generator inside.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Environment`] if the random number generator cannot supply entropy.
    pub fn generate_v4(&mut self) -> Result<Uuid, Error> {
        crate::v4::generate(&mut self.rng)
    }

    /// Discards the current clock sequence and draws a new random one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Environment`] if the random number generator cannot supply entropy.
    pub fn reseed_clock_seq(&mut self) -> Result<(), Error> {
        self.clock_seq = seed_clock_seq(&mut self.rng)?;
        Ok(())
    }
}

/// Draws an initial clock sequence value.
pub fn seed_clock_seq<R: Rng>(rng: &mut R) -> Result<u16, Error> {
    let mut bytes = [0u8; 2];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(u16::from_be_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::{seed_clock_seq, with_rand08, Generator};
    use crate::Variant;
    use rand::rngs::OsRng;

    type OsGen = Generator<with_rand08::Adapter<OsRng>>;

    const N_SAMPLES: usize = 100_000;

    /// Lays out fields of prepared case
    #[test]
    fn lays_out_fields_of_prepared_case() {
        // clock sequence 42 after the increment
        let mut g: OsGen =
            Generator::with_state(with_rand08::Adapter(OsRng), 41, [1, 2, 3, 4, 5, 6]);
        let e = g.generate_time_based_core(1, 0x01e7_52a1_f3b4_958c);
        assert_eq!(e.to_string(), "f3b4958c-52a1-11e7-802a-010203040506");
        assert_eq!(g.clock_seq(), 42);
        assert_eq!(g.node(), [1, 2, 3, 4, 5, 6]);

        let e = g.generate_time_based_core(2, 0x01e7_52a1_f3b4_958c);
        assert_eq!(e.to_string(), "f3b4958c-52a1-21e7-802b-010203040506");
    }

    /// Increments clock sequence once per call and wraps around
    #[test]
    fn increments_clock_sequence_once_per_call_and_wraps_around() {
        let mut g: OsGen = Generator::with_state(with_rand08::Adapter(OsRng), 0xfffe, [0; 6]);
        let e = g.generate_time_based_core(1, 0);
        assert_eq!(g.clock_seq(), 0xffff);
        assert_eq!(e.as_bytes()[8..10], [0xbf, 0xff]);

        let e = g.generate_time_based_core(1, 0);
        assert_eq!(g.clock_seq(), 0x0000);
        assert_eq!(e.as_bytes()[8..10], [0x80, 0x00]);

        for i in 1..=10u16 {
            g.generate_v1().unwrap();
            assert_eq!(g.clock_seq(), i);
        }
        for i in 11..=20u16 {
            g.generate_v4().unwrap();
            assert_eq!(g.clock_seq(), 10, "v4 must not touch the clock sequence at {i}");
        }
    }

    /// Generates distinct version 1 UUIDs
    #[test]
    fn generates_distinct_version_1_uuids() {
        use std::collections::HashSet;
        let mut g = OsGen::with_rand08(OsRng).unwrap();
        let node = g.node();
        let mut s = HashSet::new();
        for _ in 0..N_SAMPLES {
            let e = g.generate_v1().unwrap();
            assert_eq!(e.version(), 1);
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.node(), node);
            s.insert(e);
        }
        assert_eq!(s.len(), N_SAMPLES);
    }

    /// Copies node into version 2 UUIDs
    #[cfg(unix)]
    #[test]
    fn copies_node_into_version_2_uuids() {
        let mut g = OsGen::with_rand08(OsRng).unwrap();
        for _ in 0..1_000 {
            let e = g.generate_v2().unwrap();
            assert_eq!(e.version(), 2);
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.node(), g.node());
            assert_eq!(e.clock_seq(), g.clock_seq() & 0x3fff);
        }
    }

    /// Seeds clock sequence with few repeats
    #[test]
    fn seeds_clock_sequence_with_few_repeats() {
        let mut rng = with_rand08::Adapter(OsRng);
        let mut prev = seed_clock_seq(&mut rng).unwrap();
        let mut n_repeats = 0;
        for _ in 0..N_SAMPLES {
            let curr = seed_clock_seq(&mut rng).unwrap();
            if curr == prev {
                n_repeats += 1;
            }
            prev = curr;
        }
        assert!(n_repeats <= 10, "{n_repeats} repeats");
    }

    /// Reseeds clock sequence
    #[test]
    fn reseeds_clock_sequence() {
        let mut g: OsGen = Generator::with_state(with_rand08::Adapter(OsRng), 0, [0; 6]);
        let mut n_zeros = 0;
        for _ in 0..100 {
            g.reseed_clock_seq().unwrap();
            if g.clock_seq() == 0 {
                n_zeros += 1;
            }
        }
        assert!(n_zeros < 3);
    }
}
