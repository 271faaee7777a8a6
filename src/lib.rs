//! An implementation of RFC 4122 UUIDs: time-based (version 1), DCE Security (version 2),
//! name-based (versions 3 and 5), and random (version 4)
//!
//! ```rust
//! use rfc4122::{namespace, uuid1, uuid4, uuid5, Uuid};
//!
//! let uuid = uuid1()?;
//! println!("{}", uuid); // e.g. "1ec9414c-232a-11ed-8e91-0242ac120002"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = uuid5(&namespace::DNS, "python.org")?;
//! assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
//!
//! let uuid = uuid4()?;
//! assert_eq!(uuid.to_string().parse::<Uuid>()?, uuid);
//! # Ok::<(), rfc4122::Error>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122) and
//! [DCE 1.1: Remote Procedure Call, Appendix A](https://pubs.opengroup.org/onlinepubs/9629399/apdxa.htm).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |  ver  |       time_hi         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|  clock_seq_hi |clk_seq_low|         node (0-1)            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         node (2-5)                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 60-bit timestamp is split into `time_low`, `time_mid`, and `time_hi`. Version 1 stores
//!   the count of 100-nanosecond intervals since 00:00:00.00, 15 October 1582. Version 2 XORs the
//!   low 32 bits with ones and ORs in the user ID of the process. Version 4 fills it with random
//!   bits, and versions 3 and 5 with digest bits.
//! - The 4-bit `ver` field holds the version number from 1 to 5.
//! - The 2-bit `var` field is set at `10`.
//! - The 14-bit clock sequence is seeded randomly once per generator and incremented by one for
//!   every time-based UUID.
//! - The 48-bit `node` field holds the address of the first hardware network interface found,
//!   or a random value with the multicast bit set if there is none.
//!
//! Parsing accepts the canonical 8-4-4-4-12 form (hyphens are skipped wherever they appear, and
//! upper-case digits are allowed) and rejects any identifier whose version is not 1 through 5 or
//! whose variant is not the RFC 4122 one.
//!
//! # Crate features
//!
//! - `global_gen` (default): enables [`uuid1`] and [`uuid2`] backed by a process-wide
//!   generator. Without it, time-based UUIDs are available through [`Generator`].
//! - `serde`: implements `Serialize` and `Deserialize` for [`Uuid`].
//! - `uuid`: enables conversions between [`Uuid`] and `uuid::Uuid`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::Error;

mod id;
pub use id::{Uuid, Variant};

mod layout;

pub mod timestamp;
pub use timestamp::TimestampSource;

pub mod node;

pub mod generator;
pub use generator::Generator;

pub mod namespace;

mod name;
pub use name::{hash_based, uuid3, uuid5, HashAlgorithm};

mod v4;
pub use v4::uuid4;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{uuid1, uuid2};
