use thiserror::Error;

/// Errors returned by UUID parsing and generation.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum Error {
    /// A byte sequence did not hold exactly 16 bytes.
    #[error("UUID size should be 16 bytes, got {0}")]
    Size(usize),

    /// The input is not a well-formed RFC 4122 UUID of version 1 through 5.
    #[error("UUID is not in the proper format")]
    Format,

    /// A digest returned fewer bytes than a UUID needs.
    #[error("digest produced {0} bytes, need at least 16")]
    Digest(usize),

    /// The runtime environment could not supply entropy, a sane clock, or a principal ID.
    #[error("environment failure: {0}")]
    Environment(String),
}
