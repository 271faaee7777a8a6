//! Name-based UUIDs (versions 3 and 5)

use sha1::{Digest, Sha1};

use crate::{layout, Error, Uuid, Variant};

/// The digest algorithm a name-based UUID is derived with.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum HashAlgorithm {
    /// MD5, producing version 3 UUIDs.
    Md5,
    /// SHA-1, producing version 5 UUIDs. Only the first 16 of the 20 digest bytes are kept.
    Sha1,
}

impl HashAlgorithm {
    /// Returns the UUID version this algorithm produces.
    pub const fn version(self) -> u8 {
        match self {
            Self::Md5 => 3,
            Self::Sha1 => 5,
        }
    }

    fn digest(self, namespace: &Uuid, name: &[u8]) -> Vec<u8> {
        match self {
            Self::Md5 => md5::compute([namespace.as_bytes().as_slice(), name].concat())
                .0
                .to_vec(),
            Self::Sha1 => Sha1::new()
                .chain_update(namespace.as_bytes())
                .chain_update(name)
                .finalize()
                .to_vec(),
        }
    }
}

/// Derives a UUID from `namespace` and `name` using `algorithm`.
///
/// The result is a pure function of the three arguments.
///
/// # Errors
///
/// Returns [`Error::Digest`] if the digest is shorter than 16 bytes, which the supported
/// algorithms never are.
pub fn hash_based(namespace: &Uuid, name: &str, algorithm: HashAlgorithm) -> Result<Uuid, Error> {
    let digest = algorithm.digest(namespace, name.as_bytes());
    let mut bytes = digest
        .get(..16)
        .and_then(|head| <[u8; 16]>::try_from(head).ok())
        .ok_or(Error::Digest(digest.len()))?;
    layout::set_version(&mut bytes, algorithm.version());
    layout::set_variant(&mut bytes, Variant::Rfc4122);
    Ok(Uuid::from_raw(bytes))
}

/// Generates a UUIDv3 object from a namespace and a name.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{namespace, uuid3};
///
/// let uuid = uuid3(&namespace::DNS, "python.org")?;
/// assert_eq!(uuid.to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn uuid3(namespace: &Uuid, name: &str) -> Result<Uuid, Error> {
    hash_based(namespace, name, HashAlgorithm::Md5)
}

/// Generates a UUIDv5 object from a namespace and a name.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{namespace, uuid5};
///
/// let uuid = uuid5(&namespace::DNS, "python.org")?;
/// assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn uuid5(namespace: &Uuid, name: &str) -> Result<Uuid, Error> {
    hash_based(namespace, name, HashAlgorithm::Sha1)
}
