use std::{fmt, ops, str};

use crate::Error;

/// Represents a Universally Unique IDentifier.
///
/// Every value of this type is an RFC 4122 variant UUID whose version is between 1 and 5:
/// the constructors that accept foreign bytes or strings validate both fields.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Uuid([u8; 16]);

/// The layout family identified by the top bits of byte 8 (`clock_seq_hi_and_reserved`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// `0xx`: reserved for NCS backward compatibility.
    Ncs,
    /// `10x`: the layout specified by RFC 4122.
    Rfc4122,
    /// `110`: reserved for Microsoft backward compatibility.
    Microsoft,
    /// `111`: reserved for future definition.
    Future,
}

impl Variant {
    /// Returns the mask that keeps the bits of byte 8 this variant leaves alone, and the
    /// bits it sets.
    pub(crate) const fn mask_and_bits(self) -> (u8, u8) {
        match self {
            Self::Ncs => (0x7f, 0x00),
            Self::Rfc4122 => (0x3f, 0x80),
            Self::Microsoft => (0x1f, 0xc0),
            Self::Future => (0x1f, 0xe0),
        }
    }

    /// Decodes the variant from a `clock_seq_hi_and_reserved` octet.
    pub const fn from_octet(octet: u8) -> Self {
        match octet >> 5 {
            0b000..=0b011 => Self::Ncs,
            0b100 | 0b101 => Self::Rfc4122,
            0b110 => Self::Microsoft,
            _ => Self::Future,
        }
    }
}

impl Uuid {
    /// Wraps bytes that the caller has already stamped with a valid version and variant.
    pub(crate) const fn from_raw(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates a UUID from a string literal at compile time.
    ///
    /// Accepts the same input as [`str::parse`] does.
    ///
    /// # Panics
    ///
    /// Panics (and thus fails the build when used in a `const` item) if the literal is not a
    /// valid UUID.
    pub const fn from_literal(src: &str) -> Self {
        match decode(src.as_bytes()) {
            Some(bytes) if is_well_formed(&bytes) => Self(bytes),
            _ => panic!("invalid UUID literal"),
        }
    }

    /// Creates a UUID from a byte slice, verifying its length and structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{Error, Uuid};
    ///
    /// assert_eq!(Uuid::from_slice(&[0u8; 10]), Err(Error::Size(10)));
    /// assert_eq!(Uuid::from_slice(&[0u8; 16]), Err(Error::Format));
    /// ```
    pub fn from_slice(src: &[u8]) -> Result<Self, Error> {
        let bytes = <[u8; 16]>::try_from(src).map_err(|_| Error::Size(src.len()))?;
        Self::try_from(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the version number stored in the top nibble of byte 6.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns the variant stored in the top bits of byte 8.
    pub const fn variant(&self) -> Variant {
        Variant::from_octet(self.0[8])
    }

    /// Returns the 60-bit `timestamp` field reassembled from `time_low`, `time_mid`, and
    /// `time_hi`.
    ///
    /// The value is a count of 100-nanosecond intervals since the Gregorian reform only for
    /// version 1 UUIDs.
    pub const fn timestamp(&self) -> u64 {
        let b = &self.0;
        ((b[6] & 0x0f) as u64) << 56
            | (b[7] as u64) << 48
            | (b[4] as u64) << 40
            | (b[5] as u64) << 32
            | (b[0] as u64) << 24
            | (b[1] as u64) << 16
            | (b[2] as u64) << 8
            | b[3] as u64
    }

    /// Returns the 14-bit `clock_seq` field.
    pub const fn clock_seq(&self) -> u16 {
        ((self.0[8] & 0x3f) as u16) << 8 | self.0[9] as u16
    }

    /// Returns the 48-bit `node` field.
    pub const fn node(&self) -> [u8; 6] {
        let b = &self.0;
        [b[10], b[11], b[12], b[13], b[14], b[15]]
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let x = "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(format!("{}", y), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut pos = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[pos] = DIGITS[(e >> 4) as usize];
            buffer[pos + 1] = DIGITS[(e & 15) as usize];
            pos += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[pos] = b'-';
                pos += 1;
            }
        }
        debug_assert!(buffer.is_ascii());
        UuidStr(buffer)
    }
}

/// Decodes 32 hexadecimal digits into bytes, skipping hyphens wherever they appear.
const fn decode(src: &[u8]) -> Option<[u8; 16]> {
    let mut dst = [0u8; 16];
    let mut n_digits = 0;
    let mut i = 0;
    while i < src.len() {
        let digit = match src[i] {
            b'-' => {
                i += 1;
                continue;
            }
            c @ b'0'..=b'9' => c - b'0',
            c @ b'a'..=b'f' => c - b'a' + 10,
            c @ b'A'..=b'F' => c - b'A' + 10,
            _ => return None,
        };
        if n_digits == 32 {
            return None;
        }
        if n_digits % 2 == 0 {
            dst[n_digits / 2] = digit << 4;
        } else {
            dst[n_digits / 2] |= digit;
        }
        n_digits += 1;
        i += 1;
    }

    if n_digits == 32 {
        Some(dst)
    } else {
        None
    }
}

/// Tests whether the canonical form of the bytes would match
/// `[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}`.
const fn is_well_formed(bytes: &[u8; 16]) -> bool {
    let version = bytes[6] >> 4;
    1 <= version && version <= 5 && bytes[8] & 0xc0 == 0x80
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object from a hexadecimal string representation.
    ///
    /// Hyphens are ignored wherever they appear and upper-case digits are accepted, so the
    /// 32-digit form without hyphens parses as well as the 8-4-4-4-12 one.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let bytes = decode(src.as_bytes()).ok_or(Error::Format)?;
        Self::try_from(bytes)
    }
}

impl TryFrom<[u8; 16]> for Uuid {
    type Error = Error;

    fn try_from(src: [u8; 16]) -> Result<Self, Self::Error> {
        if is_well_formed(&src) {
            Ok(Self(src))
        } else {
            Err(Error::Format)
        }
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = Error;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl TryFrom<String> for Uuid {
    type Error = Error;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl TryFrom<u128> for Uuid {
    type Error = Error;

    fn try_from(src: u128) -> Result<Self, Self::Error> {
        Self::try_from(src.to_be_bytes())
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Concrete return type of [`Uuid::encode()`] containing the stack-allocated 8-4-4-4-12 string
/// representation.
struct UuidStr([u8; 36]);

impl ops::Deref for UuidStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        // every byte comes from the ASCII hex digit table or is a hyphen
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for UuidStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;
    use crate::Error;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl TryFrom<uuid::Uuid> for Uuid {
        type Error = Error;

        fn try_from(src: uuid::Uuid) -> Result<Self, Self::Error> {
            Self::try_from(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "an RFC 4122 UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::from_slice(value).map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_de_tokens_error, assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                (
                    "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                    &[
                        107, 167, 184, 16, 157, 173, 17, 209, 128, 180, 0, 192, 79, 212, 48, 200,
                    ],
                ),
                (
                    "886313e1-3b8a-5372-9b90-0c9aee199e5d",
                    &[
                        136, 99, 19, 225, 59, 138, 83, 114, 155, 144, 12, 154, 238, 25, 158, 93,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }

        /// Rejects malformed representations while deserializing
        #[test]
        fn rejects_malformed_representations_while_deserializing() {
            assert_de_tokens_error::<serde_test::Readable<Uuid>>(
                &[Token::String("6ba7b814-9dad-61d1-80b4-00c04fd430c8")],
                "UUID is not in the proper format",
            );
            assert_de_tokens_error::<serde_test::Compact<Uuid>>(
                &[Token::Bytes(&[0u8; 10])],
                "UUID size should be 16 bytes, got 10",
            );
        }
    }
}
