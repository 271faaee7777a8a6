//! Well-known namespace IDs from RFC 4122 Appendix C
//!
//! The literals go through the same decoder and validation as [`str::parse`] during constant
//! evaluation, so a malformed one fails the build.

use crate::Uuid;

/// Namespace for fully-qualified domain names.
pub const DNS: Uuid = Uuid::from_literal("6ba7b810-9dad-11d1-80b4-00c04fd430c8");

/// Namespace for URLs.
pub const URL: Uuid = Uuid::from_literal("6ba7b811-9dad-11d1-80b4-00c04fd430c8");

/// Namespace for ISO object identifiers.
pub const OID: Uuid = Uuid::from_literal("6ba7b812-9dad-11d1-80b4-00c04fd430c8");

/// Namespace for X.500 distinguished names (DER or text).
pub const X500: Uuid = Uuid::from_literal("6ba7b814-9dad-11d1-80b4-00c04fd430c8");

/// Looks up a namespace by its conventional short name (`dns`, `url`, `oid`, or `x500`),
/// ignoring ASCII case.
pub fn by_name(name: &str) -> Option<Uuid> {
    [("dns", DNS), ("url", URL), ("oid", OID), ("x500", X500)]
        .into_iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, ns)| ns)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Matches parsed literals byte for byte
    #[test]
    fn matches_parsed_literals_byte_for_byte() {
        let cases = [
            (DNS, "6ba7b810-9dad-11d1-80b4-00c04fd430c8"),
            (URL, "6ba7b811-9dad-11d1-80b4-00c04fd430c8"),
            (OID, "6ba7b812-9dad-11d1-80b4-00c04fd430c8"),
            (X500, "6ba7b814-9dad-11d1-80b4-00c04fd430c8"),
        ];

        for (ns, text) in cases {
            assert_eq!(text.parse::<Uuid>().unwrap().as_bytes(), ns.as_bytes());
            assert_eq!(ns.to_string(), text);
            assert_eq!(ns.version(), 1);
        }

        assert_eq!(
            DNS.as_bytes(),
            &[
                0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4,
                0x30, 0xc8
            ]
        );
    }

    /// Looks up namespaces by short name
    #[test]
    fn looks_up_namespaces_by_short_name() {
        assert_eq!(by_name("dns"), Some(DNS));
        assert_eq!(by_name("URL"), Some(URL));
        assert_eq!(by_name("Oid"), Some(OID));
        assert_eq!(by_name("x500"), Some(X500));
        assert_eq!(by_name("x.500"), None);
        assert_eq!(by_name(""), None);
    }
}
