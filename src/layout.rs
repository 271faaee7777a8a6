//! Field writers for the RFC 4122 byte layout
//!
//! All multi-byte fields are stored in network (big-endian) order. The version and variant
//! stampers update only the bits they own, so the order of calls matters: the variant must be
//! stamped after the clock sequence has been written to byte 8.

use crate::Variant;

/// Writes a 60-bit timestamp into `time_low` (bytes 0-3), `time_mid` (4-5) and `time_hi`
/// (6-7). The top nibble of byte 6 is left for [`set_version`] to overwrite.
pub(crate) fn put_timestamp(bytes: &mut [u8; 16], timestamp: u64) {
    bytes[0..4].copy_from_slice(&(timestamp as u32).to_be_bytes());
    bytes[4..6].copy_from_slice(&((timestamp >> 32) as u16).to_be_bytes());
    bytes[6..8].copy_from_slice(&((timestamp >> 48) as u16).to_be_bytes());
}

/// Writes the clock sequence into bytes 8-9.
pub(crate) fn put_clock_seq(bytes: &mut [u8; 16], clock_seq: u16) {
    bytes[8..10].copy_from_slice(&clock_seq.to_be_bytes());
}

/// Writes the node identifier into bytes 10-15.
pub(crate) fn put_node(bytes: &mut [u8; 16], node: &[u8; 6]) {
    bytes[10..].copy_from_slice(node);
}

/// Stores `version` in the top nibble of byte 6, keeping the bottom nibble.
pub(crate) fn set_version(bytes: &mut [u8; 16], version: u8) {
    debug_assert!(version < 16, "version must fit in a nibble");
    bytes[6] = (bytes[6] & 0x0f) | (version << 4);
}

/// Stamps `variant` over the top bits of byte 8, keeping the clock sequence bits below them.
pub(crate) fn set_variant(bytes: &mut [u8; 16], variant: Variant) {
    let (mask, bits) = variant.mask_and_bits();
    bytes[8] = (bytes[8] & mask) | bits;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Spreads timestamp over the time fields
    #[test]
    fn spreads_timestamp_over_the_time_fields() {
        let mut bytes = [0u8; 16];
        put_timestamp(&mut bytes, u64::MAX);
        assert_eq!(bytes[..8], [0xff; 8]);
        assert_eq!(bytes[8..], [0x00; 8]);

        put_timestamp(&mut bytes, 0x0123_4567_89ab_cdef);
        assert_eq!(bytes[..8], [0x89, 0xab, 0xcd, 0xef, 0x45, 0x67, 0x01, 0x23]);
    }

    /// Sets version nibble without touching the rest
    #[test]
    fn sets_version_nibble_without_touching_the_rest() {
        for prior in 0..=255u8 {
            for version in 1..=5u8 {
                let mut bytes = [prior; 16];
                set_version(&mut bytes, version);
                assert_eq!(bytes[6] >> 4, version);
                assert_eq!(bytes[6] & 0x0f, prior & 0x0f);
                assert!(bytes.iter().enumerate().all(|(i, e)| i == 6 || *e == prior));
            }
        }
    }

    /// Stamps RFC 4122 variant over every prior octet
    #[test]
    fn stamps_rfc4122_variant_over_every_prior_octet() {
        for prior in 0..=255u8 {
            let mut bytes = [0u8; 16];
            bytes[8] = prior;
            set_variant(&mut bytes, Variant::Rfc4122);
            assert_eq!(bytes[8] >> 6, 0b10, "prior {prior:#04x}");
            assert_eq!(bytes[8] & 0x3f, prior & 0x3f);
            assert!((0x80..=0xbf).contains(&bytes[8]));
            assert_eq!(Variant::from_octet(bytes[8]), Variant::Rfc4122);
        }
    }

    /// Stamps other variants over every prior octet
    #[test]
    fn stamps_other_variants_over_every_prior_octet() {
        for prior in 0..=255u8 {
            for (variant, kept) in [
                (Variant::Ncs, 0x7f),
                (Variant::Microsoft, 0x1f),
                (Variant::Future, 0x1f),
            ] {
                let mut bytes = [0u8; 16];
                bytes[8] = prior;
                set_variant(&mut bytes, variant);
                assert_eq!(bytes[8] & kept, prior & kept);
                assert_eq!(Variant::from_octet(bytes[8]), variant);
            }
        }

        let mut bytes = [0u8; 16];
        set_variant(&mut bytes, Variant::Future);
        assert_eq!(bytes[8], 0xe0);
    }

    /// Keeps clock sequence low bits under the variant
    #[test]
    fn keeps_clock_sequence_low_bits_under_the_variant() {
        let mut bytes = [0u8; 16];
        put_clock_seq(&mut bytes, 0xffff);
        set_variant(&mut bytes, Variant::Rfc4122);
        assert_eq!(bytes[8..10], [0xbf, 0xff]);

        put_clock_seq(&mut bytes, 0x1234);
        set_variant(&mut bytes, Variant::Rfc4122);
        assert_eq!(bytes[8..10], [0x92, 0x34]);

        put_node(&mut bytes, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(bytes[10..], [1, 2, 3, 4, 5, 6]);
    }
}
