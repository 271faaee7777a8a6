//! Node identifier resolution

use crate::{generator::Rng, Error};

/// Resolves the node identifier for time-based UUIDs.
///
/// Uses the address of the first hardware network interface found. If there is none or the
/// interfaces cannot be enumerated, falls back to six random bytes with the multicast bit set,
/// which RFC 4122 reserves for node IDs that are not IEEE 802 addresses.
///
/// # Errors
///
/// Returns [`Error::Environment`] only if the fallback path cannot obtain random bytes.
pub fn resolve<R: Rng>(rng: &mut R) -> Result<[u8; 6], Error> {
    match mac_address::get_mac_address() {
        Ok(Some(address)) => {
            log::debug!("using hardware address {address} as node identifier");
            Ok(address.bytes())
        }
        Ok(None) => {
            log::debug!("no hardware address found; using random node identifier");
            random_node(rng)
        }
        Err(err) => {
            log::warn!("could not enumerate network interfaces: {err}");
            log::debug!("using random node identifier");
            random_node(rng)
        }
    }
}

/// Returns six random bytes with the multicast bit set.
pub fn random_node<R: Rng>(rng: &mut R) -> Result<[u8; 6], Error> {
    let mut node = [0u8; 6];
    rng.try_fill_bytes(&mut node)?;
    node[0] |= 0x01;
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::{random_node, resolve};
    use crate::generator::with_rand08::Adapter;
    use rand::rngs::OsRng;

    /// Resolves the same node twice
    #[test]
    fn resolves_the_same_node_twice() {
        let a = resolve(&mut Adapter(OsRng)).unwrap();
        let b = resolve(&mut Adapter(OsRng)).unwrap();
        if mac_address::get_mac_address().ok().flatten().is_some() {
            assert_eq!(a, b);
        } else {
            assert_eq!(a[0] & 0x01, 0x01);
        }
    }

    /// Sets multicast bit on random nodes
    #[test]
    fn sets_multicast_bit_on_random_nodes() {
        use std::collections::HashSet;
        let mut s = HashSet::new();
        for _ in 0..1_000 {
            let node = random_node(&mut Adapter(OsRng)).unwrap();
            assert_eq!(node[0] & 0x01, 0x01);
            s.insert(node);
        }
        assert_eq!(s.len(), 1_000);
    }
}
