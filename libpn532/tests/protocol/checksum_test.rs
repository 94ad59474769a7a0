use libpn532::protocol::checksum::{dcs, lcs};
use proptest::prelude::*;

#[test]
fn known_values() {
    assert_eq!(lcs(0x02), 0xFE);
    assert_eq!(lcs(0x00), 0x00);
    // D4 02 -> 0x100 - 0xD6
    assert_eq!(dcs(&[0xD4, 0x02]), 0x2A);
}

proptest! {
    #[test]
    fn lcs_cancels_length(len in any::<u8>()) {
        prop_assert_eq!(len.wrapping_add(lcs(len)), 0);
    }

    #[test]
    fn dcs_cancels_sum(data in prop::collection::vec(any::<u8>(), 0..300)) {
        let sum = data.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
        prop_assert_eq!(sum.wrapping_add(dcs(&data)), 0);
    }
}
