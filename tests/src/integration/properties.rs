//! Quantified invariants checked across a handful of differently
//! shaped blocks rather than one fixed scenario.

use plasma_mst::{verify_inclusion, PlasmaMerkleSumTree};
use plasma_types::{Address, Transaction, Transfer, UInt, MAX_COIN_ID, MIN_COIN_ID};

fn transfer(n: u8, start: u128, end: u128) -> Transfer {
    Transfer::new(
        Address::new([n; 20]),
        Address::new([n.wrapping_add(1); 20]),
        UInt::new(0).unwrap(),
        UInt::new(start).unwrap(),
        UInt::new(end).unwrap(),
    )
    .unwrap()
}

fn tx(n: u8, transfer: Transfer) -> Transaction {
    Transaction::new(UInt::new(n as u128).unwrap(), vec![transfer])
}

fn block(ranges: &[(u128, u128)]) -> Vec<Transaction> {
    ranges
        .iter()
        .enumerate()
        .map(|(i, &(start, end))| tx(i as u8, transfer(i as u8, start, end)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_leaf_verifies_against_its_own_proof() {
        for ranges in [
            vec![(0u128, 10u128)],
            vec![(0, 10), (20, 30)],
            vec![(0, 10), (20, 30), (40, 50)],
            vec![(0, 10), (20, 30), (40, 50), (60, 70), (80, 90)],
        ] {
            let txs = block(&ranges);
            let tree = PlasmaMerkleSumTree::new(&txs).unwrap();
            let root = tree.root();
            for i in 0..txs.len() {
                let proof = tree.inclusion_proof(i).unwrap();
                assert!(verify_inclusion(i, &txs[i], 0, &proof, &root), "leaf {i} in block of {} failed", txs.len());
            }
        }
    }

    #[test]
    fn leaf_sums_cover_the_whole_coin_space() {
        let txs = block(&[(0, 10)]);
        let tree = PlasmaMerkleSumTree::new(&txs).unwrap();
        assert_eq!(tree.root().sum, MAX_COIN_ID);

        let txs = block(&[(0, 10), (20, 30), (40, 50)]);
        let tree = PlasmaMerkleSumTree::new(&txs).unwrap();
        assert_eq!(tree.root().sum, MAX_COIN_ID - MIN_COIN_ID);
    }

    #[test]
    fn parent_sums_and_digests_are_consistent_at_every_internal_node() {
        let l = plasma_merkle::Node::new([0x11; 32], 7);
        let r = plasma_merkle::Node::new([0x22; 32], 9);
        let p = plasma_merkle::parent(&l, &r).unwrap();
        assert_eq!(p.sum, 16);
        assert_eq!(
            p.data,
            plasma_crypto::keccak256_concat(&[&l.to_bytes(), &r.to_bytes()])
        );
    }

    #[test]
    fn transaction_round_trips_through_encode_decode() {
        let txs = block(&[(0, 10), (20, 30)]);
        for t in &txs {
            let encoded = plasma_codec::encode_transaction(t);
            let decoded = plasma_codec::decode_transaction(encoded.as_slice()).unwrap();
            assert_eq!(decoded.block.value(), t.block.value());
            assert_eq!(decoded.transfers.len(), t.transfers.len());
            for (a, b) in decoded.transfers.iter().zip(&t.transfers) {
                assert_eq!(a.sender, b.sender);
                assert_eq!(a.recipient, b.recipient);
                assert_eq!(a.start.value(), b.start.value());
                assert_eq!(a.end.value(), b.end.value());
            }
        }
    }

    #[test]
    fn transaction_round_trips_through_0x_hex() {
        let t = &block(&[(0, 10), (20, 30)])[0];
        let encoded = plasma_codec::encode_transaction(t);
        let hex_str = format!("0x{}", hex::encode(&encoded));
        let decoded = plasma_codec::decode_transaction(hex_str.as_str()).unwrap();
        assert_eq!(decoded, *t);
    }

    #[test]
    fn swapped_leaf_index_is_not_accepted_as_inclusion() {
        let txs = block(&[(0, 10), (20, 30), (40, 50)]);
        let tree = PlasmaMerkleSumTree::new(&txs).unwrap();
        let root = tree.root();
        let proof1 = tree.inclusion_proof(1).unwrap();
        for wrong_index in [0usize, 2] {
            assert!(!verify_inclusion(wrong_index, &txs[1], 0, &proof1, &root));
        }
    }

    proptest::proptest! {
        #[test]
        fn every_leaf_in_a_randomly_sized_block_verifies(leaf_count in 1usize..12) {
            let ranges: Vec<(u128, u128)> = (0..leaf_count)
                .map(|i| {
                    let start = (i as u128) * 20;
                    (start, start + 10)
                })
                .collect();
            let txs = block(&ranges);
            let tree = PlasmaMerkleSumTree::new(&txs).unwrap();
            let root = tree.root();
            for i in 0..txs.len() {
                let proof = tree.inclusion_proof(i).unwrap();
                proptest::prop_assert!(verify_inclusion(i, &txs[i], 0, &proof, &root));
            }
        }
    }
}
