use morevp_ledger::{Address, Currency};
use morevp_wallet::{create_from_utxos, Funds, Payment, Utxo};
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

const MAX_AMOUNT: u128 = 1 << 100;

prop_compose! {
    fn arb_utxo(currency: Currency)
        (blknum in 1u64..10_000_000, txindex in 0u64..65_536, oindex in 0u8..=1, amount in 0u128..MAX_AMOUNT)
        -> Utxo
    {
        Utxo { blknum, txindex, oindex, amount, currency }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        failure_persistence: Some(Box::new(FileFailurePersistence::Direct(
            ".proptest-regressions-builder_props"
        ))),
        .. ProptestConfig::default()
    })]

    #[test]
    fn spends_balance_exactly(
        utxos in prop::collection::vec(arb_utxo(Currency::NATIVE), 1..=2),
        pay_num in 0u128..MAX_AMOUNT,
        fee_num in 0u128..1_000_000u128,
        receiver in any::<[u8; 20]>(),
        change in any::<[u8; 20]>(),
    ) {
        let total: u128 = utxos.iter().map(|u| u.amount).sum();
        let funds = Funds {
            change_address: Address::from_bytes(change),
            utxos,
        };
        let payment = Payment {
            owner: Address::from_bytes(receiver),
            amount: (pay_num % (total + 1)) as i128,
        };
        let fee = (fee_num % (total - payment.amount as u128 + 1)) as i128;

        let tx = create_from_utxos(&funds, &payment, fee).unwrap();

        // every input token lands in an output or the fee
        let out_sum = tx.outputs[0].amount + tx.outputs[1].amount + tx.fee;
        prop_assert_eq!(out_sum, total);
        prop_assert_eq!(tx.outputs[0].amount as i128, payment.amount);
        prop_assert_eq!(tx.currency, Currency::NATIVE);
    }

    #[test]
    fn overdrawn_requests_always_fail(
        utxo in arb_utxo(Currency::NATIVE),
        excess in 1u128..MAX_AMOUNT,
    ) {
        let funds = Funds {
            change_address: Address::from_bytes([0xAA; 20]),
            utxos: vec![utxo],
        };
        let payment = Payment {
            owner: Address::from_bytes([0xBB; 20]),
            amount: (utxo.amount + excess) as i128,
        };
        prop_assert!(create_from_utxos(&funds, &payment, 0).is_err());
    }

    #[test]
    fn slot_mapping_is_positional(
        utxos in prop::collection::vec(arb_utxo(Currency::NATIVE), 1..=2),
    ) {
        let total: u128 = utxos.iter().map(|u| u.amount).sum();
        let funds = Funds {
            change_address: Address::from_bytes([0xAA; 20]),
            utxos: utxos.clone(),
        };
        let payment = Payment { owner: Address::from_bytes([0xBB; 20]), amount: total as i128 };

        let tx = create_from_utxos(&funds, &payment, 0).unwrap();
        for (slot, u) in utxos.iter().enumerate() {
            prop_assert_eq!(tx.inputs[slot], u.position());
        }
        if utxos.len() < 2 {
            prop_assert!(tx.inputs[1].is_null());
        }
    }
}
