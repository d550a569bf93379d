#![no_main]
use libfuzzer_sys::fuzz_target;

use morevp_ledger::SignedTransaction;

fuzz_target!(|data: &[u8]| {
    if let Ok(tx) = SignedTransaction::decode(data) {
        // roundtrip must preserve the value and its hash
        let enc = tx.encode().to_vec();
        let tx2 = SignedTransaction::decode(&enc).expect("re-decode of accepted tx");
        assert_eq!(tx, tx2, "signed tx roundtrip mismatch");
        assert_eq!(tx.hash(), tx2.hash(), "tx hash must be stable");

        // spender recovery must never panic, only fault
        let _ = tx.recover_spenders();
    }
});
