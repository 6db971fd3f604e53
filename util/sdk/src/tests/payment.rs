use pretty_assertions::assert_eq;

use super::mock::{live_cell, sighash_lock, MockLedger};
use crate::address::{self, NetworkType};
use crate::builder::single_sig_witness_template;
use crate::collector::CollectStrategy;
use crate::error::Error;
use crate::key::Secp256k1Key;
use crate::payment::Payment;
use crate::signer::{placeholder_witness, signing_message, SigningScheme};
use crate::system_scripts::SystemScripts;
use crate::types::{DepType, WitnessArgs};

const FROM_ARGS: [u8; 20] = [
    0xed, 0xcd, 0xa9, 0x51, 0x3f, 0xa0, 0x30, 0xce, 0x43, 0x08, 0xe2, 0x92, 0x45, 0xa2, 0x2c,
    0x02, 0x2d, 0x04, 0x43, 0xbb,
];
const TO_ARGS: [u8; 20] = [0x11; 20];

fn ledger(capacities: &[u64]) -> MockLedger {
    let lock = sighash_lock(&FROM_ARGS);
    let mut ledger = MockLedger::with_tip(10);
    for (i, capacity) in capacities.iter().enumerate() {
        ledger.push_cell(1, live_cell(&lock, *capacity, i as u8 + 1, i as u32));
    }
    ledger
}

fn testnet_payment(amount: u64, fee: u64) -> Payment {
    let from = address::encode(NetworkType::Testnet, &sighash_lock(&FROM_ARGS)).unwrap();
    let to = address::encode(NetworkType::Testnet, &sighash_lock(&TO_ARGS)).unwrap();
    Payment::new(&from, &to, amount, fee).unwrap()
}

#[test]
fn payment_with_change() {
    let scripts = SystemScripts::testnet();
    let ledger = ledger(&[100_000_000_000, 50_000_000_000]);
    let mut payment = testnet_payment(120_000_000_000, 1_000);
    let tx = payment.generate_tx(&ledger, &scripts).unwrap().clone();

    assert_eq!(
        tx.cell_deps(),
        &[scripts.secp_single_sig.cell_dep(DepType::DepGroup)][..]
    );
    assert_eq!(tx.inputs().len(), 2);
    assert_eq!(tx.witnesses().len(), 2);
    assert_eq!(tx.outputs().len(), 2);
    assert_eq!(tx.outputs_data().len(), 2);
    assert_eq!(tx.outputs()[0].capacity, 120_000_000_000);
    assert_eq!(tx.outputs()[0].lock, sighash_lock(&TO_ARGS));
    assert_eq!(tx.outputs()[1].capacity, 29_999_999_000);
    assert_eq!(tx.outputs()[1].lock, sighash_lock(&FROM_ARGS));
    assert_eq!(payment.group().unwrap(), &[0, 1][..]);

    assert_eq!(
        format!("{:#x}", tx.hash()),
        "0x81114b61bfbaa3fad37f4a6bb5f0a82f01f4bce98ec6a18ce16fa5881c8d24e5"
    );
    let key = Secp256k1Key::from_slice(&[1u8; 32]).unwrap();
    let placeholder =
        placeholder_witness(&single_sig_witness_template(), &SigningScheme::Single(&key)).unwrap();
    assert_eq!(
        format!("{:#x}", signing_message(&tx, &[0, 1], &placeholder).unwrap()),
        "0x1634a247faf08ac3667d6e967f91dc9dc420c885fb83ac9ef14931db0ba63ab2"
    );
}

#[test]
fn payment_without_change() {
    let ledger = ledger(&[100_000, 20_000]);
    let mut payment = testnet_payment(119_000, 1_000);
    let tx = payment
        .generate_tx(&ledger, &SystemScripts::testnet())
        .unwrap();
    assert_eq!(tx.outputs().len(), 1);
    assert_eq!(tx.outputs_data().len(), 1);
    assert_eq!(tx.outputs()[0].capacity, 119_000);
}

#[test]
fn insufficient_funds() {
    for strategy in [CollectStrategy::Index, CollectStrategy::RangeScan] {
        let ledger = ledger(&[100, 200]);
        let mut payment = testnet_payment(300, 1).strategy(strategy);
        match payment.generate_tx(&ledger, &SystemScripts::testnet()) {
            Err(Error::InsufficientFunds {
                required,
                available,
            }) => {
                assert_eq!(required, 301);
                assert_eq!(available, 300);
            }
            other => panic!("expect insufficient funds, got {:?}", other),
        }
        assert!(matches!(
            payment.transaction(),
            Err(Error::UninitializedTransaction)
        ));
    }
}

#[test]
fn sign_and_send() {
    let ledger = ledger(&[100_000, 20_000]);
    let key = Secp256k1Key::from_slice(&[1u8; 32]).unwrap();
    let mut payment = testnet_payment(50_000, 1_000);
    payment
        .generate_tx(&ledger, &SystemScripts::testnet())
        .unwrap();
    let signed = payment.sign(&key).unwrap().clone();
    let witness = WitnessArgs::from_slice(&signed.witnesses()[0]).unwrap();
    assert_eq!(witness.lock.map(|lock| lock.len()), Some(65));

    let hash = payment.send(&ledger).unwrap();
    assert_eq!(hash, signed.hash());
    assert_eq!(ledger.sent.borrow().as_slice(), &[signed][..]);
}

#[test]
fn sign_or_send_before_generate() {
    let ledger = MockLedger::default();
    let key = Secp256k1Key::from_slice(&[1u8; 32]).unwrap();
    let mut payment = testnet_payment(1, 1);
    assert!(matches!(
        payment.sign(&key),
        Err(Error::UninitializedTransaction)
    ));
    assert!(matches!(
        payment.send(&ledger),
        Err(Error::UninitializedTransaction)
    ));
    assert!(ledger.sent.borrow().is_empty());
}

#[test]
fn network_mismatch() {
    let from = address::encode(NetworkType::Mainnet, &sighash_lock(&FROM_ARGS)).unwrap();
    let to = address::encode(NetworkType::Testnet, &sighash_lock(&TO_ARGS)).unwrap();
    match Payment::new(&from, &to, 1, 1) {
        Err(Error::NetworkMismatch { from, to }) => {
            assert_eq!(from, NetworkType::Mainnet.to_string());
            assert_eq!(to, NetworkType::Testnet.to_string());
        }
        other => panic!("expect network mismatch, got {:?}", other),
    }
}

#[test]
fn invalid_address() {
    assert!(matches!(
        Payment::new("ckb1invalid", "ckb1invalid", 1, 1),
        Err(Error::AddressFormat(_))
    ));
}

#[test]
fn ledger_failure_aborts_generation() {
    let mut ledger = ledger(&[100_000]);
    ledger.failure = Some("timeout".to_owned());
    let mut payment = testnet_payment(1, 1);
    assert!(matches!(
        payment.generate_tx(&ledger, &SystemScripts::testnet()),
        Err(Error::LedgerQuery(_))
    ));
}
