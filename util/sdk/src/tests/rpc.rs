use bytes::Bytes;
use pretty_assertions::assert_eq;
use serde_json::json;

use super::mock::{live_cell, sighash_lock};
use crate::builder::{LockKind, TransactionBuilder, TxFlow};
use crate::error::Error;
use crate::rpc::types::{CellOutputWithOutPoint, HeaderView, LiveCell, Output, Transaction};
use crate::rpc::{JsonBytes, Uint32, Uint64};
use crate::system_scripts::SystemScripts;
use crate::types::{self as model, H256};

#[test]
fn json_uint() {
    assert_eq!(serde_json::to_string(&Uint64::from(13)).unwrap(), r#""0xd""#);
    assert_eq!(serde_json::to_string(&Uint32::from(0)).unwrap(), r#""0x0""#);
    let value: Uint64 = serde_json::from_str(r#""0xa""#).unwrap();
    assert_eq!(value.value(), 10);
    for invalid in [r#""10""#, r#""0x""#, r#""0x01""#, r#""0xA""#] {
        assert!(serde_json::from_str::<Uint64>(invalid).is_err(), "{}", invalid);
    }
}

#[test]
fn json_bytes() {
    let bytes = JsonBytes::from_vec(vec![0xab, 0x01]);
    assert_eq!(serde_json::to_string(&bytes).unwrap(), r#""0xab01""#);
    assert_eq!(serde_json::to_string(&JsonBytes::default()).unwrap(), r#""0x""#);
    let parsed: JsonBytes = serde_json::from_str(r#""0xab01""#).unwrap();
    assert_eq!(parsed, bytes);
    assert!(serde_json::from_str::<JsonBytes>(r#""ab01""#).is_err());
    assert!(serde_json::from_str::<JsonBytes>(r#""0xab0""#).is_err());
}

#[test]
fn transaction_json() {
    let scripts = SystemScripts::testnet();
    let lock = sighash_lock(&[1u8; 20]);
    let mut builder = TransactionBuilder::new(TxFlow::Payment, LockKind::SingleSig, &scripts);
    builder.add_output(lock.clone(), 100).unwrap();
    builder.add_inputs(&[live_cell(&lock, 200, 3, 1)]).unwrap();
    let tx = builder.build().unwrap();

    let value = serde_json::to_value(Transaction::from(&tx)).unwrap();
    assert_eq!(value["version"], json!("0x0"));
    assert_eq!(value["cell_deps"][0]["dep_type"], json!("dep_group"));
    assert_eq!(value["inputs"][0]["since"], json!("0x0"));
    assert_eq!(value["inputs"][0]["previous_output"]["index"], json!("0x1"));
    assert_eq!(value["outputs"][0]["capacity"], json!("0x64"));
    assert_eq!(value["outputs"][0]["lock"]["hash_type"], json!("type"));
    assert_eq!(value["outputs"][0]["type"], json!(null));
    assert_eq!(value["outputs_data"], json!(["0x"]));
    assert_eq!(value["witnesses"], json!(["0x"]));
}

#[test]
fn header_view_json() {
    let value = json!({
        "compact_target": "0x1a08a97e",
        "dao": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "epoch": "0x7080018000001",
        "hash": "0x0101010101010101010101010101010101010101010101010101010101010101",
        "nonce": "0x0",
        "number": "0x400",
        "parent_hash": "0x0202020202020202020202020202020202020202020202020202020202020202",
        "proposals_hash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "timestamp": "0x5cd2b117",
        "transactions_root": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "extra_hash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "version": "0x0"
    });
    let header: model::Header = serde_json::from_value::<HeaderView>(value).unwrap().into();
    assert_eq!(header.number, 1024);
    assert_eq!(header.hash, H256([1u8; 32]));
    assert_eq!(header.parent_hash, H256([2u8; 32]));
    assert_eq!(header.timestamp, 0x5cd2_b117);
}

#[test]
fn cell_json() {
    let value = json!({
        "block_hash": "0x0303030303030303030303030303030303030303030303030303030303030303",
        "capacity": "0x2540be400",
        "lock": {
            "code_hash": "0x9bd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8",
            "hash_type": "type",
            "args": "0x0101010101010101010101010101010101010101"
        },
        "out_point": {
            "tx_hash": "0x0404040404040404040404040404040404040404040404040404040404040404",
            "index": "0x0"
        }
    });
    let cell: model::Cell = serde_json::from_value::<CellOutputWithOutPoint>(value)
        .unwrap()
        .into();
    assert_eq!(cell.capacity, 10_000_000_000);
    assert_eq!(cell.lock, sighash_lock(&[1u8; 20]));
    assert_eq!(cell.type_, None);
    assert_eq!(cell.block_hash, Some(H256([3u8; 32])));
    assert_eq!(cell.out_point, model::OutPoint::new(H256([4u8; 32]), 0));

    let value = json!({
        "cell_output": {
            "capacity": "0x64",
            "lock": {
                "code_hash": "0x9bd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8",
                "hash_type": "type",
                "args": "0x0101010101010101010101010101010101010101"
            },
            "type": null
        },
        "created_by": {
            "block_number": "0x1",
            "tx_hash": "0x0505050505050505050505050505050505050505050505050505050505050505",
            "index": "0x2"
        },
        "cellbase": false,
        "output_data_len": "0x0"
    });
    let live: model::LiveCell = serde_json::from_value::<LiveCell>(value).unwrap().into();
    let cell = model::Cell::from(live);
    assert_eq!(cell.out_point, model::OutPoint::new(H256([5u8; 32]), 2));
    assert_eq!(cell.capacity, 100);
    assert_eq!(cell.block_hash, None);
    assert_eq!(cell.lock.args, Bytes::from(vec![1u8; 20]));
}

#[test]
fn rpc_output() {
    let success: Output =
        serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1, "result": null})).unwrap();
    assert!(matches!(success, Output::Success(ref s) if s.result.is_null()));

    let failure: Output = serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "id": 2,
        "error": {"code": -32601, "message": "Method not found"}
    }))
    .unwrap();
    match failure {
        Output::Failure(failure) => {
            let err: Error = failure.error.into();
            assert!(matches!(err, Error::LedgerQuery(ref message) if message.contains("-32601")));
        }
        Output::Success(_) => panic!("expect failure"),
    }
}
