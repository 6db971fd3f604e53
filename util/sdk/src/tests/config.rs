use pretty_assertions::assert_eq;

use crate::address::NetworkType;
use crate::collector::CollectStrategy;
use crate::config::{SdkConfig, DEFAULT_RPC_URL};
use crate::error::Error;
use crate::system_scripts::SystemScripts;
use crate::types::h256;

#[test]
fn minimal_config_uses_builtins() {
    let config = SdkConfig::from_toml_str(r#"network = "mainnet""#).unwrap();
    assert_eq!(config.network, NetworkType::Mainnet);
    assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
    assert_eq!(config.collect_strategy, CollectStrategy::RangeScan);
    assert_eq!(config.system_scripts(), SystemScripts::mainnet());
}

#[test]
fn full_config() {
    let content = r#"
network = "testnet"
rpc_url = "http://10.0.0.1:8114"
collect_strategy = "index"

[system_scripts.secp_single_sig]
code_hash = "0x9bd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8"
out_point = { tx_hash = "0x0000000000000000000000000000000000000000000000000000000000000001", index = 0 }

[system_scripts.secp_multi_sig]
code_hash = "0x5c5069eb0857efc65e1bca0c07df34c31663b3622fd3876c876320fc9634e2a8"
out_point = { tx_hash = "0x0000000000000000000000000000000000000000000000000000000000000001", index = 1 }

[system_scripts.dao]
code_hash = "0x82d76d1b75fe2fd9a27dfbaa65a039221a380d76c926f378d3f81cf3e7e13f2e"
out_point = { tx_hash = "0x0000000000000000000000000000000000000000000000000000000000000002", index = 2 }
"#;
    let config = SdkConfig::from_toml_str(content).unwrap();
    assert_eq!(config.network, NetworkType::Testnet);
    assert_eq!(config.collect_strategy, CollectStrategy::Index);
    let scripts = config.system_scripts();
    assert_ne!(scripts, SystemScripts::testnet());
    assert_eq!(
        scripts.dao.out_point().tx_hash,
        h256!("0x0000000000000000000000000000000000000000000000000000000000000002")
    );
    assert_eq!(scripts.secp_multi_sig.out_point().index, 1);
    assert_eq!(
        config.rpc_client().unwrap().url(),
        "http://10.0.0.1:8114/"
    );
}

#[test]
fn config_errors() {
    for content in [
        "",
        r#"network = "devnet""#,
        r#"network = "testnet"
collect_strategy = "random""#,
        r#"network = "testnet"
unknown = 1"#,
    ] {
        assert!(
            matches!(SdkConfig::from_toml_str(content), Err(Error::Config(_))),
            "{}",
            content
        );
    }
}

#[test]
fn missing_file() {
    assert!(matches!(
        SdkConfig::load("/nonexistent/ckb-sdk.toml"),
        Err(Error::Config(_))
    ));
}

#[test]
fn invalid_rpc_url() {
    let config = SdkConfig::from_toml_str(
        r#"network = "testnet"
rpc_url = "not a url""#,
    )
    .unwrap();
    assert!(matches!(config.rpc_client(), Err(Error::Config(_))));
}
