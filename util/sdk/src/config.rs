//! # SDK config
//!
//! Loaded from a TOML file such as
//!
//! ```toml
//! network = "testnet"
//! rpc_url = "http://127.0.0.1:8114"
//! collect_strategy = "index"
//! ```
//!
//! Because the limitation of toml library, nested config struct must be put in
//! the tail to keep it serializable, so `system_scripts` comes last.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::address::NetworkType;
use crate::collector::CollectStrategy;
use crate::error::Result;
use crate::rpc::HttpRpcClient;
use crate::system_scripts::SystemScripts;

/// Default endpoint of a local node.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8114";

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_owned()
}

// change the order of fields will break serialization, see module doc.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SdkConfig {
    pub network: NetworkType,
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    #[serde(default)]
    pub collect_strategy: CollectStrategy,
    /// Overrides the built-in dependency cells of `network`, e.g. on a dev
    /// chain.
    #[serde(default)]
    pub system_scripts: Option<SystemScripts>,
}

impl SdkConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        log::debug!("load sdk config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The configured dependency cells, or the network built-ins.
    pub fn system_scripts(&self) -> SystemScripts {
        match &self.system_scripts {
            Some(scripts) => scripts.clone(),
            None => SystemScripts::for_network(self.network),
        }
    }

    pub fn rpc_client(&self) -> Result<HttpRpcClient> {
        HttpRpcClient::new(&self.rpc_url)
    }
}
