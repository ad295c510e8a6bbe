use alloy::primitives::Address;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_RPC_URL: &str = "https://testnet.riselabs.xyz";
pub const DEFAULT_REGISTRY_ADDRESS: &str = "0x7a3b1f04c2d9e6a85f30b8c1d47e92a6f05bc3d8";

/// Submit one `addValidator` call built from arguments pasted out of a
/// browser console.
///
/// Every flag falls back to an environment variable, and `.env` is loaded
/// before parsing.
#[derive(Debug, Clone, Parser)]
#[command(name = "add-validator", version)]
pub struct Config {
    /// JSON-RPC endpoint
    #[arg(long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: Url,

    /// Validator registry contract
    #[arg(long = "contract", env = "VALIDATOR_REGISTRY_ADDRESS", default_value = DEFAULT_REGISTRY_ADDRESS)]
    pub contract: Address,

    /// Signing key. Prompted for when absent.
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Extra gas on top of the node's estimate, in percent
    #[arg(
        long,
        env = "GAS_BUFFER_PERCENT",
        default_value_t = 20,
        value_parser = clap::value_parser!(u64).range(0..=500)
    )]
    pub gas_buffer_percent: u64,

    /// Confirmations to wait for before reporting
    #[arg(long, env = "CONFIRMATIONS", default_value_t = 1)]
    pub confirmations: u64,

    #[arg(long, env = "RECEIPT_TIMEOUT_SECS", default_value_t = 120)]
    pub receipt_timeout_secs: u64,

    /// Read the argument blob from a file instead of the prompt
    #[arg(long, env = "ARGS_FILE")]
    pub args_file: Option<PathBuf>,

    /// Print the encoded calldata and exit without touching the network
    #[arg(long)]
    pub calldata: bool,
}

/// The part of the configuration the submitter needs.
#[derive(Debug, Clone)]
pub struct SubmitConfig {
    pub rpc_url: Url,
    pub contract: Address,
    pub gas_buffer_percent: u64,
    pub confirmations: u64,
    pub receipt_timeout: Duration,
}

impl Config {
    pub fn submit_config(&self) -> SubmitConfig {
        SubmitConfig {
            rpc_url: self.rpc_url.clone(),
            contract: self.contract,
            gas_buffer_percent: self.gas_buffer_percent,
            confirmations: self.confirmations.max(1),
            receipt_timeout: Duration::from_secs(self.receipt_timeout_secs),
        }
    }
}
