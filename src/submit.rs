use alloy::network::EthereumWallet;
use alloy::primitives::TxHash;
use alloy::providers::ProviderBuilder;
use alloy::signers::local::PrivateKeySigner;
use thiserror::Error;
use tracing::{debug, info};

use crate::args::ValidatorArgs;
use crate::config::SubmitConfig;
use crate::contract::ValidatorRegistry;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("gas estimation failed (the call would most likely revert)")]
    Estimate(#[source] alloy::contract::Error),
    #[error("sending the transaction failed")]
    Send(#[source] alloy::contract::Error),
    #[error("waiting for the receipt of {tx_hash} failed: {message}")]
    Receipt { tx_hash: TxHash, message: String },
    #[error("transaction {tx_hash} reverted in block {block}")]
    Reverted { tx_hash: TxHash, block: String },
}

#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_limit: u64,
    pub gas_used: u128,
}

/// Gas limit after adding `buffer_percent` on top of the estimate.
pub fn buffered_gas(estimate: u64, buffer_percent: u64) -> u64 {
    let limit = u128::from(estimate) * u128::from(100 + buffer_percent) / 100;
    u64::try_from(limit).unwrap_or(u64::MAX)
}

/// Sends `addValidator` to the configured registry with one signer.
pub struct Submitter {
    config: SubmitConfig,
    signer: PrivateKeySigner,
}

impl Submitter {
    pub fn new(config: SubmitConfig, signer: PrivateKeySigner) -> Self {
        Self { config, signer }
    }

    pub async fn submit(&self, args: &ValidatorArgs) -> Result<SubmitOutcome, SubmitError> {
        info!("🔑 Signer address: {}", self.signer.address());

        let provider = ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(EthereumWallet::from(self.signer.clone()))
            .on_http(self.config.rpc_url.clone());

        let registry = ValidatorRegistry::new(self.config.contract, provider);
        let call = registry.addValidator(
            args.validator,
            args.attestations.clone(),
            args.proof.clone(),
            args.pubkey_g1.clone(),
            args.pubkey_g2.clone(),
            args.signature.clone(),
        );

        info!("⛽ Estimating gas...");
        let estimate = call.estimate_gas().await.map_err(SubmitError::Estimate)?;
        let gas_limit = buffered_gas(estimate, self.config.gas_buffer_percent);
        info!(
            "⛽ Estimate {} gas, sending with limit {} (+{}%)",
            estimate, gas_limit, self.config.gas_buffer_percent
        );

        info!("📤 Sending addValidator transaction...");
        let pending = call.gas(gas_limit).send().await.map_err(SubmitError::Send)?;
        let tx_hash = *pending.tx_hash();
        info!("   Transaction sent: {}", tx_hash);
        info!(
            "⏳ Waiting for {} confirmation(s), timeout {:?}",
            self.config.confirmations, self.config.receipt_timeout
        );

        let receipt = pending
            .with_required_confirmations(self.config.confirmations)
            .with_timeout(Some(self.config.receipt_timeout))
            .get_receipt()
            .await
            .map_err(|e| SubmitError::Receipt {
                tx_hash,
                message: e.to_string(),
            })?;
        debug!("Receipt: {:?}", receipt);

        if !receipt.status() {
            return Err(SubmitError::Reverted {
                tx_hash,
                block: receipt
                    .block_number
                    .map_or_else(|| "unknown".to_string(), |b| b.to_string()),
            });
        }

        Ok(SubmitOutcome {
            tx_hash,
            block_number: receipt.block_number,
            gas_limit,
            gas_used: u128::from(receipt.gas_used),
        })
    }
}
