pub mod blob;
pub mod coerce;

pub use blob::{parse_blob, BlobError, BlobFormat};
pub use coerce::{CoerceError, FromArg};

use alloy::primitives::{Address, B256};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::contract::ValidatorRegistry::{G1Point, G2Point, ValidatorProof};

/// Positional names of the `addValidator` parameters.
pub const FIELD_NAMES: [&str; 6] = [
    "validator",
    "attestations",
    "proof",
    "pubkeyG1",
    "pubkeyG2",
    "signature",
];

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("could not parse argument blob")]
    Blob(#[from] BlobError),
    #[error("invalid argument")]
    Coerce(#[from] CoerceError),
    #[error("expected {expected} arguments but found {found} (first missing: `{missing}`)")]
    Missing {
        expected: usize,
        found: usize,
        missing: &'static str,
    },
}

/// The six typed `addValidator` parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorArgs {
    pub validator: Address,
    pub attestations: Vec<B256>,
    pub proof: ValidatorProof,
    pub pubkey_g1: G1Point,
    pub pubkey_g2: G2Point,
    pub signature: G1Point,
}

impl ValidatorArgs {
    pub fn from_blob(text: &str) -> Result<Self, ArgsError> {
        let values = parse_blob(text)?;
        Self::from_values(&values)
    }

    /// Extracts the six fields from a parsed argument list.
    ///
    /// A list holding a single array of arguments, or a single object keyed
    /// by parameter name, is unwrapped first.
    pub fn from_values(values: &[Value]) -> Result<Self, ArgsError> {
        if let [single] = values {
            match single {
                Value::Array(inner) if inner.len() >= FIELD_NAMES.len() => {
                    return Self::from_values(inner);
                }
                Value::Object(map) if FIELD_NAMES.iter().all(|name| map.contains_key(*name)) => {
                    let named: Vec<Value> = FIELD_NAMES
                        .iter()
                        .filter_map(|name| map.get(*name).cloned())
                        .collect();
                    return Self::from_values(&named);
                }
                _ => {}
            }
        }

        if values.len() < FIELD_NAMES.len() {
            return Err(ArgsError::Missing {
                expected: FIELD_NAMES.len(),
                found: values.len(),
                missing: FIELD_NAMES[values.len()],
            });
        }
        if values.len() > FIELD_NAMES.len() {
            warn!(
                "⚠️ Blob has {} arguments, ignoring the {} after `signature`",
                values.len(),
                values.len() - FIELD_NAMES.len()
            );
        }

        Ok(Self {
            validator: FromArg::from_arg(&values[0], FIELD_NAMES[0])?,
            attestations: FromArg::from_arg(&values[1], FIELD_NAMES[1])?,
            proof: FromArg::from_arg(&values[2], FIELD_NAMES[2])?,
            pubkey_g1: FromArg::from_arg(&values[3], FIELD_NAMES[3])?,
            pubkey_g2: FromArg::from_arg(&values[4], FIELD_NAMES[4])?,
            signature: FromArg::from_arg(&values[5], FIELD_NAMES[5])?,
        })
    }

    pub fn summary(&self) {
        info!("👤 Validator: {}", self.validator);
        info!("📎 Attestations: {}", self.attestations.len());
        info!(
            "🧾 Proof: chain {}, {} public inputs, expires at {}",
            self.proof.chainId,
            self.proof.publicInputs.len(),
            self.proof.expiresAt
        );
        info!("🔐 Program key: {}", self.proof.programKey);
        info!("🔑 BLS pubkey G1.X: {}", self.pubkey_g1.X);
    }
}
