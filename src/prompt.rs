//! Console input for the private key and the pasted argument blob.

use alloy::signers::local::{LocalSignerError, PrivateKeySigner};
use anyhow::Result;
use dialoguer::{Input, Password};
use std::str::FromStr;

pub fn read_private_key() -> Result<String> {
    let key = Password::new()
        .with_prompt("🔑 Private key (hex)")
        .interact()?;
    Ok(key)
}

/// Reads the blob as one line. Multi-line console output should go through
/// `--args-file` instead.
pub fn read_arguments_blob() -> Result<String> {
    let blob: String = Input::new()
        .with_prompt("📋 Paste the addValidator arguments")
        .interact_text()?;
    Ok(blob)
}

/// Accepts the key with or without `0x`, surrounding whitespace ignored.
pub fn parse_signer(key: &str) -> Result<PrivateKeySigner, LocalSignerError> {
    PrivateKeySigner::from_str(key.trim())
}
