use add_validator::prompt;
use anyhow::Result;
use std::env;

/// Prints the address a private key signs for, so the operator can check it
/// against the registry's authorized accounts before running the migration.
fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let key = match env::var("PRIVATE_KEY") {
        Ok(key) => key,
        Err(_) => prompt::read_private_key()?,
    };

    let signer = prompt::parse_signer(&key)?;
    println!("PRIVATE_KEY -> {}", signer.address());

    Ok(())
}
