use add_validator::args::ValidatorArgs;
use add_validator::config::Config;
use add_validator::contract::encode_add_validator;
use add_validator::prompt;
use add_validator::report;
use add_validator::submit::Submitter;
use alloy::hex;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize TLS provider for the HTTPS RPC
    rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install rustls crypto provider"))?;

    // Load environment variables before clap reads them
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("add_validator=info")),
        )
        .init();

    let config = Config::parse();

    if config.calldata {
        let blob = read_blob(&config)?;
        if let Err(err) = print_calldata(&blob) {
            report::print_failure(&err);
        }
        return Ok(());
    }

    info!("🚀 addValidator migration");
    info!("📝 Registry contract: {}", config.contract);
    info!("🌐 RPC URL: {}", config.rpc_url);

    let private_key = match &config.private_key {
        Some(key) => {
            info!("🔑 Using private key from PRIVATE_KEY");
            key.clone()
        }
        None => prompt::read_private_key()?,
    };
    let blob = read_blob(&config)?;

    if let Err(err) = run(&config, &private_key, &blob).await {
        report::print_failure(&err);
    }

    Ok(())
}

fn read_blob(config: &Config) -> Result<String> {
    match &config.args_file {
        Some(path) => {
            info!("📂 Reading arguments from {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))
        }
        None => prompt::read_arguments_blob(),
    }
}

fn print_calldata(blob: &str) -> Result<()> {
    let args = ValidatorArgs::from_blob(blob)?;
    let calldata = encode_add_validator(&args);
    println!("0x{}", hex::encode(&calldata));
    Ok(())
}

async fn run(config: &Config, private_key: &str, blob: &str) -> Result<()> {
    let signer = prompt::parse_signer(private_key).context("invalid private key")?;

    info!("🔍 Parsing arguments...");
    let args = ValidatorArgs::from_blob(blob)?;
    args.summary();

    let submitter = Submitter::new(config.submit_config(), signer);
    let outcome = submitter.submit(&args).await?;

    report::print_success(&outcome);
    Ok(())
}
