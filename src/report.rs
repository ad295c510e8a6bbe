use crate::args::ArgsError;
use crate::submit::{SubmitError, SubmitOutcome};

pub const ARGUMENT_HINTS: &[&str] = &[
    "Copy the whole argument list from the console, including the outer ( ) or [ ].",
    "Arguments must be in order: validator, attestations, proof, pubkeyG1, pubkeyG2, signature.",
    "If the console output spans several lines, save it to a file and pass --args-file.",
];

pub const TRANSACTION_HINTS: &[&str] = &[
    "Check that the signing key is authorized to add validators on the registry.",
    "Check that the validator is not already registered.",
    "Check that the proof, BLS public keys and signature belong to the same validator.",
    "Check that the signer has enough native balance to pay for gas.",
    "Check that RPC_URL is reachable and VALIDATOR_REGISTRY_ADDRESS is the right contract.",
];

/// Troubleshooting hints that fit the failure.
pub fn hints_for(err: &anyhow::Error) -> &'static [&'static str] {
    if err.downcast_ref::<ArgsError>().is_some() {
        ARGUMENT_HINTS
    } else if err.downcast_ref::<SubmitError>().is_some() {
        TRANSACTION_HINTS
    } else {
        &[]
    }
}

pub fn print_success(outcome: &SubmitOutcome) {
    println!("\n✅ addValidator succeeded!");
    println!("   Hash: {}", outcome.tx_hash);
    match outcome.block_number {
        Some(block) => println!("   Block: {}", block),
        None => println!("   Block: pending"),
    }
    println!("   Gas used: {} (limit {})", outcome.gas_used, outcome.gas_limit);
}

pub fn print_failure(err: &anyhow::Error) {
    eprintln!("\n❌ addValidator failed: {err:#}");

    let hints = hints_for(err);
    if !hints.is_empty() {
        eprintln!("\nTroubleshooting:");
        for hint in hints {
            eprintln!("  - {hint}");
        }
    }
}
