// Copyright (c) 2026 Sehat Project Contributors. MIT License.
// See LICENSE for details.

//! # Sehat CLI
//!
//! Entry point for the `sehat` binary. Parses CLI arguments, initializes
//! logging, and dispatches to the identity library.
//!
//! The binary supports five subcommands:
//!
//! - `vid`      — derive a deterministic VID from seed fragments
//! - `register` — register a new ABHA profile and print it as JSON
//! - `validate` — validate a number, address, or stored profile
//! - `mask`     — mask an ABHA number for display
//! - `version`  — print build version information

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;

use sehat_identity::abha::{
    mask_abha_number, validate_abha_address, validate_abha_number, AbhaProfile,
    RegistrationDetails,
};
use sehat_identity::vid::SeedBuilder;
use sehat_identity::wallet::{NoWallet, StaticWallet};

use cli::{Commands, SehatCli};
use logging::LogFormat;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = SehatCli::parse();
    logging::init_logging(
        "sehat=info,sehat_identity=info",
        LogFormat::from_str_lossy(&cli.log_format),
    );

    match cli.command {
        Commands::Vid(args) => derive_vid(args).await,
        Commands::Register(args) => register(args),
        Commands::Validate(args) => validate(args),
        Commands::Mask(args) => {
            println!("{}", mask_abha_number(&args.number));
            Ok(())
        }
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Derives a VID from the given fragments, optionally enriched with a
/// wallet address.
async fn derive_vid(args: cli::VidArgs) -> Result<()> {
    let mut builder = SeedBuilder::new();
    for fragment in args.fragments {
        builder = builder.fragment(fragment);
    }

    // The flag stands in for a live injected wallet; either way the
    // resolver decides whether an address joins the seed.
    let builder = match args.wallet_address {
        Some(address) => builder.with_wallet(&StaticWallet::new(address)).await,
        None => builder.with_wallet(&NoWallet).await,
    };

    let vid = builder.derive();
    tracing::debug!(seed = %builder.join(), "derived VID");
    println!("{vid}");
    Ok(())
}

/// Registers a fresh profile and prints it as pretty JSON on stdout.
fn register(args: cli::RegisterArgs) -> Result<()> {
    let profile = AbhaProfile::register(
        RegistrationDetails {
            name: args.name,
            date_of_birth: args.date_of_birth,
            gender: args.gender.into(),
            mobile: args.mobile,
            email: args.email,
        },
        &mut rand::thread_rng(),
    );

    tracing::info!(
        address = %profile.abha_address,
        number = %profile.masked_number(),
        "registered profile"
    );
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

/// Validates exactly one target and reports the verdict on stdout.
/// Exits non-zero on an invalid target so scripts can branch on it.
fn validate(args: cli::ValidateArgs) -> Result<()> {
    let valid = if let Some(number) = args.number {
        validate_abha_number(&number)
    } else if let Some(address) = args.address {
        validate_abha_address(&address)
    } else if let Some(path) = args.profile {
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read profile from {}", path.display()))?;
        let profile: AbhaProfile = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse profile JSON from {}", path.display()))?;
        profile.validate()
    } else {
        // clap's arg group guarantees one target is present.
        unreachable!("no validation target");
    };

    if valid {
        println!("valid");
        Ok(())
    } else {
        println!("invalid");
        std::process::exit(1);
    }
}

fn print_version() {
    println!("sehat {}", env!("CARGO_PKG_VERSION"));
}
