//! # CLI Interface
//!
//! Defines the command-line argument structure for `sehat` using `clap`
//! derive. Supports five subcommands: `vid`, `register`, `validate`,
//! `mask`, and `version`.

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use sehat_identity::abha::Gender;
use std::path::PathBuf;

/// Sehat identity tooling.
///
/// Derives deterministic VIDs from seed material, registers ABHA
/// profiles, and validates or masks identifiers coming from elsewhere.
#[derive(Parser, Debug)]
#[command(
    name = "sehat",
    about = "Sehat health network identity toolkit",
    version,
    propagate_version = true
)]
pub struct SehatCli {
    /// Log output format: "pretty" or "json".
    #[arg(long, env = "SEHAT_LOG_FORMAT", default_value = "pretty", global = true)]
    pub log_format: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the `sehat` binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive a deterministic VID from ordered seed fragments.
    Vid(VidArgs),
    /// Register a new ABHA profile and print it as JSON.
    Register(RegisterArgs),
    /// Validate an ABHA number, address, or stored profile.
    Validate(ValidateArgs),
    /// Mask an ABHA number for display.
    Mask(MaskArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `vid` subcommand.
#[derive(Parser, Debug)]
pub struct VidArgs {
    /// Seed fragments, joined in order. Empty fragments are dropped.
    #[arg(required = true)]
    pub fragments: Vec<String>,

    /// Wallet address appended to the seed material (lowercased first).
    #[arg(long, env = "SEHAT_WALLET_ADDRESS")]
    pub wallet_address: Option<String>,
}

/// Arguments for the `register` subcommand.
#[derive(Parser, Debug)]
pub struct RegisterArgs {
    /// Holder display name. Also feeds address generation.
    #[arg(long)]
    pub name: String,

    /// Date of birth, recorded as given.
    #[arg(long)]
    pub date_of_birth: String,

    /// Gender marker.
    #[arg(long, value_enum)]
    pub gender: GenderArg,

    /// Mobile number.
    #[arg(long)]
    pub mobile: String,

    /// Optional email.
    #[arg(long)]
    pub email: Option<String>,
}

/// Gender marker as accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum GenderArg {
    M,
    F,
    O,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::M => Gender::Male,
            GenderArg::F => Gender::Female,
            GenderArg::O => Gender::Other,
        }
    }
}

/// Arguments for the `validate` subcommand. Exactly one target.
#[derive(Parser, Debug)]
#[command(group = ArgGroup::new("target").required(true).multiple(false))]
pub struct ValidateArgs {
    /// ABHA number to validate.
    #[arg(long, group = "target")]
    pub number: Option<String>,

    /// ABHA address to validate.
    #[arg(long, group = "target")]
    pub address: Option<String>,

    /// Path to a stored profile JSON to validate.
    #[arg(long, group = "target")]
    pub profile: Option<PathBuf>,
}

/// Arguments for the `mask` subcommand.
#[derive(Parser, Debug)]
pub struct MaskArgs {
    /// The number to mask.
    pub number: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Ensures the derive macros produce a valid CLI definition.
        SehatCli::command().debug_assert();
    }

    #[test]
    fn gender_arg_maps_onto_library_enum() {
        assert_eq!(Gender::from(GenderArg::M), Gender::Male);
        assert_eq!(Gender::from(GenderArg::F), Gender::Female);
        assert_eq!(Gender::from(GenderArg::O), Gender::Other);
    }
}
