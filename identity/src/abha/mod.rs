//! # ABHA — Health Account Identifiers
//!
//! Generation, formatting, masking, and validation for ABHA-style health
//! identifiers. Unlike VIDs, these are random at creation time:
//!
//! 1. **Number** — 14 decimal digits, displayed as `dddd-dddd-dddddd`.
//! 2. **Address** — `<cleaned-lowercase-name><tag>@abha`.
//! 3. **Profile** — the registration-time aggregate binding a number and
//!    address to the holder's details.
//!
//! ## Randomness
//!
//! Every generator takes the RNG as an explicit parameter instead of
//! reading a process-global source. Production callers pass
//! `rand::thread_rng()`; tests pass a seeded `StdRng` and get reproducible
//! output. No generator checks previously issued values: uniqueness is
//! probabilistic only, and a registry is a storage concern that lives
//! outside this crate.
//!
//! ## Totality
//!
//! The free-function validators and formatters accept arbitrary text and
//! never error. Malformed input validates to `false` or passes through
//! formatting unchanged; only the typed [`AbhaNumber::parse`] constructor
//! reports what is wrong.

pub mod address;
pub mod number;
pub mod profile;

pub use address::{generate_abha_address, validate_abha_address};
pub use number::{
    format_abha_number, mask_abha_number, validate_abha_number, AbhaNumber, AbhaNumberError,
};
pub use profile::{AbhaProfile, Gender, RegistrationDetails};
