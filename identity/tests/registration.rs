//! Integration tests for the full identity lifecycle.
//!
//! These exercise the crate the way the consuming portal does: assemble
//! seed material into a VID, register an ABHA profile, persist it as JSON,
//! and come back later to validate and mask what was stored. Each test
//! stands alone; the only shared fixture is a seeded RNG helper.

use rand::rngs::StdRng;
use rand::SeedableRng;

use sehat_identity::abha::{
    format_abha_number, mask_abha_number, validate_abha_address, validate_abha_number,
    AbhaProfile, Gender, RegistrationDetails,
};
use sehat_identity::vid::{SeedBuilder, Vid};
use sehat_identity::wallet::StaticWallet;

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn asha() -> RegistrationDetails {
    RegistrationDetails {
        name: "Asha Rao".into(),
        date_of_birth: "1990-03-14".into(),
        gender: Gender::Female,
        mobile: "9812345678".into(),
        email: Some("asha@example.com".into()),
    }
}

// ---------------------------------------------------------------------------
// 1. Registration Lifecycle
// ---------------------------------------------------------------------------

#[test]
fn register_persist_reload_validate() {
    let mut rng = rng(100);
    let profile = AbhaProfile::register(asha(), &mut rng);
    assert!(profile.validate());

    // Persist as the portal would, reload, and everything still holds.
    let stored = serde_json::to_string(&profile).unwrap();
    let reloaded: AbhaProfile = serde_json::from_str(&stored).unwrap();
    assert!(reloaded.validate());
    assert!(validate_abha_number(&reloaded.abha_number));
    assert!(validate_abha_address(&reloaded.abha_address));
    assert_eq!(reloaded.created_at, profile.created_at);
}

#[test]
fn stored_numbers_survive_reformatting_and_masking() {
    let mut rng = rng(101);
    let profile = AbhaProfile::register(asha(), &mut rng);

    // Formatting the canonical form is a no-op.
    assert_eq!(format_abha_number(&profile.abha_number), profile.abha_number);

    // Masking hides everything but the last four digits.
    let masked = profile.masked_number();
    assert_eq!(masked.len(), profile.abha_number.len());
    assert!(masked.starts_with("XXXX-XXXX-XX"));
    assert_eq!(&masked[12..], &profile.abha_number[12..]);

    // A stripped spelling masks identically.
    let stripped: String = profile
        .abha_number
        .chars()
        .filter(|c| *c != '-')
        .collect();
    assert_eq!(mask_abha_number(&stripped), masked);
}

#[test]
fn two_registrations_get_distinct_identifiers() {
    // Different RNG streams. Collisions are possible in principle, just
    // not at these odds.
    let mut rng = rng(102);
    let first = AbhaProfile::register(asha(), &mut rng);
    let second = AbhaProfile::register(asha(), &mut rng);
    assert_ne!(first.abha_number, second.abha_number);
    assert_ne!(first.abha_address, second.abha_address);
}

// ---------------------------------------------------------------------------
// 2. VID Derivation Alongside Registration
// ---------------------------------------------------------------------------

#[test]
fn vid_for_a_registered_holder_is_deterministic() {
    let details = asha();
    let first = SeedBuilder::new()
        .fragment(details.name.clone())
        .fragment(details.mobile.clone())
        .derive();
    let second = SeedBuilder::new()
        .fragment(details.name)
        .fragment(details.mobile)
        .derive();

    assert_eq!(first, second);
    assert_eq!(first.to_handle(), "vid:42wjksH2Jfk");
    assert_eq!(Vid::parse(&first.to_handle()).unwrap(), first);
}

#[tokio::test]
async fn wallet_enrichment_changes_the_vid_but_stays_deterministic() {
    let provider = StaticWallet::new("0xABC123DEF456");

    let plain = SeedBuilder::new()
        .fragment("alice")
        .fragment("9876543210")
        .derive();
    let enriched = SeedBuilder::new()
        .fragment("alice")
        .fragment("9876543210")
        .with_wallet(&provider)
        .await
        .derive();
    let enriched_again = SeedBuilder::new()
        .fragment("alice")
        .fragment("9876543210")
        .with_wallet(&provider)
        .await
        .derive();

    assert_ne!(plain, enriched);
    assert_eq!(enriched, enriched_again);
    assert_eq!(enriched, Vid::derive("alice|9876543210|0xabc123def456"));
}

#[tokio::test]
async fn broken_wallet_leaves_the_vid_on_the_pure_path() {
    let plain = SeedBuilder::new()
        .fragment("alice")
        .fragment("9876543210")
        .derive();
    let degraded = SeedBuilder::new()
        .fragment("alice")
        .fragment("9876543210")
        .with_wallet(&StaticWallet::absent())
        .await
        .derive();
    assert_eq!(plain, degraded);
}

// ---------------------------------------------------------------------------
// 3. Validating Foreign Data
// ---------------------------------------------------------------------------

#[test]
fn profiles_arriving_from_outside_are_checked_not_trusted() {
    // A profile JSON blob with a mangled number, as could come out of any
    // external store.
    let json = r#"{
        "abhaNumber": "1234-5678-9012",
        "abhaAddress": "asharao123@abha",
        "name": "Asha Rao",
        "dateOfBirth": "1990-03-14",
        "gender": "F",
        "mobile": "9812345678",
        "active": true,
        "createdAt": "2026-01-15T08:30:00Z"
    }"#;

    let profile: AbhaProfile = serde_json::from_str(json).unwrap();
    assert!(!profile.validate());
    assert!(!validate_abha_number(&profile.abha_number));
    assert!(validate_abha_address(&profile.abha_address));
}
