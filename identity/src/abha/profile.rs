//! ABHA profiles: the registration-time aggregate binding a generated
//! number and address to the holder's details.
//!
//! A profile is created once, at registration, and its fields do not
//! mutate afterwards. Persistence is someone else's job; the struct
//! serializes to the camelCase JSON shape the consuming portal stores.

use super::address::{generate_abha_address, validate_abha_address};
use super::number::{mask_abha_number, validate_abha_number, AbhaNumber};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Gender marker carried on a profile. Serialized as the single letters
/// `M` / `F` / `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
}

/// The holder-supplied details a registration starts from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDetails {
    /// Display name. Also feeds address generation.
    pub name: String,
    /// Date of birth, as entered.
    pub date_of_birth: String,
    /// Gender marker.
    pub gender: Gender,
    /// Mobile number, as entered.
    pub mobile: String,
    /// Optional email.
    pub email: Option<String>,
}

/// A registered health account profile.
///
/// The number and address fields are plain text: profiles round-trip
/// through external JSON and may arrive holding anything, which is why
/// [`validate`](Self::validate) exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbhaProfile {
    /// The 14-digit account number, canonically grouped.
    pub abha_number: String,

    /// The `@abha` address handle.
    pub abha_address: String,

    /// Display name.
    pub name: String,

    /// Date of birth, as entered at registration.
    pub date_of_birth: String,

    /// Gender marker.
    pub gender: Gender,

    /// Mobile number.
    pub mobile: String,

    /// Optional email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Whether the account is active. Set at registration; no
    /// deactivation operation exists in this library.
    pub active: bool,

    /// When the profile was registered (UTC).
    pub created_at: DateTime<Utc>,
}

impl AbhaProfile {
    /// Register a new profile: generate a number and an address from the
    /// given RNG, stamp the creation time, and mark the account active.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use sehat_identity::abha::{AbhaProfile, Gender, RegistrationDetails};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let profile = AbhaProfile::register(
    ///     RegistrationDetails {
    ///         name: "Asha Rao".into(),
    ///         date_of_birth: "1990-03-14".into(),
    ///         gender: Gender::Female,
    ///         mobile: "9812345678".into(),
    ///         email: None,
    ///     },
    ///     &mut rng,
    /// );
    /// assert!(profile.validate());
    /// ```
    pub fn register<R: Rng + ?Sized>(details: RegistrationDetails, rng: &mut R) -> Self {
        let number = AbhaNumber::generate(rng);
        let address = generate_abha_address(&details.name, rng);
        Self {
            abha_number: number.to_string(),
            abha_address: address,
            name: details.name,
            date_of_birth: details.date_of_birth,
            gender: details.gender,
            mobile: details.mobile,
            email: details.email,
            active: true,
            created_at: Utc::now(),
        }
    }

    /// Structural validity check: the number passes number validation, the
    /// address passes address validation, name/date-of-birth/mobile are
    /// non-empty after trimming, and the account is active.
    ///
    /// A pure boolean predicate. Callers wanting to know *which* field is
    /// wrong should check the fields with the underlying validators.
    pub fn validate(&self) -> bool {
        validate_abha_number(&self.abha_number)
            && validate_abha_address(&self.abha_address)
            && !self.name.trim().is_empty()
            && !self.date_of_birth.trim().is_empty()
            && !self.mobile.trim().is_empty()
            && self.active
    }

    /// The account number with all but the last four digits masked.
    pub fn masked_number(&self) -> String {
        mask_abha_number(&self.abha_number)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
