//! ABHA addresses: `<cleaned-lowercase-name><tag>@abha`.

use crate::config::{ABHA_ADDRESS_SUFFIX, ABHA_ADDRESS_TAG_MAX};
use rand::Rng;

/// Generate an address from a display name.
///
/// Everything except ASCII letters is stripped from the name, the rest is
/// lowercased, a uniform random tag in `[0, 9998]` is appended, then the
/// `@abha` suffix. Total over all names; a name with no letters at all
/// still yields a valid address whose local part is just the tag.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use sehat_identity::abha::{generate_abha_address, validate_abha_address};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let address = generate_abha_address("Asha Rao", &mut rng);
/// assert!(address.starts_with("asharao"));
/// assert!(address.ends_with("@abha"));
/// assert!(validate_abha_address(&address));
/// ```
pub fn generate_abha_address<R: Rng + ?Sized>(name: &str, rng: &mut R) -> String {
    let local: String = name
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let tag = rng.gen_range(0..=ABHA_ADDRESS_TAG_MAX);
    format!("{local}{tag}{ABHA_ADDRESS_SUFFIX}")
}

/// True iff the input has the exact shape `<alphanumeric>+@abha`.
///
/// One suffix, non-empty ASCII-alphanumeric local part, nothing else.
/// Total over all inputs, never errors.
pub fn validate_abha_address(input: &str) -> bool {
    match input.strip_suffix(ABHA_ADDRESS_SUFFIX) {
        Some(local) => !local.is_empty() && local.chars().all(|c| c.is_ascii_alphanumeric()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_addresses_validate() {
        let mut rng = StdRng::seed_from_u64(42);
        for name in [
            "Asha Rao",
            "alice",
            "Dr. Strange_42!",
            "O'Brien-Kumar",
            "1234",
            "नमस्ते",
        ] {
            let address = generate_abha_address(name, &mut rng);
            assert!(validate_abha_address(&address), "address: {address}");
        }
    }

    #[test]
    fn name_is_cleaned_and_lowercased() {
        let mut rng = StdRng::seed_from_u64(1);
        let address = generate_abha_address("Dr. Asha Rao-7", &mut rng);
        let local = address.strip_suffix("@abha").unwrap();
        assert!(local.starts_with("drasharao"), "local: {local}");
        // Only the random tag follows the cleaned name.
        assert!(local["drasharao".len()..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn generation_is_reproducible_under_a_fixed_seed() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        assert_eq!(
            generate_abha_address("alice", &mut a),
            generate_abha_address("alice", &mut b)
        );
    }

    #[test]
    fn validate_cases() {
        assert!(validate_abha_address("asharao123@abha"));
        assert!(validate_abha_address("Bob99@abha"));
        assert!(validate_abha_address("42@abha"));
        assert!(!validate_abha_address("bob@gmail.com"));
        assert!(!validate_abha_address("@abha"));
        assert!(!validate_abha_address("bob@abha@abha"));
        assert!(!validate_abha_address("bob smith@abha"));
        assert!(!validate_abha_address("bob"));
        assert!(!validate_abha_address(""));
    }
}
