//! Property-based tests for parsing, age derivation, and token handling
//!
//! These tests verify:
//! - Birthdate parsing accepts exactly the `yyyy/MM/dd` contract
//! - Age derivation is bounded and monotone
//! - Ciphertexts always round-trip and garbage never panics
//! - Account numbers keep their shape

mod common;

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use trustbank_auth_core::service::{calculate_age, generate_account_number, parse_birthdate};
use trustbank_auth_core::TokenCipher;

// ============================================================================
// Strategies
// ============================================================================

/// Generate valid calendar dates within a plausible lifespan
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Generate strings that are not in `yyyy/MM/dd` shape
fn arb_malformed_birthdate() -> impl Strategy<Value = String> {
    prop_oneof![
        // Wrong separators
        "[0-9]{4}-[0-9]{2}-[0-9]{2}",
        "[0-9]{2}/[0-9]{2}/[0-9]{4}",
        // Free-form junk
        "[a-zA-Z ]{1,20}",
        Just(String::new()),
        Just("////".to_string()),
        // Out-of-range components
        Just("2000/00/10".to_string()),
        Just("2000/13/10".to_string()),
        Just("2000/02/30".to_string()),
    ]
}

// ============================================================================
// Birthdate parsing
// ============================================================================

proptest! {
    /// Property: every valid date round-trips through the wire format
    #[test]
    fn prop_birthdate_round_trip(date in arb_date()) {
        let raw = date.format("%Y/%m/%d").to_string();
        prop_assert_eq!(parse_birthdate(&raw).unwrap(), date);
    }

    /// Property: malformed input errors, never panics
    #[test]
    fn prop_malformed_birthdate_rejected(raw in arb_malformed_birthdate()) {
        prop_assert!(parse_birthdate(&raw).is_err());
    }

    /// Property: arbitrary strings never panic the parser
    #[test]
    fn prop_arbitrary_strings_never_panic(raw in ".*") {
        let _ = parse_birthdate(&raw);
    }
}

// ============================================================================
// Age derivation
// ============================================================================

proptest! {
    /// Property: age is non-negative and bounded by the year difference
    #[test]
    fn prop_age_bounds(birth in arb_date(), today in arb_date()) {
        let age = calculate_age(birth, today);
        prop_assert!(age >= 0);
        if today >= birth {
            let diff = today.year() - birth.year();
            prop_assert!(age == diff || age == diff - 1);
        }
    }

    /// Property: on the birthday itself the year difference is exact
    #[test]
    fn prop_age_exact_on_birthday(birth in arb_date(), years in 0i32..120) {
        // arb_date never yields Feb 29, so the shifted date always exists
        let today =
            NaiveDate::from_ymd_opt(birth.year() + years, birth.month(), birth.day()).unwrap();
        prop_assert_eq!(calculate_age(birth, today), years);
    }
}

// ============================================================================
// Token cipher
// ============================================================================

proptest! {
    /// Property: any token round-trips through encrypt/decrypt
    #[test]
    fn prop_cipher_round_trip(token in ".{0,256}", key in any::<[u8; 32]>()) {
        let cipher = TokenCipher::new(key).unwrap();
        let ciphertext = cipher.encrypt(&token).unwrap();
        prop_assert_eq!(cipher.decrypt(&ciphertext).unwrap(), token);
    }

    /// Property: decrypting arbitrary garbage errors, never panics
    #[test]
    fn prop_cipher_garbage_never_panics(garbage in ".{0,256}") {
        let cipher = TokenCipher::new([7u8; 32]).unwrap();
        let _ = cipher.decrypt(&garbage);
    }

    /// Property: a different key never decrypts successfully
    #[test]
    fn prop_cipher_wrong_key_rejected(
        token in ".{1,64}",
        key_a in any::<[u8; 32]>(),
        key_b in any::<[u8; 32]>(),
    ) {
        prop_assume!(key_a != key_b);
        let a = TokenCipher::new(key_a).unwrap();
        let b = TokenCipher::new(key_b).unwrap();
        let ciphertext = a.encrypt(&token).unwrap();
        prop_assert!(b.decrypt(&ciphertext).is_err());
    }
}

// ============================================================================
// Account numbers
// ============================================================================

proptest! {
    /// Property: generated account numbers are always 10 digits
    #[test]
    fn prop_account_number_shape(_seed in any::<u8>()) {
        let number = generate_account_number();
        prop_assert_eq!(number.len(), 10);
        prop_assert!(number.chars().all(|c| c.is_ascii_digit()));
        prop_assert!(!number.starts_with('0'));
    }
}
