//! Deterministic short code generation.
//!
//! Codes are derived from a SHA-256 hash of the long URL so that shortening
//! the same URL always produces the same candidate code. Collisions are
//! resolved by perturbing the hash-derived integer with an incrementing
//! counter.

use crate::error::AppError;
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;

/// Base-62 digits in value order: `0-9`, then `a-z`, then `A-Z`.
const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Minimum short code width. Smaller encodings are left-padded with `0`.
pub const CODE_MIN_LENGTH: usize = 6;

/// Upper bound on collision-resolution attempts before giving up.
pub const MAX_COLLISION_ATTEMPTS: u64 = 10_000;

/// Codes that can never be issued as short links.
///
/// These are the service's own route names; a generated code equal to one
/// of them would be shadowed by the static route and never resolve.
const RESERVED_CODES: &[&str] = &["shorten", "health"];

/// Derives short codes from long URLs.
///
/// Pure and deterministic: for a fixed URL and a fixed set of taken codes,
/// [`CodeGenerator::generate`] always returns the same code. The struct
/// carries the tunable knobs (minimum width, retry bound) so they are
/// explicit construction-time configuration rather than scattered constants.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    min_length: usize,
    max_attempts: u64,
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(CODE_MIN_LENGTH, MAX_COLLISION_ATTEMPTS)
    }
}

impl CodeGenerator {
    /// Creates a generator producing codes at least `min_length` wide,
    /// trying at most `max_attempts` perturbations on collision.
    pub fn new(min_length: usize, max_attempts: u64) -> Self {
        Self {
            min_length,
            max_attempts,
        }
    }

    /// Generates a short code for `long_url` that is not in `taken`.
    ///
    /// # Algorithm
    ///
    /// 1. SHA-256 over the exact bytes of `long_url`, hex-encoded.
    /// 2. The first 8 hex characters parsed as an unsigned integer `base`.
    /// 3. `base` encoded in base-62, left-padded with `0` to the minimum
    ///    width. Longer encodings are kept as-is, never truncated.
    /// 4. While the code is taken or reserved, re-encode `base + c` for
    ///    `c = 1, 2, …`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when `max_attempts` perturbations all
    /// collide. Unbounded retrying could spin forever on pathological
    /// inputs, so exhaustion is an explicit error.
    pub fn generate(
        &self,
        long_url: &str,
        taken: &BTreeSet<String>,
    ) -> Result<String, AppError> {
        let base = hash_base(long_url);

        for counter in 0..=self.max_attempts {
            let code = self.encode_base62(base + counter);
            if Self::candidate_is_free(&code, taken) {
                return Ok(code);
            }
        }

        Err(AppError::internal("Short code space exhausted"))
    }

    /// A candidate is usable when it is neither taken nor a reserved route
    /// name.
    fn candidate_is_free(code: &str, taken: &BTreeSet<String>) -> bool {
        !taken.contains(code) && !RESERVED_CODES.contains(&code)
    }

    /// Encodes `value` as base-62, left-padded with `0` to the minimum
    /// width. Values too large for the minimum width keep their full
    /// encoding.
    pub fn encode_base62(&self, mut value: u64) -> String {
        let mut digits = Vec::new();

        while value > 0 {
            digits.push(ALPHABET[(value % 62) as usize]);
            value /= 62;
        }

        while digits.len() < self.min_length {
            digits.push(b'0');
        }

        digits.reverse();
        String::from_utf8(digits).expect("alphabet is ASCII")
    }
}

/// Hashes `long_url` and returns the integer spanned by the first 8 hex
/// characters of the digest.
fn hash_base(long_url: &str) -> u64 {
    let digest = Sha256::digest(long_url.as_bytes());
    let hex = hex::encode(digest);

    u64::from_str_radix(&hex[..8], 16).expect("8 hex characters always parse")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> CodeGenerator {
        CodeGenerator::default()
    }

    #[test]
    fn test_generate_is_deterministic() {
        let taken = BTreeSet::new();
        let first = generator().generate("https://example.com", &taken).unwrap();
        let second = generator().generate("https://example.com", &taken).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_produces_six_character_codes() {
        let taken = BTreeSet::new();
        let code = generator().generate("https://example.com", &taken).unwrap();

        assert_eq!(code.len(), 6);
    }

    #[test]
    fn test_generate_uses_base62_alphabet() {
        let taken = BTreeSet::new();

        for url in [
            "https://example.com",
            "https://example.com/a/very/long/path?with=query&and=params",
            "https://rust-lang.org",
        ] {
            let code = generator().generate(url, &taken).unwrap();
            assert!(
                code.bytes().all(|b| ALPHABET.contains(&b)),
                "code {code} contains characters outside the alphabet"
            );
        }
    }

    #[test]
    fn test_generate_differs_for_different_urls() {
        let taken = BTreeSet::new();
        let a = generator().generate("https://example.com/1", &taken).unwrap();
        let b = generator().generate("https://example.com/2", &taken).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_perturbs_on_collision() {
        let r#gen = generator();
        let mut taken = BTreeSet::new();

        let first = r#gen.generate("https://example.com", &taken).unwrap();
        taken.insert(first.clone());

        let second = r#gen.generate("https://example.com", &taken).unwrap();
        assert_ne!(first, second);

        // The perturbed code is the encoding of base + 1.
        let base = hash_base("https://example.com");
        assert_eq!(second, r#gen.encode_base62(base + 1));
    }

    #[test]
    fn test_generate_fails_when_attempts_exhausted() {
        let r#gen = CodeGenerator::new(CODE_MIN_LENGTH, 2);
        let base = hash_base("https://example.com");

        let taken: BTreeSet<String> =
            (0..=2).map(|c| r#gen.encode_base62(base + c)).collect();

        let result = r#gen.generate("https://example.com", &taken);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("exhausted"));
    }

    #[test]
    fn test_reserved_codes_are_never_free() {
        let taken = BTreeSet::new();

        for &reserved in RESERVED_CODES {
            assert!(
                !CodeGenerator::candidate_is_free(reserved, &taken),
                "reserved code '{reserved}' should not be issuable"
            );
        }
    }

    #[test]
    fn test_unreserved_candidate_is_free() {
        let mut taken = BTreeSet::new();
        assert!(CodeGenerator::candidate_is_free("2Wn7Xr", &taken));

        taken.insert("2Wn7Xr".to_string());
        assert!(!CodeGenerator::candidate_is_free("2Wn7Xr", &taken));
    }

    #[test]
    fn test_encode_pads_to_minimum_width() {
        let r#gen = generator();

        assert_eq!(r#gen.encode_base62(0), "000000");
        assert_eq!(r#gen.encode_base62(1), "000001");
        assert_eq!(r#gen.encode_base62(61), "00000Z");
    }

    #[test]
    fn test_encode_digit_value_order() {
        let r#gen = generator();

        // 10 is the first lowercase letter, 36 the first uppercase.
        assert_eq!(r#gen.encode_base62(10), "00000a");
        assert_eq!(r#gen.encode_base62(36), "00000A");
        assert_eq!(r#gen.encode_base62(62), "000010");
    }

    #[test]
    fn test_encode_does_not_truncate_large_values() {
        let r#gen = generator();

        let seven_wide = 62u64.pow(6);
        assert_eq!(r#gen.encode_base62(seven_wide), "1000000");
        assert_eq!(r#gen.encode_base62(seven_wide - 1), "ZZZZZZ");
    }

    #[test]
    fn test_distinct_urls_yield_distinct_codes_in_sequence() {
        let r#gen = generator();
        let mut taken = BTreeSet::new();

        for i in 0..100 {
            let code = r#gen
                .generate(&format!("https://example.com/page/{i}"), &taken)
                .unwrap();
            assert!(taken.insert(code), "duplicate code generated");
        }
    }
}
