use rand::Rng;

use crate::{Error, Result};

lazy_static! {
    static ref ARGON_CONFIG: argon2::Config<'static> = argon2::Config::default();
}

/// Normalise an email for lookup and uniqueness checks
///
/// Addresses are compared case-insensitively; nothing else is
/// stripped, `a.b+c@x.com` and `ab@x.com` remain distinct accounts.
pub fn normalise_email(original: &str) -> String {
    original.trim().to_lowercase()
}

/// Hash a password using argon2
pub fn hash_password(plaintext_password: String) -> Result<String> {
    argon2::hash_encoded(
        plaintext_password.as_bytes(),
        nanoid!(24).as_bytes(),
        &ARGON_CONFIG,
    )
    .map_err(|_| Error::InternalError)
}

/// Generate a 6-digit one-time passcode
pub fn generate_otp() -> String {
    let mut rng = rand::thread_rng();
    (0..6)
        .map(|_| char::from(b'0' + rng.gen_range(0..10)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_case_and_whitespace() {
        assert_eq!(normalise_email("  Alex@EduFlux.AI "), "alex@eduflux.ai");
    }

    #[test]
    fn preserves_aliases_and_dots() {
        assert_eq!(normalise_email("a.b+c@x.com"), "a.b+c@x.com");
    }

    #[test]
    fn otp_is_six_digits() {
        for _ in 0..32 {
            let otp = generate_otp();
            assert_eq!(otp.len(), 6);
            assert!(otp.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn hashes_verify() {
        let hash = hash_password("valid password".into()).unwrap();
        assert!(argon2::verify_encoded(&hash, b"valid password").unwrap());
        assert!(!argon2::verify_encoded(&hash, b"wrong password").unwrap());
    }
}
