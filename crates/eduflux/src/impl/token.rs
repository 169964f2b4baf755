use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{de::DeserializeOwned, Serialize};

use crate::models::{Secret, TokenClaims, User};
use crate::Eduflux;

impl Secret {
    /// Sign claims with secret
    pub fn sign_claims<T>(&self, claims: &T) -> String
    where
        T: Serialize,
    {
        let secret = self.expose().as_bytes();

        let (header, key) = (Header::default(), EncodingKey::from_secret(secret));

        jsonwebtoken::encode(&header, claims, &key).expect("JWT encoding should not fail")
    }

    /// Validate claims with secret
    ///
    /// Signature and structure only; expiry is a separate check so a
    /// caller can distinguish "malformed" from "stale".
    pub fn validate_claims<T>(&self, token: &str) -> Result<T, jsonwebtoken::errors::Error>
    where
        T: DeserializeOwned,
    {
        let secret = self.expose().as_bytes();

        let mut validation = Validation::default();
        validation.validate_exp = false;

        let key = DecodingKey::from_secret(secret);

        jsonwebtoken::decode(token, &key, &validation).map(|token| token.claims)
    }
}

impl TokenClaims {
    /// Pure comparison against wall-clock time
    pub fn is_expired(&self) -> bool {
        chrono::Utc::now().timestamp() >= self.exp
    }
}

impl Eduflux {
    /// Issue a session token embedding a user snapshot and an expiry
    /// one session TTL from now
    pub fn create_token(&self, user: &User) -> String {
        let claims = TokenClaims {
            user: user.clone(),
            exp: chrono::Utc::now().timestamp() + self.config.session.expire_session,
        };

        self.config.session.secret.sign_claims(&claims)
    }

    /// Decode a session token
    ///
    /// Fails soft: malformed, truncated or forged input yields `None`,
    /// never an error.
    pub fn decode_token(&self, token: &str) -> Option<TokenClaims> {
        self.config.session.secret.validate_claims(token).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::for_test;

    #[async_std::test]
    async fn round_trip_preserves_user() {
        let (eduflux, _receiver) = for_test().await;
        let user = eduflux.database.find_user("student01").await.unwrap();

        let token = eduflux.create_token(&user);
        let claims = eduflux.decode_token(&token).expect("claims");

        assert_eq!(claims.user, user);
        assert!(!claims.is_expired());
    }

    #[async_std::test]
    async fn past_expiry_is_expired() {
        let claims = TokenClaims {
            user: crate::database::seed::initial_document().unwrap().users[0].clone(),
            exp: chrono::Utc::now().timestamp(),
        };

        assert!(claims.is_expired());
    }

    #[async_std::test]
    async fn malformed_token_fails_soft() {
        let (eduflux, _receiver) = for_test().await;

        assert!(eduflux.decode_token("").is_none());
        assert!(eduflux.decode_token("not.a.token").is_none());
    }

    #[async_std::test]
    async fn forged_signature_fails_soft() {
        let (eduflux, _receiver) = for_test().await;
        let user = eduflux.database.find_user("student01").await.unwrap();

        let other = Secret::new("a_different_key".to_string());
        let forged = other.sign_claims(&TokenClaims {
            user,
            exp: chrono::Utc::now().timestamp() + 3600,
        });

        assert!(eduflux.decode_token(&forged).is_none());
    }
}
