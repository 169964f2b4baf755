use chrono::Duration;
use iso8601_timestamp::Timestamp;

use crate::models::{OtpEntry, OtpRegistry, Role, User};
use crate::util::{generate_otp, hash_password, normalise_email};
use crate::{Eduflux, EdufluxEvent, Error, Result, Success};

fn expiry_after(seconds: i64) -> Timestamp {
    Timestamp::from_unix_timestamp_ms(
        chrono::Utc::now()
            .checked_add_signed(Duration::seconds(seconds))
            .expect("failed to checked_add_signed")
            .timestamp_millis(),
    )
}

/// Issue a passcode and hand it to the delivery hook
async fn issue_otp(eduflux: &Eduflux, registry: OtpRegistry, email_normalised: &str) -> Success {
    let seconds = match registry {
        OtpRegistry::Registration => eduflux.config.otp.expire_registration,
        OtpRegistry::Login => eduflux.config.otp.expire_login,
    };

    let code = generate_otp();
    let entry = OtpEntry {
        code: code.clone(),
        expires: expiry_after(seconds),
    };

    eduflux
        .database
        .store_otp(registry, email_normalised, &entry)
        .await?;

    eduflux
        .publish_event(EdufluxEvent::OtpIssued {
            registry,
            email: email_normalised.to_string(),
            code,
        })
        .await;

    Ok(())
}

impl User {
    /// Begin registration: insert an unverified student and issue a
    /// registration passcode
    pub async fn request_registration(
        eduflux: &Eduflux,
        name: String,
        email: String,
        plaintext_password: String,
    ) -> Result<User> {
        let password = hash_password(plaintext_password)?;
        let email_normalised = normalise_email(&email);

        if eduflux
            .database
            .find_user_by_normalised_email(&email_normalised)
            .await?
            .is_some()
        {
            return Err(Error::EmailTaken);
        }

        let user = User {
            id: format!("student_{}", ulid::Ulid::new()),
            name,
            email,
            email_normalised: email_normalised.clone(),
            password,
            role: Role::Student,
            verified: false,
            enrolled_courses: vec![],
            external_accounts: vec![],
        };

        // The store re-checks uniqueness under its own lock
        eduflux.database.insert_user(&user).await?;

        issue_otp(eduflux, OtpRegistry::Registration, &email_normalised).await?;

        eduflux
            .publish_event(EdufluxEvent::CreateUser { user: user.clone() })
            .await;

        Ok(user)
    }

    /// Complete registration by consuming the passcode
    pub async fn confirm_registration(eduflux: &Eduflux, email: &str, code: &str) -> Result<User> {
        let email_normalised = normalise_email(email);

        eduflux
            .database
            .take_otp(OtpRegistry::Registration, &email_normalised, code)
            .await?;

        let mut user = eduflux
            .database
            .find_user_by_normalised_email(&email_normalised)
            .await?
            .ok_or(Error::UnknownUser)?;

        user.verified = true;
        eduflux.database.replace_user(&user).await?;

        Ok(user)
    }

    /// Log in with email and password
    pub async fn login(eduflux: &Eduflux, email: &str, plaintext_password: &str) -> Result<User> {
        let email_normalised = normalise_email(email);

        let user = eduflux
            .database
            .find_user_by_normalised_email(&email_normalised)
            .await?
            .ok_or(Error::InvalidCredentials)?;

        user.verify_password(plaintext_password)?;

        if !user.verified {
            return Err(Error::UnverifiedAccount);
        }

        Ok(user)
    }

    /// Issue a login passcode for a verified account
    pub async fn request_login_otp(eduflux: &Eduflux, email: &str) -> Success {
        let email_normalised = normalise_email(email);

        let user = eduflux
            .database
            .find_user_by_normalised_email(&email_normalised)
            .await?
            .ok_or(Error::UnknownUser)?;

        if !user.verified {
            return Err(Error::UnverifiedAccount);
        }

        issue_otp(eduflux, OtpRegistry::Login, &email_normalised).await
    }

    /// Log in by consuming a login passcode
    ///
    /// Does not touch the verified flag; only `request_login_otp`
    /// gates on it.
    pub async fn login_with_otp(eduflux: &Eduflux, email: &str, code: &str) -> Result<User> {
        let email_normalised = normalise_email(email);

        eduflux
            .database
            .take_otp(OtpRegistry::Login, &email_normalised, code)
            .await?;

        eduflux
            .database
            .find_user_by_normalised_email(&email_normalised)
            .await?
            .ok_or(Error::UnknownUser)
    }

    /// Replace this record in the store
    ///
    /// Callers holding a session must re-issue their token afterwards,
    /// the embedded snapshot goes stale otherwise.
    pub async fn update(mut self, eduflux: &Eduflux) -> Result<User> {
        self.email_normalised = normalise_email(&self.email);
        eduflux.database.replace_user(&self).await?;
        Ok(self)
    }

    /// Admin command: create a user directly, without the OTP flow
    pub async fn create_by_admin(
        eduflux: &Eduflux,
        name: String,
        email: String,
        plaintext_password: String,
        role: Role,
        verified: bool,
    ) -> Result<User> {
        let password = hash_password(plaintext_password)?;
        let email_normalised = normalise_email(&email);

        let user = User {
            id: format!("{}_{}", role, ulid::Ulid::new()),
            name,
            email,
            email_normalised,
            password,
            role,
            verified,
            enrolled_courses: vec![],
            external_accounts: vec![],
        };

        eduflux.database.insert_user(&user).await?;

        eduflux
            .publish_event(EdufluxEvent::CreateUser { user: user.clone() })
            .await;

        Ok(user)
    }

    /// Admin command: delete a user by id
    pub async fn delete(eduflux: &Eduflux, id: &str) -> Success {
        eduflux.database.delete_user(id).await
    }

    /// Fetch the authoritative record by id
    pub async fn fetch(eduflux: &Eduflux, id: &str) -> Result<User> {
        eduflux.database.find_user(id).await
    }

    /// List all users
    pub async fn list(eduflux: &Eduflux) -> Result<Vec<User>> {
        eduflux.database.list_users().await
    }

    /// Verify a user's password is correct
    pub fn verify_password(&self, plaintext_password: &str) -> Success {
        argon2::verify_encoded(&self.password, plaintext_password.as_bytes())
            .map(|v| {
                if v {
                    Ok(())
                } else {
                    Err(Error::InvalidCredentials)
                }
            })
            // To prevent user enumeration, we should ignore
            // the error and pretend the password is wrong.
            .map_err(|_| Error::InvalidCredentials)?
    }
}
