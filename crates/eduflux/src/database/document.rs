use std::collections::HashMap;

use crate::models::{
    Course, CourseFilter, OtpEntry, OtpRegistry, Payment, PriceFilter, PriceType, ProblemSet,
    Resource, User,
};
use crate::{Error, Result, Success};

/// The entire persisted state of the platform
///
/// Every store command is one read-modify-write of this document under
/// the backend's lock; callers never observe a partial write.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct Document {
    /// Registered users
    pub users: Vec<User>,

    /// Course catalog
    pub courses: Vec<Course>,

    /// Curated learning resources
    pub resources: Vec<Resource>,

    /// Categorised practice problems
    pub problem_sets: Vec<ProblemSet>,

    /// Live registration passcodes by normalised email
    pub otp_store: HashMap<String, OtpEntry>,

    /// Live login passcodes by normalised email
    pub login_otp_store: HashMap<String, OtpEntry>,

    /// Append-only payment ledger
    pub transactions: Vec<Payment>,
}

impl Document {
    pub fn find_user(&self, id: &str) -> Result<User> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or(Error::UnknownUser)
    }

    pub fn find_user_by_normalised_email(&self, email: &str) -> Option<User> {
        self.users
            .iter()
            .find(|user| user.email_normalised == email)
            .cloned()
    }

    /// Insert a new user, rejecting duplicate emails on every path
    pub fn insert_user(&mut self, user: &User) -> Success {
        if self
            .users
            .iter()
            .any(|existing| existing.email_normalised == user.email_normalised)
        {
            return Err(Error::EmailTaken);
        }

        self.users.push(user.clone());
        Ok(())
    }

    /// Replace a user record wholesale
    ///
    /// The email uniqueness invariant holds here too: the new record
    /// may not adopt an email another user already owns.
    pub fn replace_user(&mut self, user: &User) -> Success {
        if self
            .users
            .iter()
            .any(|other| other.id != user.id && other.email_normalised == user.email_normalised)
        {
            return Err(Error::EmailTaken);
        }

        let slot = self
            .users
            .iter_mut()
            .find(|existing| existing.id == user.id)
            .ok_or(Error::UnknownUser)?;

        *slot = user.clone();
        Ok(())
    }

    pub fn delete_user(&mut self, id: &str) -> Success {
        let before = self.users.len();
        self.users.retain(|user| user.id != id);

        if self.users.len() < before {
            Ok(())
        } else {
            Err(Error::UnknownUser)
        }
    }

    /// Add a course to a user's enrolled set
    ///
    /// Fails with `AlreadyEnrolled` rather than appending a duplicate,
    /// so two racing enrol calls cannot both succeed.
    pub fn enroll_user(&mut self, user_id: &str, course_id: &str) -> Result<User> {
        if !self.courses.iter().any(|course| course.id == course_id) {
            return Err(Error::UnknownCourse);
        }

        let user = self
            .users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or(Error::UnknownUser)?;

        if user.enrolled_courses.iter().any(|id| id == course_id) {
            return Err(Error::AlreadyEnrolled);
        }

        user.enrolled_courses.push(course_id.to_string());
        Ok(user.clone())
    }

    pub fn find_course(&self, id: &str) -> Result<Course> {
        self.courses
            .iter()
            .find(|course| course.id == id)
            .cloned()
            .ok_or(Error::UnknownCourse)
    }

    /// Filtered catalog search, predicates compose with logical AND
    pub fn search_courses(&self, filter: &CourseFilter) -> Vec<Course> {
        self.courses
            .iter()
            .filter(|course| {
                if let Some(term) = &filter.search_term {
                    let term = term.to_lowercase();
                    if !course.title.to_lowercase().contains(&term)
                        && !course.description.to_lowercase().contains(&term)
                        && !course.instructor.to_lowercase().contains(&term)
                    {
                        return false;
                    }
                }

                if let Some(tag) = &filter.tag {
                    if !course.tags.iter().any(|t| t == tag) {
                        return false;
                    }
                }

                match filter.price {
                    PriceFilter::All => true,
                    PriceFilter::Free => course.price_type == PriceType::Free,
                    PriceFilter::Paid => course.price_type == PriceType::Paid,
                }
            })
            .cloned()
            .collect()
    }

    pub fn insert_course(&mut self, course: &Course) -> Success {
        self.courses.insert(0, course.clone());
        Ok(())
    }

    /// Distinct category tags in first-seen order
    ///
    /// `Free` is a monetisation sentinel, not a category, and is
    /// excluded whatever its casing.
    pub fn course_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();

        for course in &self.courses {
            for tag in &course.tags {
                if tag.to_lowercase() != "free" && !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }

        tags
    }

    fn registry_mut(&mut self, registry: OtpRegistry) -> &mut HashMap<String, OtpEntry> {
        match registry {
            OtpRegistry::Registration => &mut self.otp_store,
            OtpRegistry::Login => &mut self.login_otp_store,
        }
    }

    /// Store a passcode, overwriting any live entry for this email
    pub fn store_otp(&mut self, registry: OtpRegistry, email: &str, entry: &OtpEntry) -> Success {
        self.registry_mut(registry)
            .insert(email.to_string(), entry.clone());
        Ok(())
    }

    /// Verify and consume a passcode
    ///
    /// An expired entry is removed on detection, a mismatched code
    /// leaves the entry in place for another attempt.
    pub fn take_otp(&mut self, registry: OtpRegistry, email: &str, code: &str) -> Success {
        let store = self.registry_mut(registry);

        let entry = store.get(email).ok_or(Error::UnknownOtp)?;

        if entry.is_expired() {
            store.remove(email);
            return Err(Error::ExpiredOtp);
        }

        if entry.code != code {
            return Err(Error::InvalidOtp);
        }

        store.remove(email);
        Ok(())
    }

    /// Record a confirmed purchase: ledger append plus enrolment
    ///
    /// Both effects land in the same document write, a paid-but-not-
    /// enrolled state is never observable.
    pub fn record_purchase(&mut self, payment: &Payment) -> Result<User> {
        if self
            .transactions
            .iter()
            .any(|tx| tx.transaction_id == payment.transaction_id)
        {
            return Err(Error::DuplicateTransaction);
        }

        if !self
            .courses
            .iter()
            .any(|course| course.id == payment.course_id)
        {
            return Err(Error::UnknownCourse);
        }

        let user = self
            .users
            .iter_mut()
            .find(|user| user.id == payment.user_id)
            .ok_or(Error::UnknownUser)?;

        self.transactions.push(payment.clone());

        if !user.enrolled_courses.contains(&payment.course_id) {
            user.enrolled_courses.push(payment.course_id.clone());
        }

        Ok(user.clone())
    }

    /// Payments for a user, newest first
    pub fn transactions_for_user(&self, user_id: &str) -> Vec<Payment> {
        let mut transactions: Vec<Payment> = self
            .transactions
            .iter()
            .filter(|tx| tx.user_id == user_id)
            .cloned()
            .collect();

        transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        transactions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use iso8601_timestamp::Timestamp;

    fn user(id: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            name: "Test".to_string(),
            email: email.to_string(),
            email_normalised: crate::util::normalise_email(email),
            password: "hash".to_string(),
            role: Role::Student,
            verified: true,
            enrolled_courses: vec![],
            external_accounts: vec![],
        }
    }

    #[test]
    fn rejects_duplicate_email_case_insensitive() {
        let mut document = Document::default();
        document.insert_user(&user("u1", "a@x.com")).unwrap();

        assert_eq!(
            document.insert_user(&user("u2", "A@X.COM")),
            Err(Error::EmailTaken)
        );
    }

    #[test]
    fn replace_may_not_steal_email() {
        let mut document = Document::default();
        document.insert_user(&user("u1", "a@x.com")).unwrap();
        document.insert_user(&user("u2", "b@x.com")).unwrap();

        let stolen = user("u2", "a@x.com");
        assert_eq!(document.replace_user(&stolen), Err(Error::EmailTaken));
    }

    #[test]
    fn otp_is_single_use() {
        let mut document = Document::default();
        let entry = OtpEntry {
            code: "123456".to_string(),
            expires: Timestamp::from_unix_timestamp_ms(
                chrono::Utc::now().timestamp_millis() + 60_000,
            ),
        };

        document
            .store_otp(OtpRegistry::Login, "a@x.com", &entry)
            .unwrap();

        assert!(document
            .take_otp(OtpRegistry::Login, "a@x.com", "123456")
            .is_ok());
        assert_eq!(
            document.take_otp(OtpRegistry::Login, "a@x.com", "123456"),
            Err(Error::UnknownOtp)
        );
    }

    #[test]
    fn expired_otp_is_removed_on_detection() {
        let mut document = Document::default();
        let entry = OtpEntry {
            code: "123456".to_string(),
            expires: Timestamp::from_unix_timestamp_ms(
                chrono::Utc::now().timestamp_millis() - 1_000,
            ),
        };

        document
            .store_otp(OtpRegistry::Registration, "a@x.com", &entry)
            .unwrap();

        assert_eq!(
            document.take_otp(OtpRegistry::Registration, "a@x.com", "123456"),
            Err(Error::ExpiredOtp)
        );
        assert_eq!(
            document.take_otp(OtpRegistry::Registration, "a@x.com", "123456"),
            Err(Error::UnknownOtp)
        );
    }

    #[test]
    fn mismatched_otp_keeps_entry() {
        let mut document = Document::default();
        let entry = OtpEntry {
            code: "123456".to_string(),
            expires: Timestamp::from_unix_timestamp_ms(
                chrono::Utc::now().timestamp_millis() + 60_000,
            ),
        };

        document
            .store_otp(OtpRegistry::Login, "a@x.com", &entry)
            .unwrap();

        assert_eq!(
            document.take_otp(OtpRegistry::Login, "a@x.com", "000000"),
            Err(Error::InvalidOtp)
        );
        assert!(document
            .take_otp(OtpRegistry::Login, "a@x.com", "123456")
            .is_ok());
    }

    #[test]
    fn registries_are_independent() {
        let mut document = Document::default();
        let entry = OtpEntry {
            code: "123456".to_string(),
            expires: Timestamp::from_unix_timestamp_ms(
                chrono::Utc::now().timestamp_millis() + 60_000,
            ),
        };

        document
            .store_otp(OtpRegistry::Registration, "a@x.com", &entry)
            .unwrap();

        assert_eq!(
            document.take_otp(OtpRegistry::Login, "a@x.com", "123456"),
            Err(Error::UnknownOtp)
        );
    }
}
