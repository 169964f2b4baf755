use std::sync::Arc;

use futures::lock::Mutex;

use crate::models::{
    Course, CourseFilter, OtpEntry, OtpRegistry, Payment, ProblemSet, Resource, User,
};
use crate::{Result, Success};

use super::definition::AbstractDatabase;
use super::document::Document;
use super::seed;

/// In-memory backend, used by tests and ephemeral sessions
#[derive(Default, Clone)]
pub struct MemoryDb {
    document: Arc<Mutex<Document>>,
}

impl MemoryDb {
    /// Construct a store populated with the first-run seed dataset
    pub fn seeded() -> Result<MemoryDb> {
        Ok(MemoryDb {
            document: Arc::new(Mutex::new(seed::initial_document()?)),
        })
    }
}

#[async_trait]
impl AbstractDatabase for MemoryDb {
    /// Find user by id
    async fn find_user(&self, id: &str) -> Result<User> {
        self.document.lock().await.find_user(id)
    }

    /// Find user by normalised email
    async fn find_user_by_normalised_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .document
            .lock()
            .await
            .find_user_by_normalised_email(email))
    }

    /// List all users
    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.document.lock().await.users.clone())
    }

    /// Insert a new user
    async fn insert_user(&self, user: &User) -> Success {
        self.document.lock().await.insert_user(user)
    }

    /// Replace a user record wholesale
    async fn replace_user(&self, user: &User) -> Success {
        self.document.lock().await.replace_user(user)
    }

    /// Delete user by id
    async fn delete_user(&self, id: &str) -> Success {
        self.document.lock().await.delete_user(id)
    }

    /// Add a course to a user's enrolled set
    async fn enroll_user(&self, user_id: &str, course_id: &str) -> Result<User> {
        self.document.lock().await.enroll_user(user_id, course_id)
    }

    /// Find course by id
    async fn find_course(&self, id: &str) -> Result<Course> {
        self.document.lock().await.find_course(id)
    }

    /// Filtered catalog search
    async fn search_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>> {
        Ok(self.document.lock().await.search_courses(filter))
    }

    /// Insert a new course
    async fn insert_course(&self, course: &Course) -> Success {
        self.document.lock().await.insert_course(course)
    }

    /// Distinct category tags
    async fn list_course_tags(&self) -> Result<Vec<String>> {
        Ok(self.document.lock().await.course_tags())
    }

    /// List all learning resources
    async fn list_resources(&self) -> Result<Vec<Resource>> {
        Ok(self.document.lock().await.resources.clone())
    }

    /// List all practice problem sets
    async fn list_problem_sets(&self) -> Result<Vec<ProblemSet>> {
        Ok(self.document.lock().await.problem_sets.clone())
    }

    /// Store a passcode, overwriting any live entry for this email
    async fn store_otp(&self, registry: OtpRegistry, email: &str, entry: &OtpEntry) -> Success {
        self.document.lock().await.store_otp(registry, email, entry)
    }

    /// Verify and consume a passcode
    async fn take_otp(&self, registry: OtpRegistry, email: &str, code: &str) -> Success {
        self.document.lock().await.take_otp(registry, email, code)
    }

    /// Append a payment and enrol the payer in one command
    async fn record_purchase(&self, payment: &Payment) -> Result<User> {
        self.document.lock().await.record_purchase(payment)
    }

    /// Payments for a user, newest first
    async fn list_transactions(&self, user_id: &str) -> Result<Vec<Payment>> {
        Ok(self.document.lock().await.transactions_for_user(user_id))
    }
}
