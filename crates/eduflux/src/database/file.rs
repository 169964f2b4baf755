use std::path::PathBuf;
use std::sync::Arc;

use futures::lock::Mutex;

use crate::models::{
    Course, CourseFilter, OtpEntry, OtpRegistry, Payment, ProblemSet, Resource, User,
};
use crate::{Error, Result, Success};

use super::definition::AbstractDatabase;
use super::document::Document;
use super::seed;

/// File-backed backend persisting the document as JSON
///
/// Mutating commands stage their change on a copy of the document,
/// write that copy to disk, and only then commit it into the shared
/// slot. A failed write leaves both the file and the in-memory
/// document exactly as they were.
#[derive(Clone)]
pub struct FileDb {
    path: PathBuf,
    document: Arc<Mutex<Document>>,
}

impl FileDb {
    /// Open or create the store at `path`
    ///
    /// A missing file is first-run and gets the seed dataset. A file
    /// that exists but fails to parse is a fatal `CorruptDocument`,
    /// never a silent re-seed.
    pub async fn open(path: PathBuf) -> Result<FileDb> {
        let document = match async_std::fs::read_to_string(&path).await {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|_| Error::CorruptDocument)?
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!("Seeding document store on first run: {:?}", path);

                let document = seed::initial_document()?;
                write_document(&path, &document).await?;
                document
            }
            Err(_) => {
                return Err(Error::DatabaseError {
                    operation: "open",
                    with: "document",
                })
            }
        };

        Ok(FileDb {
            path,
            document: Arc::new(Mutex::new(document)),
        })
    }

}

async fn write_document(path: &PathBuf, document: &Document) -> Success {
    let contents = serde_json::to_string_pretty(document).map_err(|_| Error::InternalError)?;

    async_std::fs::write(path, contents)
        .await
        .map_err(|_| Error::DatabaseError {
            operation: "write",
            with: "document",
        })
}

#[async_trait]
impl AbstractDatabase for FileDb {
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
        let mut document = self.document.lock().await;
        let mut staged = document.clone();
        staged.insert_user(user)?;
        write_document(&self.path, &staged).await?;
        *document = staged;
        Ok(())
    }

    /// Replace a user record wholesale
    async fn replace_user(&self, user: &User) -> Success {
        let mut document = self.document.lock().await;
        let mut staged = document.clone();
        staged.replace_user(user)?;
        write_document(&self.path, &staged).await?;
        *document = staged;
        Ok(())
    }

    /// Delete user by id
    async fn delete_user(&self, id: &str) -> Success {
        let mut document = self.document.lock().await;
        let mut staged = document.clone();
        staged.delete_user(id)?;
        write_document(&self.path, &staged).await?;
        *document = staged;
        Ok(())
    }

    /// Add a course to a user's enrolled set
    async fn enroll_user(&self, user_id: &str, course_id: &str) -> Result<User> {
        let mut document = self.document.lock().await;
        let mut staged = document.clone();
        let user = staged.enroll_user(user_id, course_id)?;
        write_document(&self.path, &staged).await?;
        *document = staged;
        Ok(user)
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
        let mut document = self.document.lock().await;
        let mut staged = document.clone();
        staged.insert_course(course)?;
        write_document(&self.path, &staged).await?;
        *document = staged;
        Ok(())
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
        let mut document = self.document.lock().await;
        let mut staged = document.clone();
        staged.store_otp(registry, email, entry)?;
        write_document(&self.path, &staged).await?;
        *document = staged;
        Ok(())
    }

    /// Verify and consume a passcode
    ///
    /// Expiry removal must land on disk even though the verify itself
    /// failed, so those entries commit too.
    async fn take_otp(&self, registry: OtpRegistry, email: &str, code: &str) -> Success {
        let mut document = self.document.lock().await;
        let mut staged = document.clone();
        let outcome = staged.take_otp(registry, email, code);

        match outcome {
            Ok(()) | Err(Error::ExpiredOtp) => {
                write_document(&self.path, &staged).await?;
                *document = staged;
            }
            _ => {}
        }

        outcome
    }

    /// Append a payment and enrol the payer in one command
    async fn record_purchase(&self, payment: &Payment) -> Result<User> {
        let mut document = self.document.lock().await;
        let mut staged = document.clone();
        let user = staged.record_purchase(payment)?;
        write_document(&self.path, &staged).await?;
        *document = staged;
        Ok(user)
    }

    /// Payments for a user, newest first
    async fn list_transactions(&self, user_id: &str) -> Result<Vec<Payment>> {
        Ok(self.document.lock().await.transactions_for_user(user_id))
    }
}
