use crate::models::{
    Course, CourseFilter, OtpEntry, OtpRegistry, Payment, ProblemSet, Resource, User,
};
use crate::{Result, Success};

/// Document store command/query API
///
/// Every method is atomic over the whole document: the backend takes
/// its lock once, applies the command, and releases it, so no two
/// commands interleave their read and write.
#[async_trait]
pub trait AbstractDatabase: std::marker::Sync + std::marker::Send {
    /// Find user by id
    async fn find_user(&self, id: &str) -> Result<User>;

    /// Find user by normalised email
    async fn find_user_by_normalised_email(&self, email: &str) -> Result<Option<User>>;

    /// List all users
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Insert a new user
    async fn insert_user(&self, user: &User) -> Success;

    /// Replace a user record wholesale
    async fn replace_user(&self, user: &User) -> Success;

    /// Delete user by id
    async fn delete_user(&self, id: &str) -> Success;

    /// Add a course to a user's enrolled set
    async fn enroll_user(&self, user_id: &str, course_id: &str) -> Result<User>;

    /// Find course by id
    async fn find_course(&self, id: &str) -> Result<Course>;

    /// Filtered catalog search
    async fn search_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>>;

    /// Insert a new course
    async fn insert_course(&self, course: &Course) -> Success;

    /// Distinct category tags
    async fn list_course_tags(&self) -> Result<Vec<String>>;

    /// List all learning resources
    async fn list_resources(&self) -> Result<Vec<Resource>>;

    /// List all practice problem sets
    async fn list_problem_sets(&self) -> Result<Vec<ProblemSet>>;

    /// Store a passcode, overwriting any live entry for this email
    async fn store_otp(&self, registry: OtpRegistry, email: &str, entry: &OtpEntry) -> Success;

    /// Verify and consume a passcode
    async fn take_otp(&self, registry: OtpRegistry, email: &str, code: &str) -> Success;

    /// Append a payment and enrol the payer in one command
    async fn record_purchase(&self, payment: &Payment) -> Result<User>;

    /// Payments for a user, newest first
    async fn list_transactions(&self, user_id: &str) -> Result<Vec<Payment>>;
}
