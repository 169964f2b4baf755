#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Error {
    IncorrectData {
        with: &'static str,
    },
    DatabaseError {
        operation: &'static str,
        with: &'static str,
    },
    InternalError,

    /// The persisted document exists but cannot be parsed.
    ///
    /// Reported at startup and never silently repaired, a corrupt
    /// store must not be replaced with seed data.
    CorruptDocument,

    EmailTaken,
    UnknownUser,
    UnknownCourse,
    UnverifiedAccount,
    InvalidCredentials,

    UnknownOtp,
    ExpiredOtp,
    InvalidOtp,

    AlreadyEnrolled,
    DuplicateTransaction,

    ServiceFailed {
        service: &'static str,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
pub type Success = Result<()>;
