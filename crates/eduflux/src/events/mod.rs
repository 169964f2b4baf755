use crate::models::{OtpRegistry, Payment, User};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "event_type")]
pub enum EdufluxEvent {
    CreateUser {
        user: User,
    },
    /// A passcode was issued and must be delivered out-of-band
    ///
    /// Delivery itself (email, dev alert) is an external concern;
    /// subscribers receive the code and own getting it to the user.
    OtpIssued {
        registry: OtpRegistry,
        email: String,
        code: String,
    },
    SessionCreated {
        user_id: String,
    },
    SessionDestroyed {
        user_id: String,
    },
    PaymentRecorded {
        payment: Payment,
    },
}
