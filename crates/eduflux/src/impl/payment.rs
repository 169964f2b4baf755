use iso8601_timestamp::Timestamp;

use crate::models::{Payment, User};
use crate::{Eduflux, EdufluxEvent, Result};

impl Payment {
    /// Record a confirmed purchase
    ///
    /// The caller has already confirmed the charge with the payment
    /// gateway; this appends the ledger entry and enrols the user as
    /// one store command, and returns both. The gateway's transaction
    /// id is trusted to be unique and rejected if seen before.
    pub async fn record(
        eduflux: &Eduflux,
        user_id: &str,
        course_id: &str,
        amount: f64,
        external_transaction_id: String,
    ) -> Result<(Payment, User)> {
        let payment = Payment {
            transaction_id: external_transaction_id,
            user_id: user_id.to_string(),
            course_id: course_id.to_string(),
            amount,
            timestamp: Timestamp::now_utc(),
        };

        let user = eduflux.database.record_purchase(&payment).await?;

        eduflux
            .publish_event(EdufluxEvent::PaymentRecorded {
                payment: payment.clone(),
            })
            .await;

        Ok((payment, user))
    }

    /// Payment history for a user, newest first
    pub async fn list_for_user(eduflux: &Eduflux, user_id: &str) -> Result<Vec<Payment>> {
        eduflux.database.list_transactions(user_id).await
    }
}
