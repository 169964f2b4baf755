use iso8601_timestamp::Timestamp;

/// Append-only ledger entry for a confirmed course purchase
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Payment {
    /// Identifier reported by the payment gateway, unique per charge
    pub transaction_id: String,

    /// Paying user Id
    pub user_id: String,

    /// Purchased course Id
    pub course_id: String,

    /// Amount charged
    pub amount: f64,

    /// Time the charge was recorded
    pub timestamp: Timestamp,
}
