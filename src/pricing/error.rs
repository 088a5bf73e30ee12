use super::models::RedemptionReason;
use thiserror::Error;

/// Hard stop raised when a redemption cannot be settled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("insufficient points: requested {requested}, available {available}")]
    InsufficientPoints { requested: u64, available: u64 },

    #[error("points exceed total: requested {requested}, total {total}")]
    ExceedsTotal { requested: u64, total: u64 },
}

impl PaymentError {
    pub fn reason(&self) -> RedemptionReason {
        match self {
            PaymentError::InsufficientPoints { .. } => RedemptionReason::InsufficientPoints,
            PaymentError::ExceedsTotal { .. } => RedemptionReason::ExceedsTotal,
        }
    }
}
