use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid amount {amount}: {reason}")]
    InvalidAmount {
        amount: Decimal,
        reason: &'static str,
    },

    #[error("Depositing {amount} into balance {balance} overflows")]
    Overflow { balance: Decimal, amount: Decimal },

    #[error("Cannot withdraw from an empty account")]
    EmptyAccount,

    #[error("Cannot withdraw {requested} with a balance of {available}")]
    InsufficientFunds { requested: f64, available: f64 },

    #[error("Malformed account number: {0}")]
    MalformedAccountNumber(String),
}

impl Error {
    pub(crate) fn invalid_amount(amount: Decimal, reason: &'static str) -> Self {
        Self::InvalidAmount { amount, reason }
    }
}
