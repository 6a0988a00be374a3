use crate::domain::Error;

/// Prototype account on a binary floating point balance.
///
/// Unlike [`Account`](crate::domain::Account) it performs no validation on
/// deposits: negative, NaN and infinite amounts are all applied as plain
/// IEEE 754 additions, and large sums overflow to infinity.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FloatAccount {
    balance: f64,
}

impl FloatAccount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn deposit(&mut self, amount: f64) -> f64 {
        self.balance += amount;
        tracing::trace!(amount, balance = self.balance, "float deposit");
        self.balance
    }

    /// Fails on an empty (`<= 0`) balance or when `amount` exceeds it.
    /// A negative `amount` is not rejected.
    pub fn withdraw(&mut self, amount: f64) -> Result<f64, Error> {
        if self.balance <= 0.0 {
            return Err(Error::EmptyAccount);
        }
        if amount > self.balance {
            return Err(Error::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        tracing::trace!(amount, balance = self.balance, "float withdrawal");
        Ok(self.balance)
    }
}
