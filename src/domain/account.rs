use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{AccountNumber, Error};

/// A single account holding an exact decimal balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    account_number: AccountNumber, // 4 digits, dash, 5 letters; not enforced
    balance: Decimal,
}

impl Account {
    pub fn new(account_number: impl Into<AccountNumber>) -> Self {
        let account_number = account_number.into();
        if !account_number.is_well_formed() {
            tracing::warn!(account = %account_number, "account number is not in NNNN-AAAAA form");
        }

        Self {
            account_number,
            balance: Decimal::ZERO,
        }
    }

    pub fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    pub fn set_account_number(&mut self, account_number: impl Into<AccountNumber>) {
        self.account_number = account_number.into();
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Adds `amount` to the balance.
    ///
    /// # Known defect
    ///
    /// The returned value is the new balance *plus `amount` again*
    /// (`new_balance + amount`), not the new balance. Callers relying on the
    /// stored value should read [`Account::balance`] instead. This is kept
    /// for compatibility and is most likely unintended.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidAmount`] if `amount <= 0`
    /// - [`Error::Overflow`] if either the new balance or the returned value
    ///   is not representable
    ///
    /// The balance is unchanged when an error is returned.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, Error> {
        if amount <= Decimal::ZERO {
            tracing::warn!(account = %self.account_number, %amount, "deposit rejected");
            return Err(Error::invalid_amount(amount, "deposit must be positive"));
        }

        let overflow = || Error::Overflow {
            balance: self.balance,
            amount,
        };
        let new_balance = self.balance.checked_add(amount).ok_or_else(overflow)?;
        let reported = new_balance.checked_add(amount).ok_or_else(overflow)?;

        self.balance = new_balance;
        tracing::debug!(account = %self.account_number, %amount, balance = %self.balance, "deposit");

        Ok(reported)
    }

    /// Removes `amount` from the balance and returns the new balance.
    ///
    /// Fails with [`Error::InvalidAmount`] unless `0 < amount <= balance`.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, Error> {
        if amount <= Decimal::ZERO || amount > self.balance {
            tracing::warn!(
                account = %self.account_number,
                %amount,
                balance = %self.balance,
                "withdrawal rejected"
            );
            return Err(Error::invalid_amount(
                amount,
                "cannot withdraw negative or more than current balance",
            ));
        }

        // 0 < amount <= balance, cannot underflow
        self.balance -= amount;
        tracing::debug!(account = %self.account_number, %amount, balance = %self.balance, "withdrawal");

        Ok(self.balance)
    }
}

impl core::fmt::Display for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{},{}", self.account_number, self.balance)
    }
}
