// =============================================================================
// Encapsulation: state only reachable through validated methods
// =============================================================================

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccountError {
    #[error("Invalid deposit amount: {0}")]
    InvalidDeposit(f64),

    #[error("Invalid withdrawal amount: {amount} (balance {balance})")]
    InvalidWithdrawal { amount: f64, balance: f64 },
}

/// Fields are private; the balance only changes through `deposit` and
/// `withdraw`, and never goes negative through them.
#[derive(Debug, Clone, PartialEq)]
pub struct BankAccount {
    account_number: String,
    balance: f64,
}

impl BankAccount {
    pub fn new(account_number: impl Into<String>) -> Self {
        Self::with_balance(account_number, 0.0)
    }

    pub fn with_balance(account_number: impl Into<String>, balance: f64) -> Self {
        BankAccount {
            account_number: account_number.into(),
            balance,
        }
    }

    pub fn deposit(&mut self, amount: f64) -> Result<(), AccountError> {
        if amount.is_nan() || amount <= 0.0 {
            warn!(amount, "rejected deposit");
            return Err(AccountError::InvalidDeposit(amount));
        }
        self.balance += amount;
        debug!(account = %self.account_number, amount, balance = self.balance, "deposit");
        Ok(())
    }

    pub fn withdraw(&mut self, amount: f64) -> Result<(), AccountError> {
        if amount.is_nan() || amount <= 0.0 || amount > self.balance {
            warn!(amount, balance = self.balance, "rejected withdrawal");
            return Err(AccountError::InvalidWithdrawal {
                amount,
                balance: self.balance,
            });
        }
        self.balance -= amount;
        debug!(account = %self.account_number, amount, balance = self.balance, "withdrawal");
        Ok(())
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }
}
