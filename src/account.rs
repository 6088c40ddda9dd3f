// 🏦 Account - single in-memory bank account
//
// One holder, one balance. Credit and debit are guarded by preconditions;
// a failed operation leaves the balance untouched, so the balance never
// drops below zero.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::error::{BankError, OperationKind};

/// A bank account holding a balance for one named holder.
///
/// The holder name is set at construction and never changes. The balance
/// is a `Decimal` so repeated credits and debits do not accumulate float
/// rounding error.
#[derive(Debug, Clone)]
pub struct Account {
    name: String,
    balance: Decimal,
}

impl Account {
    /// Create an account with a zero balance.
    pub fn new(name: impl Into<String>) -> Self {
        Account {
            name: name.into(),
            balance: Decimal::ZERO,
        }
    }

    /// Holder name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current balance.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Credit `amount` to the account.
    ///
    /// Rejects non-positive amounts.
    pub fn deposit(&mut self, amount: Decimal) -> Result<String, BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidAmount {
                kind: OperationKind::Deposit,
            });
        }

        self.balance += amount;
        info!(account = %self.name, %amount, balance = %self.balance, "deposit accepted");

        Ok(format!(
            "Amount {} is deposited in {} account",
            amount, self.name
        ))
    }

    /// Debit `amount` from the account.
    ///
    /// Rejects non-positive amounts and amounts exceeding the current
    /// balance.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<String, BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidAmount {
                kind: OperationKind::Withdrawal,
            });
        }
        if amount > self.balance {
            warn!(account = %self.name, %amount, balance = %self.balance, "withdrawal rejected: insufficient balance");
            return Err(BankError::InsufficientBalance);
        }

        self.balance -= amount;
        info!(account = %self.name, %amount, balance = %self.balance, "withdrawal accepted");

        Ok(format!(
            "Amount {} is withdrawn from {} account",
            amount, self.name
        ))
    }

    /// Format the current balance into a report message. No mutation.
    pub fn check_balance(&self) -> String {
        info!(account = %self.name, balance = %self.balance, "balance checked");
        format!("Balance in {} account is {}", self.name, self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_account() -> Account {
        Account::new("John")
    }

    #[test]
    fn test_new_account_starts_at_zero() {
        let account = test_account();
        assert_eq!(account.name(), "John");
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_deposit_increases_balance_exactly() {
        let mut account = test_account();

        let message = account.deposit(Decimal::from(100)).unwrap();
        assert_eq!(message, "Amount 100 is deposited in John account");
        assert_eq!(account.balance(), Decimal::from(100));

        account.deposit(Decimal::new(25, 1)).unwrap(); // 2.5
        assert_eq!(account.balance(), Decimal::new(1025, 1)); // 102.5
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        let mut account = test_account();

        for amount in [Decimal::ZERO, Decimal::from(-5)] {
            let err = account.deposit(amount).unwrap_err();
            assert_eq!(
                err,
                BankError::InvalidAmount {
                    kind: OperationKind::Deposit
                }
            );
            assert_eq!(account.balance(), Decimal::ZERO);
        }
    }

    #[test]
    fn test_withdraw_decreases_balance_exactly() {
        let mut account = test_account();
        account.deposit(Decimal::from(100)).unwrap();

        let message = account.withdraw(Decimal::from(30)).unwrap();
        assert_eq!(message, "Amount 30 is withdrawn from John account");
        assert_eq!(account.balance(), Decimal::from(70));

        // Withdrawing the full balance is allowed
        account.withdraw(Decimal::from(70)).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_withdraw_rejects_non_positive() {
        let mut account = test_account();
        account.deposit(Decimal::from(50)).unwrap();

        for amount in [Decimal::ZERO, Decimal::from(-1)] {
            let err = account.withdraw(amount).unwrap_err();
            assert_eq!(
                err,
                BankError::InvalidAmount {
                    kind: OperationKind::Withdrawal
                }
            );
            assert_eq!(account.balance(), Decimal::from(50));
        }
    }

    #[test]
    fn test_withdraw_rejects_overdraft() {
        let mut account = test_account();
        account.deposit(Decimal::from(70)).unwrap();

        let err = account.withdraw(Decimal::from(1000)).unwrap_err();
        assert_eq!(err, BankError::InsufficientBalance);
        assert_eq!(account.balance(), Decimal::from(70));
    }

    #[test]
    fn test_check_balance_does_not_mutate() {
        let mut account = test_account();
        account.deposit(Decimal::from(70)).unwrap();

        assert_eq!(account.check_balance(), "Balance in John account is 70");
        assert_eq!(account.check_balance(), "Balance in John account is 70");
        assert_eq!(account.balance(), Decimal::from(70));
    }

    #[test]
    fn test_deposit_withdraw_scenario() {
        let mut account = test_account();

        account.deposit(Decimal::from(100)).unwrap();
        assert_eq!(account.balance(), Decimal::from(100));

        account.withdraw(Decimal::from(30)).unwrap();
        assert_eq!(account.balance(), Decimal::from(70));

        account.withdraw(Decimal::from(1000)).unwrap_err();
        assert_eq!(account.balance(), Decimal::from(70));

        assert_eq!(account.check_balance(), "Balance in John account is 70");
    }
}
