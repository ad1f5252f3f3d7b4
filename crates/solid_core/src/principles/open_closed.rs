//! Open/Closed: extend fee rules without editing the account.
//!
//! # Invariants
//! - Checking accounts pay 5% of balance, savings accounts pay 3%.
//! - Both variants agree on every balance.

/// Checking account fee rate.
pub const CHECKING_FEE_RATE: f64 = 0.05;
/// Savings account fee rate.
pub const SAVINGS_FEE_RATE: f64 = 0.03;

/// Fee rules switch on a closed enum; a new kind means editing `compute_fee`.
pub mod bad {
    use super::{CHECKING_FEE_RATE, SAVINGS_FEE_RATE};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum AccountKind {
        Checking,
        Savings,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct BankAccount {
        pub balance: f64,
        pub kind: AccountKind,
    }

    impl BankAccount {
        pub fn new(balance: f64, kind: AccountKind) -> Self {
            Self { balance, kind }
        }

        pub fn compute_fee(&self) -> f64 {
            match self.kind {
                AccountKind::Checking => self.balance * CHECKING_FEE_RATE,
                AccountKind::Savings => self.balance * SAVINGS_FEE_RATE,
            }
        }
    }
}

/// Fee rules are plugged in through [`good::FeeCalculator`].
pub mod good {
    use super::{CHECKING_FEE_RATE, SAVINGS_FEE_RATE};

    /// Fee rule for one account category.
    pub trait FeeCalculator {
        fn compute_fee(&self, balance: f64) -> f64;
    }

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct CheckingFee;

    impl FeeCalculator for CheckingFee {
        fn compute_fee(&self, balance: f64) -> f64 {
            balance * CHECKING_FEE_RATE
        }
    }

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct SavingsFee;

    impl FeeCalculator for SavingsFee {
        fn compute_fee(&self, balance: f64) -> f64 {
            balance * SAVINGS_FEE_RATE
        }
    }

    /// Account that delegates its fee to the injected calculator.
    pub struct BankAccount {
        pub balance: f64,
        fee_calculator: Box<dyn FeeCalculator>,
    }

    impl BankAccount {
        pub fn new(balance: f64, fee_calculator: Box<dyn FeeCalculator>) -> Self {
            Self {
                balance,
                fee_calculator,
            }
        }

        pub fn compute_fee(&self) -> f64 {
            self.fee_calculator.compute_fee(self.balance)
        }
    }
}
