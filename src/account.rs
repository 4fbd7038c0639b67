//! User account model and operations.
//!
//! Maintains the invariant: `balance == salary - total_expenses` at all times.

use crate::decimal::Money;
use crate::expense::Expense;

/// The single user's budget state. Lives for the whole session.
///
/// # Invariants
///
/// - `balance() == salary - total_expenses()`, and may be negative (debt)
/// - `leftover_savings` only grows, until `set_salary` folds it into the
///   next salary
#[derive(Debug, Clone, Default)]
pub struct UserAccount {
    salary: Money,
    leftover_savings: Money,
    expenses: Vec<Expense>,
}

impl UserAccount {
    /// Creates an account with zero salary, zero savings and no expenses.
    pub fn new() -> Self {
        UserAccount::default()
    }

    /// Salary for the current cycle, including any folded-in savings.
    pub fn salary(&self) -> Money {
        self.salary
    }

    /// The "piggy bank": positive balances carried over from past cycles.
    pub fn leftover_savings(&self) -> Money {
        self.leftover_savings
    }

    /// Expenses of the current cycle, in recorded order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Sets the cycle salary to `amount` plus leftover savings, then empties
    /// the savings.
    pub fn set_salary(&mut self, amount: Money) {
        self.salary = amount + self.leftover_savings;
        self.leftover_savings = Money::ZERO;
    }

    /// Records an expense. No validation is done here.
    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Sum of all expense amounts.
    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(Expense::amount).sum()
    }

    /// Salary minus total expenses. Negative means the user is in debt.
    pub fn balance(&self) -> Money {
        self.salary - self.total_expenses()
    }

    /// Drops every expense of the current cycle.
    pub fn clear_expenses(&mut self) {
        self.expenses.clear();
    }

    /// Moves a positive end-of-cycle balance into leftover savings.
    ///
    /// Zero or negative balances leave the savings untouched. Returns the
    /// updated savings.
    pub fn save_leftover(&mut self, balance: Money) -> Money {
        if balance.is_positive() {
            self.leftover_savings += balance;
        }
        self.leftover_savings
    }
}
