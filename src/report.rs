//! End-of-cycle report.
//!
//! The figures are computed once by [`CycleReport::from_account`] and then
//! rendered at the configured [`ReportDetail`]. Building the report never
//! touches the account; settling the leftover savings is the organizer's job.

use crate::account::UserAccount;
use crate::decimal::Money;
use crate::expense::{sorted_largest_first, Category, Expense};
use std::io::Write;

/// How much of the category breakdown to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportDetail {
    /// One total line per category.
    #[default]
    Summary,

    /// Per-category share, essential/non-essential split and itemized
    /// expenses.
    Detailed,
}

/// Totals for one category with at least one expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub total: Money,
    pub essential: Money,
    pub non_essential: Money,

    /// The category's expenses, largest first.
    pub expenses: Vec<Expense>,
}

/// Figures for a finished cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub total: Money,
    pub essential_total: Money,
    pub non_essential_total: Money,

    /// Non-empty categories in display order.
    pub categories: Vec<CategoryBreakdown>,

    /// Salary minus total expenses. May be negative.
    pub final_balance: Money,
}

impl CycleReport {
    /// Computes the report for the account's current expenses.
    pub fn from_account(account: &UserAccount) -> Self {
        let sorted = sorted_largest_first(account.expenses());

        let total = account.total_expenses();
        let essential_total: Money = sorted
            .iter()
            .filter(|e| e.is_essential())
            .map(|e| e.amount())
            .sum();

        let categories = Category::ALL
            .iter()
            .filter_map(|&category| {
                let expenses: Vec<Expense> = sorted
                    .iter()
                    .filter(|e| e.category() == category)
                    .map(|&e| e.clone())
                    .collect();
                if expenses.is_empty() {
                    return None;
                }

                let cat_total: Money = expenses.iter().map(Expense::amount).sum();
                let essential: Money = expenses
                    .iter()
                    .filter(|e| e.is_essential())
                    .map(Expense::amount)
                    .sum();

                Some(CategoryBreakdown {
                    category,
                    total: cat_total,
                    essential,
                    non_essential: cat_total - essential,
                    expenses,
                })
            })
            .collect();

        CycleReport {
            total,
            essential_total,
            non_essential_total: total - essential_total,
            categories,
            final_balance: account.balance(),
        }
    }

    /// `true` when the cycle ended without a single expense.
    pub fn is_empty(&self) -> bool {
        self.total.is_zero()
    }

    /// Writes the report body. Does not print the savings line, which
    /// depends on settling the balance.
    pub fn render<W: Write>(&self, out: &mut W, detail: ReportDetail) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "===== FINAL REPORT =====")?;

        if self.is_empty() {
            writeln!(out, "No expenses recorded.")?;
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "Total spent this cycle: $ {}", self.total)?;
        writeln!(
            out,
            "Essential expenses: $ {} ({})",
            self.essential_total,
            self.essential_total.percent_of(self.total)
        )?;
        writeln!(
            out,
            "Non-essential expenses: $ {} ({})",
            self.non_essential_total,
            self.non_essential_total.percent_of(self.total)
        )?;

        writeln!(out)?;
        writeln!(out, "--- Breakdown by category ---")?;
        for breakdown in &self.categories {
            match detail {
                ReportDetail::Summary => {
                    writeln!(out, "{}: $ {}", breakdown.category, breakdown.total)?;
                }
                ReportDetail::Detailed => self.render_detailed_category(out, breakdown)?,
            }
        }

        writeln!(out)?;
        writeln!(out, "Final balance: $ {}", self.final_balance)?;
        Ok(())
    }

    fn render_detailed_category<W: Write>(
        &self,
        out: &mut W,
        breakdown: &CategoryBreakdown,
    ) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(
            out,
            "{} - {} of total",
            breakdown.category.label().to_uppercase(),
            breakdown.total.percent_of(self.total)
        )?;
        writeln!(
            out,
            "  Essential: $ {} ({})",
            breakdown.essential,
            breakdown.essential.percent_of(self.total)
        )?;
        writeln!(
            out,
            "  Non-essential: $ {} ({})",
            breakdown.non_essential,
            breakdown.non_essential.percent_of(self.total)
        )?;
        for expense in &breakdown.expenses {
            writeln!(
                out,
                "    Day {}: $ {} ({})",
                expense.day(),
                expense.amount(),
                expense.essentiality().label()
            )?;
        }
        Ok(())
    }
}
