//! Expense records and the fixed category set.

use crate::decimal::Money;
use std::cmp::Ordering;
use std::fmt;

/// Spending category. Declaration order is the report and menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transportation,
    Health,
    Leisure,
    Bills,
    Housing,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transportation,
        Category::Health,
        Category::Leisure,
        Category::Bills,
        Category::Housing,
    ];

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Health => "Health",
            Category::Leisure => "Leisure",
            Category::Bills => "Bills",
            Category::Housing => "Housing",
        }
    }

    /// Maps a 1-based menu number to its category.
    ///
    /// Returns `None` outside `1..=6`.
    pub fn from_menu_number(number: i64) -> Option<Category> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        Category::ALL.get(index).copied()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the user considers an expense necessary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Essentiality {
    /// Spending the user could not have avoided.
    Essential,

    /// Discretionary spending.
    NonEssential,
}

impl Essentiality {
    /// Lower-case name used in itemized report lines.
    pub fn label(&self) -> &'static str {
        match self {
            Essentiality::Essential => "essential",
            Essentiality::NonEssential => "non-essential",
        }
    }
}

/// A single recorded expense. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    amount: Money,
    day: u32,
    category: Category,
    essentiality: Essentiality,
}

impl Expense {
    /// Creates an expense. The caller is responsible for a positive amount.
    pub fn new(amount: Money, day: u32, category: Category, essentiality: Essentiality) -> Self {
        Expense {
            amount,
            day,
            category,
            essentiality,
        }
    }

    /// Shorthand for an essential expense.
    pub fn essential(amount: Money, day: u32, category: Category) -> Self {
        Expense::new(amount, day, category, Essentiality::Essential)
    }

    /// Shorthand for a non-essential expense.
    pub fn non_essential(amount: Money, day: u32, category: Category) -> Self {
        Expense::new(amount, day, category, Essentiality::NonEssential)
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Day of the cycle the expense was recorded on (1-based).
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn essentiality(&self) -> Essentiality {
        self.essentiality
    }

    pub fn is_essential(&self) -> bool {
        self.essentiality == Essentiality::Essential
    }

    /// Orders two expenses by amount, smallest first.
    pub fn compare_by_amount(&self, other: &Expense) -> Ordering {
        self.amount.cmp(&other.amount)
    }
}

/// Returns the expenses largest first. Equal amounts keep their recorded order.
pub fn sorted_largest_first(expenses: &[Expense]) -> Vec<&Expense> {
    let mut sorted: Vec<&Expense> = expenses.iter().collect();
    sorted.sort_by(|a, b| b.compare_by_amount(a));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn test_menu_numbers_map_in_display_order() {
        assert_eq!(Category::from_menu_number(1), Some(Category::Food));
        assert_eq!(Category::from_menu_number(4), Some(Category::Leisure));
        assert_eq!(Category::from_menu_number(6), Some(Category::Housing));
    }

    #[test]
    fn test_menu_numbers_out_of_range() {
        assert_eq!(Category::from_menu_number(0), None);
        assert_eq!(Category::from_menu_number(7), None);
        assert_eq!(Category::from_menu_number(-1), None);
        assert_eq!(Category::from_menu_number(i64::MIN), None);
    }

    #[test]
    fn test_essentiality_accessor() {
        let e = Expense::essential(money("10"), 1, Category::Bills);
        let n = Expense::non_essential(money("10"), 1, Category::Bills);

        assert!(e.is_essential());
        assert!(!n.is_essential());
        assert_eq!(n.essentiality(), Essentiality::NonEssential);
    }

    #[test]
    fn test_compare_by_amount() {
        let small = Expense::essential(money("5"), 1, Category::Food);
        let large = Expense::non_essential(money("50"), 2, Category::Leisure);

        assert_eq!(small.compare_by_amount(&large), Ordering::Less);
        assert_eq!(large.compare_by_amount(&small), Ordering::Greater);
        assert_eq!(small.compare_by_amount(&small.clone()), Ordering::Equal);
    }

    #[test]
    fn test_sort_is_descending_and_stable() {
        let expenses = vec![
            Expense::essential(money("10"), 1, Category::Food),
            Expense::essential(money("30"), 1, Category::Health),
            Expense::non_essential(money("10"), 2, Category::Leisure),
            Expense::essential(money("20"), 3, Category::Bills),
        ];

        let sorted = sorted_largest_first(&expenses);
        let categories: Vec<Category> = sorted.iter().map(|e| e.category()).collect();

        assert_eq!(
            categories,
            vec![
                Category::Health,
                Category::Bills,
                Category::Food,
                Category::Leisure
            ]
        );
    }
}
