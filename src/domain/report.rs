use bigdecimal::{BigDecimal, Zero};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::money::CENTS_SCALE;
use super::order::OrderView;

/// Product categories tracked by the daily report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Pizza,
    SweetPizza,
    Beverage,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Pizza, Category::SweetPizza, Category::Beverage];

    /// The value stored in line items and products for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Pizza => "pizza",
            Category::SweetPizza => "pizzaDoce",
            Category::Beverage => "bebida",
        }
    }

    /// Exact, case-sensitive match against the stored value.
    pub fn from_stored(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// Units sold per recognised category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryUnits {
    pub pizza: i64,
    pub sweet_pizza: i64,
    pub beverage: i64,
}

impl CategoryUnits {
    fn add(&mut self, category: Category, quantity: i64) {
        match category {
            Category::Pizza => self.pizza += quantity,
            Category::SweetPizza => self.sweet_pizza += quantity,
            Category::Beverage => self.beverage += quantity,
        }
    }
}

/// Inclusive creation-time window covered by a day's report:
/// `00:00:00` through `23:59:59`. Anything after the last whole second
/// (e.g. `23:59:59.500`) falls outside it.
pub fn day_window(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_time(NaiveTime::default());
    (start, start + Duration::seconds(86_399))
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub order_count: usize,
    /// Sum of the declared order totals.
    pub revenue: BigDecimal,
    pub units: CategoryUnits,
}

impl DailyReport {
    /// Aggregates the orders of `date`. Line items outside the recognised
    /// categories still count towards revenue through their order's total
    /// but are left out of the unit breakdown.
    pub fn aggregate(date: NaiveDate, orders: &[OrderView]) -> Self {
        let mut revenue = BigDecimal::zero();
        let mut units = CategoryUnits::default();

        for order in orders {
            revenue += &order.total;
            for line in &order.lines {
                match line.category.as_deref().and_then(Category::from_stored) {
                    Some(category) => units.add(category, i64::from(line.quantity)),
                    None => log::debug!(
                        "order {} item '{}' has unrecognised category {:?}; left out of breakdown",
                        order.id,
                        line.product_name,
                        line.category
                    ),
                }
            }
        }

        Self {
            date,
            order_count: orders.len(),
            revenue: revenue.with_scale(CENTS_SCALE),
            units,
        }
    }
}
