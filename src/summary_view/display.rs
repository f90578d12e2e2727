use crate::model::{OrderResult, SessionOutcome};
use std::fmt;

/// Prefix of the rendered total.
pub const TOTAL_PREFIX: &str = "總金額：";

/// The five text fields on the summary screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryDisplay {
    pub customer_name: String,
    pub main_course: String,
    pub drink: String,
    pub add_ons: String,
    pub total: String,
}

impl SummaryDisplay {
    /// Updates the fields from a finished session.
    ///
    /// A cancelled session clears only the three item fields. Name and total keep
    /// whatever the previous order left there.
    pub fn apply(&mut self, outcome: &SessionOutcome) {
        match outcome {
            SessionOutcome::Completed(order) => self.show(order),
            SessionOutcome::Cancelled => {
                self.main_course.clear();
                self.drink.clear();
                self.add_ons.clear();
            }
        }
    }

    fn show(&mut self, order: &OrderResult) {
        self.customer_name = order.customer_name.clone();
        self.main_course = order.main_course_label.clone();
        self.drink = order.drink_label.clone();
        self.add_ons = order.add_on_labels.clone();
        self.total = format!("{}{}", TOTAL_PREFIX, order.total);
    }
}

impl fmt::Display for SummaryDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.customer_name)?;
        writeln!(f, "{}", self.main_course)?;
        writeln!(f, "{}", self.drink)?;
        writeln!(f, "{}", self.add_ons)?;
        write!(f, "{}", self.total)
    }
}
