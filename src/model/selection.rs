use crate::model::{AddOn, Drink, MainCourse, PriceList};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What the customer has picked so far in one form session.
///
/// Starts empty. Only the form operations mutate it, and the total is never cached:
/// [`SelectionState::total`] recomputes it from the current picks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub customer_name: String,
    pub main_course: Option<MainCourse>,
    pub drink: Option<Drink>,
    pub add_ons: BTreeSet<AddOn>,
}

impl SelectionState {
    /// Replaces any earlier main course.
    pub fn select_main_course(&mut self, choice: MainCourse) {
        self.main_course = Some(choice);
    }

    /// Replaces any earlier drink.
    pub fn select_drink(&mut self, choice: Drink) {
        self.drink = Some(choice);
    }

    /// Flips membership of `item`. Returns whether it is now selected.
    pub fn toggle_add_on(&mut self, item: AddOn) -> bool {
        if self.add_ons.remove(&item) {
            false
        } else {
            self.add_ons.insert(item);
            true
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Sum of the independent contributions of every pick. Empty groups add nothing.
    ///
    /// Saturates at `u32::MAX` rather than overflowing on an extreme price list.
    pub fn total(&self, prices: &PriceList) -> u32 {
        let main = self.main_course.map_or(0, |c| prices.main_course(c));
        let drink = self.drink.map_or(0, |d| prices.drink(d));
        self.add_ons
            .iter()
            .map(|&a| prices.add_on(a))
            .fold(main.saturating_add(drink), u32::saturating_add)
    }

    /// Add-on labels joined with `", "` in menu order.
    pub fn add_on_labels(&self) -> String {
        self.add_ons
            .iter()
            .map(|a| a.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Snapshot the selection into the value handed back to the summary screen.
    pub fn to_result(&self, prices: &PriceList) -> OrderResult {
        OrderResult {
            customer_name: self.customer_name.clone(),
            main_course_label: self.main_course.map(MainCourse::label).unwrap_or_default().to_string(),
            drink_label: self.drink.map(Drink::label).unwrap_or_default().to_string(),
            add_on_labels: self.add_on_labels(),
            total: self.total(prices),
        }
    }
}

/// The confirmed order, as displayed by the summary screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResult {
    pub customer_name: String,
    /// Empty when no main course was picked.
    pub main_course_label: String,
    /// Empty when no drink was picked.
    pub drink_label: String,
    pub add_on_labels: String,
    pub total: u32,
}
