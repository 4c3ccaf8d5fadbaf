use serde::{Deserialize, Serialize};
use shared::{Course, DishRecord, Price};
use tracing::debug;

/// Ordered dish list backing the menu screen.
///
/// Insertion order is preserved and duplicates are allowed. Aggregates are
/// always recomputed from the live list, and positions handed to
/// [`MenuStore::remove_item`] must come from the current contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuStore {
    items: Vec<DishRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuSummary {
    pub count: usize,
    averages: [f64; 3],
}

impl MenuSummary {
    pub fn average(&self, course: Course) -> f64 {
        self.averages[course_slot(course)]
    }
}

fn course_slot(course: Course) -> usize {
    match course {
        Course::Starter => 0,
        Course::Main => 1,
        Course::Dessert => 2,
    }
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, course: Course, description: impl Into<String>, price: Price) {
        self.push(DishRecord::new(course, description, price));
    }

    pub fn push(&mut self, record: DishRecord) {
        debug!(course = %record.course, price = %record.price, "dish added to menu");
        self.items.push(record);
    }

    /// Removes the dish at `index`, shifting later dishes left.
    /// Returns `None` and leaves the list untouched when `index` is out of range.
    pub fn remove_item(&mut self, index: usize) -> Option<DishRecord> {
        if index >= self.items.len() {
            debug!(index, len = self.items.len(), "remove ignored: index out of range");
            return None;
        }
        let removed = self.items.remove(index);
        debug!(index, course = %removed.course, "dish removed from menu");
        Some(removed)
    }

    pub fn items(&self) -> &[DishRecord] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &DishRecord> {
        self.items.iter()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Mean price of the dishes in `course`, in major units; `0.0` when the
    /// course has no dishes.
    pub fn average_price(&self, course: Course) -> f64 {
        let (total_cents, matches) = self
            .items
            .iter()
            .filter(|item| item.course == course)
            .fold((0u128, 0u64), |(total, n), item| {
                (total + u128::from(item.price.cents()), n + 1)
            });

        if matches == 0 {
            return 0.0;
        }
        total_cents as f64 / matches as f64 / 100.0
    }

    pub fn summary(&self) -> MenuSummary {
        MenuSummary {
            count: self.count(),
            averages: Course::ALL.map(|course| self.average_price(course)),
        }
    }
}

impl<'a> IntoIterator for &'a MenuStore {
    type Item = &'a DishRecord;
    type IntoIter = std::slice::Iter<'a, DishRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
