use shared::{Course, DishRecord, Price};
use tracing::info;

/// One fixed showcase slot on the menu screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoDish {
    pub course: Course,
    pub title: &'static str,
    pub description: String,
    pub price: Option<Price>,
}

impl DemoDish {
    fn empty(course: Course, title: &'static str) -> Self {
        Self {
            course,
            title,
            description: String::new(),
            price: None,
        }
    }

    /// Record appended by "Add <Course> to Menu". An unseeded slot still
    /// produces a record, with an empty description and a zero price.
    /// The slot title is not carried over as a dish name.
    pub fn to_record(&self) -> DishRecord {
        DishRecord::new(
            self.course,
            self.description.clone(),
            self.price.unwrap_or(Price::ZERO),
        )
    }
}

/// Static showcase filled by "Enter Menu". Independent of the dish store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoMenu {
    slots: [DemoDish; 3],
}

impl Default for DemoMenu {
    fn default() -> Self {
        Self {
            slots: [
                DemoDish::empty(Course::Starter, "Tomato Soup"),
                DemoDish::empty(Course::Main, "Grilled Salmon"),
                DemoDish::empty(Course::Dessert, "Chocolate Cake"),
            ],
        }
    }
}

impl DemoMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&mut self) {
        for slot in &mut self.slots {
            let (description, price) = match slot.course {
                Course::Starter => (
                    "A delicious, warm tomato soup with a hint of basil.",
                    Price::from_major(75),
                ),
                Course::Main => (
                    "Grilled salmon with a side of vegetables and lemon butter sauce.",
                    Price::from_major(150),
                ),
                Course::Dessert => (
                    "Rich chocolate cake topped with fresh berries.",
                    Price::from_major(60),
                ),
            };
            slot.description = description.to_string();
            slot.price = Some(price);
        }
        info!("showcase menu seeded");
    }

    pub fn is_seeded(&self) -> bool {
        self.slots.iter().all(|slot| slot.price.is_some())
    }

    pub fn slots(&self) -> &[DemoDish] {
        &self.slots
    }

    pub fn slot(&self, course: Course) -> &DemoDish {
        match course {
            Course::Starter => &self.slots[0],
            Course::Main => &self.slots[1],
            Course::Dessert => &self.slots[2],
        }
    }
}
