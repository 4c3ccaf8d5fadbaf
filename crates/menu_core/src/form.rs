use shared::{Course, DishRecord, MenuError, Price};
use tracing::{info, warn};

/// Value the course field holds on a fresh or freshly submitted form.
pub const DEFAULT_COURSE_INPUT: &str = "starter";

/// A dish exactly as the chef typed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedDish {
    pub name: String,
    pub description: String,
    pub price: String,
    pub course: String,
}

/// Chef-control input fields plus the append-only list of dishes the chef
/// has added on this screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChefControlForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub course: String,
    submitted: Vec<SubmittedDish>,
}

impl Default for ChefControlForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            course: DEFAULT_COURSE_INPUT.to_string(),
            submitted: Vec::new(),
        }
    }
}

impl ChefControlForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whitespace counts as content; only a zero-length field is missing.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.description, &self.price, &self.course]
            .iter()
            .all(|field| !field.is_empty())
    }

    /// Validates the fields and, on success, records the dish locally,
    /// clears the inputs and returns the record for the shared menu.
    ///
    /// On any error the form is left exactly as it was.
    pub fn submit(&mut self) -> Result<DishRecord, MenuError> {
        if !self.is_complete() {
            warn!("chef form rejected: missing fields");
            return Err(MenuError::IncompleteForm);
        }

        let course = self.course.parse::<Course>().inspect_err(|err| {
            warn!(course = %self.course, "chef form rejected: {err}");
        })?;
        let price = self.price.parse::<Price>().inspect_err(|err| {
            warn!(price = %self.price, "chef form rejected: {err}");
        })?;

        let record = DishRecord::new(course, self.description.clone(), price)
            .with_name(self.name.clone());

        self.submitted.push(SubmittedDish {
            name: std::mem::take(&mut self.name),
            description: std::mem::take(&mut self.description),
            price: std::mem::take(&mut self.price),
            course: std::mem::replace(&mut self.course, DEFAULT_COURSE_INPUT.to_string()),
        });
        info!(
            course = %record.course,
            price = %record.price,
            total = self.submitted.len(),
            "chef added dish"
        );

        Ok(record)
    }

    pub fn submitted(&self) -> &[SubmittedDish] {
        &self.submitted
    }
}
