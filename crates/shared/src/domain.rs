use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::MenuError;

/// Currency marker shown in front of every formatted price.
pub const CURRENCY_PREFIX: &str = "R";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Course {
    #[default]
    Starter,
    Main,
    Dessert,
}

impl Course {
    pub const ALL: [Course; 3] = [Course::Starter, Course::Main, Course::Dessert];

    /// Lowercase label, the form the chef types into the course field.
    pub fn label(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Main => "main",
            Self::Dessert => "dessert",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Main => "Main",
            Self::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Course {
    type Err = MenuError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let text = raw.trim();
        Course::ALL
            .into_iter()
            .find(|course| course.label().eq_ignore_ascii_case(text))
            .ok_or_else(|| MenuError::UnknownCourse(raw.to_string()))
    }
}

/// Non-negative amount of money in minor units (cents).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn from_major(units: u64) -> Self {
        Self(units * 100)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CURRENCY_PREFIX} {}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = MenuError;

    /// Accepts `40`, `40.5`, `R 75`, `R75.50`. At most two decimals.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || MenuError::InvalidPrice(raw.to_string());

        let text = raw.trim();
        let text = text
            .strip_prefix(CURRENCY_PREFIX)
            .map(str::trim_start)
            .unwrap_or(text);
        let (major, minor) = text.split_once('.').unwrap_or((text, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if major.is_empty() || !all_digits(major) || minor.len() > 2 || !all_digits(minor) {
            return Err(invalid());
        }

        let major = major.parse::<u64>().map_err(|_| invalid())?;
        let minor = match minor.len() {
            0 => 0,
            1 => minor.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => minor.parse::<u64>().map_err(|_| invalid())?,
        };

        major
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(minor))
            .map(Price)
            .ok_or_else(invalid)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishRecord {
    pub course: Course,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub description: String,
    pub price: Price,
}

impl DishRecord {
    pub fn new(course: Course, description: impl Into<String>, price: Price) -> Self {
        Self {
            course,
            name: None,
            description: description.into(),
            price,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl fmt::Display for DishRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(
                f,
                "{}: {name}, {} - {}",
                self.course, self.description, self.price
            ),
            None => write!(f, "{}: {} - {}", self.course, self.description, self.price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_prefixed_prices() {
        assert_eq!("40".parse::<Price>().expect("plain"), Price::from_major(40));
        assert_eq!("R 75".parse::<Price>().expect("prefixed"), Price::from_major(75));
        assert_eq!("R75.5".parse::<Price>().expect("tight"), Price::from_cents(7550));
        assert_eq!(" 12.05 ".parse::<Price>().expect("padded"), Price::from_cents(1205));
        assert_eq!("40.".parse::<Price>().expect("trailing dot"), Price::from_major(40));
    }

    #[test]
    fn rejects_malformed_prices() {
        for raw in ["", "R", "R ", "-5", "abc", "1.234", ".5", "4O", "R 1,00"] {
            let err = raw.parse::<Price>().expect_err(raw);
            assert_eq!(err, MenuError::InvalidPrice(raw.to_string()));
        }
    }

    #[test]
    fn rejects_price_that_overflows_cents() {
        let raw = u64::MAX.to_string();
        assert!(raw.parse::<Price>().is_err());
    }

    #[test]
    fn formats_price_with_currency_prefix() {
        assert_eq!(Price::from_major(75).to_string(), "R 75.00");
        assert_eq!(Price::from_cents(1205).to_string(), "R 12.05");
        assert_eq!(Price::ZERO.to_string(), "R 0.00");
    }

    #[test]
    fn parses_course_labels_case_insensitively() {
        assert_eq!("starter".parse::<Course>().expect("starter"), Course::Starter);
        assert_eq!(" Main ".parse::<Course>().expect("main"), Course::Main);
        assert_eq!("DESSERT".parse::<Course>().expect("dessert"), Course::Dessert);
        assert_eq!(
            "soup".parse::<Course>().expect_err("unknown"),
            MenuError::UnknownCourse("soup".to_string())
        );
    }

    #[test]
    fn dish_serializes_course_snake_case_and_price_as_cents() {
        let dish = DishRecord::new(Course::Main, "Grilled salmon", Price::from_major(150));
        let json = serde_json::to_value(&dish).expect("json");
        assert_eq!(
            json,
            serde_json::json!({
                "course": "main",
                "description": "Grilled salmon",
                "price": 15000
            })
        );
    }

    #[test]
    fn dish_display_includes_name_when_present() {
        let dish = DishRecord::new(Course::Starter, "Hot", Price::from_major(40));
        assert_eq!(dish.to_string(), "starter: Hot - R 40.00");
        assert_eq!(
            dish.with_name("Soup").to_string(),
            "starter: Soup, Hot - R 40.00"
        );
    }
}
