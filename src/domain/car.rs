use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Paint color of a car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
    Red,
    Blue,
    Green,
    Yellow,
    Silver,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::Black,
        Color::White,
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Silver,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Silver => "silver",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown color: {0}")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

/// A car arriving at the lot. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Car {
    registration_number: Option<String>,
    color: Color,
}

impl Car {
    pub fn new(registration_number: impl Into<String>, color: Color) -> Self {
        Self {
            registration_number: Some(registration_number.into()),
            color,
        }
    }

    /// A car with no registration number on record
    pub fn unregistered(color: Color) -> Self {
        Self {
            registration_number: None,
            color,
        }
    }

    pub fn registration_number(&self) -> Option<&str> {
        self.registration_number.as_deref()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether this car carries exactly the given registration number
    pub fn has_registration_number(&self, value: &str) -> bool {
        self.registration_number.as_deref() == Some(value)
    }

    /// Two cars are the same vehicle iff both carry the same non-empty
    /// registration number. Unregistered cars never match anything.
    pub fn is_same_vehicle(&self, other: &Car) -> bool {
        match (self.registration(), other.registration()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    fn registration(&self) -> Option<&str> {
        self.registration_number
            .as_deref()
            .filter(|r| !r.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_str() {
        assert_eq!("red".parse::<Color>(), Ok(Color::Red));
        assert_eq!("BLUE".parse::<Color>(), Ok(Color::Blue));
        assert_eq!(" Silver ".parse::<Color>(), Ok(Color::Silver));
        assert_eq!(
            "magenta".parse::<Color>(),
            Err(UnknownColor("magenta".to_string()))
        );
    }

    #[test]
    fn test_color_display_roundtrip() {
        for color in Color::ALL {
            assert_eq!(color.to_string().parse::<Color>(), Ok(color));
        }
    }

    #[test]
    fn test_same_vehicle_by_registration() {
        let a = Car::new("AP-1234", Color::Red);
        let repainted = Car::new("AP-1234", Color::Blue);
        let other = Car::new("AP-5678", Color::Red);

        assert!(a.is_same_vehicle(&a));
        assert!(a.is_same_vehicle(&repainted));
        assert!(!a.is_same_vehicle(&other));
    }

    #[test]
    fn test_unregistered_cars_never_match() {
        let a = Car::unregistered(Color::Red);
        let b = Car::unregistered(Color::Red);
        let blank = Car::new("  ", Color::Red);

        assert!(!a.is_same_vehicle(&b));
        assert!(!a.is_same_vehicle(&a));
        assert!(!blank.is_same_vehicle(&Car::new("  ", Color::Red)));
    }

    #[test]
    fn test_has_registration_number() {
        let car = Car::new("AP-1234", Color::Black);
        assert!(car.has_registration_number("AP-1234"));
        assert!(!car.has_registration_number("AP-12"));
        assert!(!Car::unregistered(Color::Black).has_registration_number(""));
    }
}
