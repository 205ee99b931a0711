use std::fmt;

/// Plain data bundled with the behaviour that describes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub make: String,
    pub model: String,
    pub year: u16,
}

impl Car {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: u16) -> Self {
        Car {
            make: make.into(),
            model: model.into(),
            year,
        }
    }

    pub fn display_info(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Car Information: {} {} {}", self.year, self.make, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_info() {
        let car = Car::new("Toyota", "Corolla", 2020);
        assert_eq!(car.display_info(), "Car Information: 2020 Toyota Corolla");
        assert_eq!(format!("{car}"), car.display_info());
    }
}
