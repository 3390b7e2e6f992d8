use crate::weekday::{DaySet, Weekday};
use core::fmt;

/// A named item together with the days it is carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gadget {
    name: String,
    days: DaySet,
}

impl Gadget {
    /// Create a gadget from its name and carry days.
    pub fn new(name: impl Into<String>, days: DaySet) -> Self {
        Gadget {
            name: name.into(),
            days,
        }
    }

    /// The name used to find and remove this gadget.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Days this gadget is carried.
    pub fn days(&self) -> DaySet {
        self.days
    }

    /// Is this gadget carried on `day`?
    pub fn is_carried_on(&self, day: Weekday) -> bool {
        self.days.contains(day)
    }
}

impl fmt::Display for Gadget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Carried on: {}", self.name, self.days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_days() {
        let keys = Gadget::new("Keys", [Weekday::Monday, Weekday::Friday].into_iter().collect());
        assert_eq!(keys.to_string(), "Keys - Carried on: Monday, Friday");
        assert!(keys.is_carried_on(Weekday::Friday));
        assert!(!keys.is_carried_on(Weekday::Tuesday));

        let watch = Gadget::new("Watch", DaySet::new());
        assert_eq!(watch.to_string(), "Watch - Carried on: ");
    }
}
