use crate::errors::ParseWeekdayError;
use core::fmt;
use core::str::FromStr;

/// Day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All seven days in week order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// English name, as printed and parsed.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ParseWeekdayError;

    /// Exact, case-sensitive day name; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Weekday::ALL
            .into_iter()
            .find(|day| day.name() == token)
            .ok_or_else(|| ParseWeekdayError(s.to_owned()))
    }
}

/// A set of weekdays packed into one byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DaySet(u8);

impl DaySet {
    /// An empty set.
    pub const fn new() -> Self {
        DaySet(0)
    }

    /// Adds `day`; returns `false` if it was already present.
    pub fn insert(&mut self, day: Weekday) -> bool {
        let fresh = !self.contains(day);
        self.0 |= day.bit();
        fresh
    }

    /// Removes `day`; returns whether it was present.
    pub fn remove(&mut self, day: Weekday) -> bool {
        let present = self.contains(day);
        self.0 &= !day.bit();
        present
    }

    /// Is `day` in the set?
    pub const fn contains(&self, day: Weekday) -> bool {
        self.0 & day.bit() != 0
    }

    /// Number of days in the set.
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Is the set empty?
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Days in the set, Sunday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(|day| self.contains(*day))
    }
}

impl FromIterator<Weekday> for DaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = DaySet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Weekday> for DaySet {
    fn extend<I: IntoIterator<Item = Weekday>>(&mut self, iter: I) {
        for day in iter {
            self.insert(day);
        }
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, day) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(day.name())?;
        }
        Ok(())
    }
}
