use thiserror::Error;

/// Errors that can occur when operating on the list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GadgetListError {
    #[error("no gadget named {name:?}")]
    NotFound { name: String },

    #[error("position {position} is out of range for a list of {len}")]
    OutOfRange { position: usize, len: usize },
}

/// A day token that does not name a weekday.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid day {0:?}")]
pub struct ParseWeekdayError(pub(crate) String);

impl ParseWeekdayError {
    /// The rejected input, as given.
    pub fn input(&self) -> &str {
        &self.0
    }
}
