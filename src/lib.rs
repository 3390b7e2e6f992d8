mod errors;
mod gadget;
mod gadget_list;
pub mod menu;
mod node;
mod weekday;

pub use errors::{GadgetListError, ParseWeekdayError};
pub use gadget::Gadget;
pub use gadget_list::{GadgetList, Iter};
pub use menu::Menu;
pub use weekday::{DaySet, Weekday};
