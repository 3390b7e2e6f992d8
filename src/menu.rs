//! Line-oriented text menu over a [`GadgetList`].
//!
//! The menu owns the list and talks to any `BufRead`/`Write` pair, so the
//! binary hands it stdin/stdout and tests hand it in-memory buffers.

use crate::{
    gadget::Gadget,
    gadget_list::GadgetList,
    weekday::{DaySet, Weekday},
};
use log::{debug, info};
use std::io::{self, BufRead, Write};

const OPTIONS: &str = "\
Choose an option:
1. Add a Gadget
2. Remove a Gadget
3. Find a Gadget
4. Display All Gadgets
5. Display Gadgets for a Specific Day
6. Insert a Gadget at a Specific Position
7. Reverse the List
8. Clear the List
9. Count Gadgets
0. Exit";

const DAYS_PROMPT: &str =
    "Enter the days you carry this gadget (e.g., Monday, Tuesday). Type 'done' to finish:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Add,
    Remove,
    Find,
    DisplayAll,
    DisplayDay,
    Insert,
    Reverse,
    Clear,
    Count,
    Exit,
}

impl Choice {
    fn parse(input: &str) -> Option<Self> {
        let choice = match input {
            "1" => Choice::Add,
            "2" => Choice::Remove,
            "3" => Choice::Find,
            "4" => Choice::DisplayAll,
            "5" => Choice::DisplayDay,
            "6" => Choice::Insert,
            "7" => Choice::Reverse,
            "8" => Choice::Clear,
            "9" => Choice::Count,
            "0" => Choice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive menu that owns the gadget list for one session.
pub struct Menu<R, W> {
    input: R,
    output: W,
    gadgets: GadgetList,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a menu with an empty list.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            gadgets: GadgetList::new(),
        }
    }

    /// The list as it stands.
    pub fn gadgets(&self) -> &GadgetList {
        &self.gadgets
    }

    /// Consume the menu, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Serve commands until `0` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{OPTIONS}")?;
            let Some(line) = self.prompt("Your choice: ")? else {
                break;
            };

            let flow = match Choice::parse(&line) {
                Some(choice) => {
                    debug!("menu choice {choice:?}");
                    self.dispatch(choice)?
                }
                None => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
            writeln!(self.output)?;
        }
        info!("menu finished with {} gadgets", self.gadgets.len());
        Ok(())
    }

    fn dispatch(&mut self, choice: Choice) -> io::Result<Flow> {
        match choice {
            Choice::Add => self.add(),
            Choice::Remove => self.remove(),
            Choice::Find => self.find(),
            Choice::DisplayAll => {
                for gadget in &self.gadgets {
                    writeln!(self.output, "{gadget}")?;
                }
                Ok(Flow::Continue)
            }
            Choice::DisplayDay => self.display_day(),
            Choice::Insert => self.insert(),
            Choice::Reverse => {
                self.gadgets.reverse();
                writeln!(self.output, "The gadget list has been reversed.")?;
                Ok(Flow::Continue)
            }
            Choice::Clear => {
                self.gadgets.clear();
                writeln!(self.output, "The list has been cleared.")?;
                Ok(Flow::Continue)
            }
            Choice::Count => {
                writeln!(self.output, "Total gadgets: {}", self.gadgets.len())?;
                Ok(Flow::Continue)
            }
            Choice::Exit => Ok(Flow::Exit),
        }
    }

    fn add(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Enter the name of the gadget: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(days) = self.read_days()? else {
            return Ok(Flow::Exit);
        };

        self.gadgets.append(Gadget::new(name.as_str(), days));
        writeln!(self.output, "{name} has been added to the gadget list.")?;
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Enter the name of the gadget to remove: ")? else {
            return Ok(Flow::Exit);
        };

        if self.gadgets.remove_by_name(&name) {
            writeln!(self.output, "{name} has been removed from the list.")?;
        } else {
            writeln!(self.output, "Gadget not found.")?;
        }
        Ok(Flow::Continue)
    }

    fn find(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Enter the name of the gadget to find: ")? else {
            return Ok(Flow::Exit);
        };

        match self.gadgets.find_by_name(&name) {
            Some(gadget) => writeln!(self.output, "Found gadget: {gadget}")?,
            None => writeln!(self.output, "Gadget not found.")?,
        }
        Ok(Flow::Continue)
    }

    fn display_day(&mut self) -> io::Result<Flow> {
        let Some(line) = self.prompt("Enter the day to display gadgets for (e.g., Monday): ")? else {
            return Ok(Flow::Exit);
        };

        match line.parse::<Weekday>() {
            Ok(day) => {
                writeln!(self.output, "Gadgets for {day}:")?;
                for gadget in self.gadgets.carried_on(day) {
                    writeln!(self.output, "{gadget}")?;
                }
            }
            Err(err) => {
                debug!("{err}");
                writeln!(self.output, "Invalid day.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn insert(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Enter the name of the gadget: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(days) = self.read_days()? else {
            return Ok(Flow::Exit);
        };
        let Some(line) = self.prompt(
            "Enter the position where you want to insert the gadget (starting from 0): ",
        )?
        else {
            return Ok(Flow::Exit);
        };

        let Ok(requested) = line.trim().parse::<i64>() else {
            writeln!(self.output, "Invalid input for position.")?;
            return Ok(Flow::Continue);
        };
        let inserted = usize::try_from(requested)
            .ok()
            .and_then(|position| {
                self.gadgets
                    .insert_at(position, Gadget::new(name.as_str(), days))
                    .ok()
            })
            .is_some();

        if inserted {
            writeln!(self.output, "{name} has been inserted at position {requested}.")?;
        } else {
            writeln!(self.output, "Invalid position.")?;
        }
        Ok(Flow::Continue)
    }

    /// Day names, one per line, until `done`. `None` on end of input.
    fn read_days(&mut self) -> io::Result<Option<DaySet>> {
        writeln!(self.output, "{DAYS_PROMPT}")?;
        let mut days = DaySet::new();
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if line.trim().eq_ignore_ascii_case("done") {
                return Ok(Some(days));
            }
            match line.parse::<Weekday>() {
                Ok(day) => {
                    days.insert(day);
                }
                Err(err) => {
                    debug!("{err}");
                    writeln!(self.output, "Invalid day. Please try again.")?;
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next line without its terminator. Invalid UTF-8 is replaced, not rejected.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
