//! Interactive menu shown when no subcommand is given

use std::io::{self, BufRead, Write};

pub const MENU_LINES: [&str; 4] = [
    "Simple Network Traffic Tracker",
    "1. Start continuous monitoring",
    "2. Show current stats",
    "3. Exit",
];

pub const PROMPT: &str = "\nEnter choice (1-3): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Monitor,
    Snapshot,
    Exit,
}

impl MenuChoice {
    /// Parses trimmed operator input; anything unrecognised is `None`
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Monitor),
            "2" => Some(MenuChoice::Snapshot),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Prints the menu and reads one line of input
///
/// End of input counts as an invalid choice.
pub fn prompt_choice<R, W>(input: &mut R, out: &mut W) -> io::Result<Option<MenuChoice>>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    for line in MENU_LINES {
        writeln!(out, "{line}")?;
    }
    write!(out, "{PROMPT}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(MenuChoice::parse(&line))
}
