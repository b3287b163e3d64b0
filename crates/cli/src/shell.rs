//! Interactive menu shell.
//!
//! Reads choices and parameters from any `BufRead`, writes menus and reports
//! to any `Write`. Input format problems are handled here by re-prompting;
//! engine errors are printed and the menu continues.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use stockroom_inventory::{Catalog, DomainError, QueryRequest, Threshold};
use stockroom_reports::render;

use crate::config::ShellConfig;

const WELCOME: &str = "Welcome to the Inventory Management System!";
const FAREWELL: &str = "Thank you for using the Inventory Management System!";
const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 6, or H for help.";
const CONTINUE_PROMPT: &str = "Press Enter to continue...";

const MENU: &[&str] = &[
    "Inventory Management System - Main Menu",
    "1. View Low Stock Items",
    "2. Search Products",
    "3. View Category Summary",
    "4. Calculate Total Inventory Value",
    "5. Generate Reorder List",
    "6. Exit",
    "H. Help",
];

const HELP: &[&str] = &[
    "--- HELP INFORMATION ---",
    "This program helps you manage your inventory:",
    "1. View Low Stock Items: Shows items with quantity at or below a threshold",
    "   - You'll need to enter a threshold number (like 10)",
    "2. Search Products: Find products by name",
    "   - Enter part of a product name (like 'rice')",
    "3. View Category Summary: Shows count of items by category",
    "4. Calculate Total Inventory Value: Shows total value of all items",
    "5. Generate Reorder List: Creates a list of items to reorder",
    "   - You'll need to enter a threshold number",
    "6. Exit: Quit the program",
    "H. Help: Show this help information",
];

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    LowStock,
    Search,
    Categories,
    Value,
    Reorder,
    Exit,
    Help,
}

impl MenuChoice {
    /// Parse a raw menu answer; surrounding whitespace and case are ignored.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_uppercase().as_str() {
            "1" => Some(MenuChoice::LowStock),
            "2" => Some(MenuChoice::Search),
            "3" => Some(MenuChoice::Categories),
            "4" => Some(MenuChoice::Value),
            "5" => Some(MenuChoice::Reorder),
            "6" => Some(MenuChoice::Exit),
            "H" => Some(MenuChoice::Help),
            _ => None,
        }
    }
}

/// Whether the session should keep going after a step.
enum Flow {
    Continue,
    Stop,
}

pub struct Shell<'a, R, W> {
    catalog: &'a Catalog,
    config: ShellConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(catalog: &'a Catalog, config: ShellConfig, input: R, output: W) -> Self {
        Self {
            catalog,
            config,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        info!(records = self.catalog.len(), "shell session started");
        writeln!(self.output)?;
        writeln!(self.output, "{WELCOME}")?;
        writeln!(self.output, "Enter 'H' at any time to get help.")?;

        loop {
            writeln!(self.output)?;
            for line in MENU {
                writeln!(self.output, "{line}")?;
            }

            let Some(answer) = self.prompt("\nEnter your choice (1-6 or H): ")? else {
                break;
            };

            let choice = MenuChoice::parse(&answer);
            debug!(?choice, "menu selection");

            let flow = match choice {
                Some(MenuChoice::Help) => {
                    self.show_help()?;
                    continue;
                }
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "{FAREWELL}")?;
                    break;
                }
                Some(choice) => self.dispatch(choice)?,
                None => {
                    writeln!(self.output, "{INVALID_CHOICE}")?;
                    Flow::Continue
                }
            };

            if let Flow::Stop = flow {
                break;
            }
            if self.prompt(&format!("\n{CONTINUE_PROMPT}"))?.is_none() {
                break;
            }
        }

        info!("shell session ended");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        let request = match choice {
            MenuChoice::LowStock => {
                self.section(
                    "--- View Low Stock Items ---",
                    "This shows items with quantity at or below your specified threshold.",
                )?;
                match self.prompt_threshold()? {
                    Some(t) => QueryRequest::LowStock { threshold: Some(t) },
                    None => return Ok(Flow::Stop),
                }
            }
            MenuChoice::Search => {
                self.section(
                    "--- Search Products ---",
                    "This searches for products containing your search term.",
                )?;
                match self.prompt("Enter search term (leave empty to show all): ")? {
                    Some(term) => QueryRequest::Search { term: Some(term) },
                    None => return Ok(Flow::Stop),
                }
            }
            MenuChoice::Categories => {
                self.section(
                    "--- View Category Summary ---",
                    "This shows the count of items in each category.",
                )?;
                QueryRequest::Categories
            }
            MenuChoice::Value => {
                self.section(
                    "--- Calculate Total Inventory Value ---",
                    "This shows the total value of all inventory items.",
                )?;
                QueryRequest::Value
            }
            MenuChoice::Reorder => {
                self.section(
                    "--- Generate Reorder List ---",
                    "This creates a list of items to reorder based on your threshold.",
                )?;
                match self.prompt_threshold()? {
                    Some(t) => QueryRequest::Reorder { threshold: Some(t) },
                    None => return Ok(Flow::Stop),
                }
            }
            MenuChoice::Exit | MenuChoice::Help => return Ok(Flow::Continue),
        };

        match request.execute(self.catalog) {
            Ok(outcome) => {
                writeln!(self.output)?;
                write!(self.output, "{}", render(&outcome))?;
            }
            Err(err) => {
                warn!(kind = %request.kind(), error = %err, "query failed");
                writeln!(self.output, "Error: {err}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn section(&mut self, title: &str, blurb: &str) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{title}")?;
        writeln!(self.output, "{blurb}")
    }

    fn show_help(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        for line in HELP {
            writeln!(self.output, "{line}")?;
        }
        self.prompt(&format!("\n{CONTINUE_PROMPT}"))?;
        Ok(())
    }

    /// Ask for a threshold in `[1, max_threshold]` until one is given.
    ///
    /// Returns `None` if input ends first.
    fn prompt_threshold(&mut self) -> io::Result<Option<i64>> {
        let max = self.config.max_threshold;
        let prompt = format!("Enter low stock threshold (1-{max}): ");

        loop {
            let Some(raw) = self.prompt(&prompt)? else {
                return Ok(None);
            };
            match raw.parse::<Threshold>() {
                Ok(threshold) if threshold.get() > max => {
                    writeln!(self.output, "Please enter a number less than or equal to {max}.")?;
                }
                Ok(threshold) => return Ok(Some(threshold.get())),
                Err(DomainError::OutOfRange(_)) => {
                    writeln!(self.output, "Please enter a number greater than or equal to 1.")?;
                }
                Err(_) => {
                    writeln!(self.output, "Please enter a valid number.")?;
                }
            }
        }
    }

    /// Write `text` and read one line, without its line ending.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
