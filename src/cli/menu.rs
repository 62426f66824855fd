//! Interactive main menu
//!
//! Loops until the user picks Exit or input runs out, dispatching each
//! choice to its handler.

use std::io::{BufRead, Write};

use crate::error::ExpenseResult;

use super::expense::handle_add_expense;
use super::export::handle_export_csv;
use super::summary::handle_monthly_summary;
use super::{Flow, Session};

const MENU: &str = "\nMenu:\n\
                    1. Add an Expense\n\
                    2. View Monthly Summary\n\
                    3. Export to CSV\n\
                    4. Exit";

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    MonthlySummary,
    ExportCsv,
    Exit,
}

impl MenuChoice {
    /// Map the typed option number to a choice
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddExpense),
            "2" => Some(Self::MonthlySummary),
            "3" => Some(Self::ExportCsv),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the menu loop until Exit or end of input
pub fn run_menu<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> ExpenseResult<()> {
    session.console.say("Welcome to the Expense Tracker!")?;

    loop {
        session.console.say(MENU)?;

        let flow = match session.console.prompt("Choose an option (1-4): ")? {
            None => Flow::Exit,
            Some(choice) => match MenuChoice::parse(&choice) {
                Some(MenuChoice::AddExpense) => handle_add_expense(session)?,
                Some(MenuChoice::MonthlySummary) => handle_monthly_summary(session)?,
                Some(MenuChoice::ExportCsv) => handle_export_csv(session)?,
                Some(MenuChoice::Exit) => Flow::Exit,
                None => {
                    session.console.say("Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            },
        };

        if flow == Flow::Exit {
            session.console.say("Goodbye!")?;
            return Ok(());
        }
    }
}
