use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::meal_log::{LoggedMeal, MealEntryForm, MealSlot};
use crate::report::render_meal_summary;

/// A line typed during interactive meal entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryCommand {
    Add(String),
    Next,
    Prev,
    /// One-based step number as typed.
    Step(usize),
    Remove(String),
    List,
    Done,
    Quit,
    Blank,
    Unknown(String),
}

/// Lines starting with `:` are commands. A leading `::` logs the rest of the
/// line as a dish name that itself starts with `:`.
pub fn parse_line(line: &str) -> EntryCommand {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return EntryCommand::Blank;
    }
    if let Some(escaped) = line.trim_start().strip_prefix("::") {
        return EntryCommand::Add(format!(":{}", escaped.trim_end_matches(['\r', '\n'])));
    }
    let Some(command) = trimmed.strip_prefix(':') else {
        return EntryCommand::Add(line.trim_end_matches(['\r', '\n']).to_string());
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("next"), None) => EntryCommand::Next,
        (Some("prev"), None) => EntryCommand::Prev,
        (Some("step"), Some(n)) => match n.parse() {
            Ok(step) => EntryCommand::Step(step),
            Err(_) => EntryCommand::Unknown(trimmed.to_string()),
        },
        (Some("rm"), Some(id)) => EntryCommand::Remove(id.to_string()),
        (Some("list"), None) => EntryCommand::List,
        (Some("done"), None) => EntryCommand::Done,
        (Some("quit"), None) => EntryCommand::Quit,
        _ => EntryCommand::Unknown(trimmed.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed(Vec<LoggedMeal>),
    Aborted,
}

const HELP: &str =
    "Type a dish name to log it (start it with :: if the name begins with :). Commands: :next :prev :step N :rm ID :list :done :quit";

fn prompt<W: Write>(output: &mut W, form: &MealEntryForm) -> Result<()> {
    write!(
        output,
        "[{}/{} {}] > ",
        form.current_step() + 1,
        MealSlot::ALL.len(),
        form.current_slot()
    )?;
    output.flush()?;
    Ok(())
}

/// Drives a `MealEntryForm` from line-oriented input.
///
/// End of input before `:done` aborts the session; nothing is returned for
/// saving in that case.
pub fn run_entry_session<R, W, C>(input: R, mut output: W, mut clock: C) -> Result<SessionOutcome>
where
    R: BufRead,
    W: Write,
    C: FnMut() -> u128,
{
    let mut form = MealEntryForm::new();
    writeln!(output, "{}", HELP)?;
    prompt(&mut output, &form)?;

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            EntryCommand::Add(name) => {
                form.set_draft(name);
                if let Some(meal) = form.add_meal(clock()) {
                    writeln!(output, "  + {} (id {})", meal.name, meal.id)?;
                }
            }
            EntryCommand::Next => form.next_step(),
            EntryCommand::Prev => form.prev_step(),
            EntryCommand::Step(step) => {
                if step == 0 || !form.go_to_step(step - 1) {
                    writeln!(output, "  No such step: {}", step)?;
                }
            }
            EntryCommand::Remove(id) => match form.remove_meal(&id) {
                Some(meal) => writeln!(output, "  - {}", meal.name)?,
                None => writeln!(output, "  No meal with id {}", id)?,
            },
            EntryCommand::List => {
                for meal in form.current_meals() {
                    writeln!(output, "  {}  {}", meal.id, meal.name)?;
                }
                write!(output, "{}", render_meal_summary(&form.slot_summary()))?;
            }
            EntryCommand::Done => {
                if form.can_analyze() {
                    write!(output, "{}", render_meal_summary(&form.slot_summary()))?;
                    debug!(meals = form.meals().len(), "entry session completed");
                    return Ok(form
                        .finish()
                        .map_or(SessionOutcome::Aborted, SessionOutcome::Completed));
                }
                writeln!(output, "  Log at least one meal before analyzing.")?;
            }
            EntryCommand::Quit => return Ok(SessionOutcome::Aborted),
            EntryCommand::Blank => {}
            EntryCommand::Unknown(text) => writeln!(output, "  Unknown command: {}\n  {}", text, HELP)?,
        }
        prompt(&mut output, &form)?;
    }

    debug!("entry session ended without :done");
    Ok(SessionOutcome::Aborted)
}
