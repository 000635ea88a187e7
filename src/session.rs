use crate::config::ViewerConfig;
use crate::criteria::FilterCriteria;
use crate::dataset::Record;
use crate::editor::{DraftField, FilterEditor};
use crate::engine::FilterEngine;
use crate::view::{Pager, format_applied_filters, render_record_table};
use anyhow::Result;
use std::io::{BufRead, Write};

/// One parsed line of session input.
///
/// Each command maps to a single state transition on the owning component:
/// row activation opens the editor, `set` mutates one draft field, `apply`
/// commits the draft wholesale, and the paging commands only move the view.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Show,
    Open(u64),
    Close,
    Set(DraftField, String),
    Draft,
    Apply,
    Clear,
    Filters,
    Next,
    Prev,
    Page(usize),
    Help,
    Quit,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Err("empty command".to_string());
        };

        match keyword.to_lowercase().as_str() {
            "show" => Ok(SessionCommand::Show),
            "open" => {
                let id = tokens
                    .next()
                    .ok_or("Usage: open <record-id>")?
                    .parse()
                    .map_err(|_| "Usage: open <record-id>".to_string())?;
                Ok(SessionCommand::Open(id))
            }
            "close" => Ok(SessionCommand::Close),
            "set" => {
                let field: DraftField = tokens.next().ok_or("Usage: set <field> [value]")?.parse()?;
                // The rest of the line, verbatim; may be empty to clear the field.
                let value = tokens.collect::<Vec<_>>().join(" ");
                Ok(SessionCommand::Set(field, value))
            }
            "draft" => Ok(SessionCommand::Draft),
            "apply" => Ok(SessionCommand::Apply),
            "clear" => Ok(SessionCommand::Clear),
            "filters" => Ok(SessionCommand::Filters),
            "next" | "n" => Ok(SessionCommand::Next),
            "prev" | "p" => Ok(SessionCommand::Prev),
            "page" => {
                let number = tokens
                    .next()
                    .ok_or("Usage: page <number>")?
                    .parse()
                    .map_err(|_| "Usage: page <number>".to_string())?;
                Ok(SessionCommand::Page(number))
            }
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            other => Err(format!("Unknown command '{}'. Try 'help'.", other)),
        }
    }
}

const HELP_TEXT: &str = "\
Commands:
  show              render the current table page
  open <id>         select a row and open the filter panel
  set <field> [v]   edit one draft field (name, category, subcategory,
                    price-min, price-max, date-start, date-end)
  draft             show the uncommitted draft
  apply             commit the draft and close the panel
  close             close the panel, discarding the draft
  clear             remove all committed filters
  filters           show the applied-filters summary
  next / prev       move one page
  page <n>          jump to page n
  quit              leave the session";

/// Interactive browse loop over a fixed record set.
///
/// Owns the engine, the editor and the pager, and wires them together the
/// way the table component does: the editor never touches the engine
/// directly; a committed draft is handed over here as one criteria value.
pub struct Session<'a> {
    records: &'a [Record],
    config: &'a ViewerConfig,
    engine: FilterEngine,
    editor: FilterEditor,
    pager: Pager,
}

impl<'a> Session<'a> {
    pub fn new(records: &'a [Record], config: &'a ViewerConfig) -> Self {
        Self {
            records,
            config,
            engine: FilterEngine::new(),
            editor: FilterEditor::new(),
            pager: Pager::new(config.display.page_size),
        }
    }

    pub fn engine(&self) -> &FilterEngine {
        &self.engine
    }

    /// Seed the committed criteria, e.g. from a --filter expression.
    pub fn apply_criteria(&mut self, criteria: FilterCriteria) {
        self.engine.apply_criteria(criteria);
    }

    pub fn editor(&self) -> &FilterEditor {
        &self.editor
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.render_table(out)?;
        writeln!(out, "Type 'help' for commands.")?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match SessionCommand::parse(&line) {
                Ok(command) => command,
                Err(message) => {
                    writeln!(out, "{}", message)?;
                    continue;
                }
            };

            if command == SessionCommand::Quit {
                break;
            }
            self.execute(command, out)?;
        }

        Ok(())
    }

    fn execute<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> Result<()> {
        match command {
            SessionCommand::Show => self.render_table(out)?,
            SessionCommand::Open(id) => match self.records.iter().find(|r| r.id == id) {
                Some(record) => {
                    self.editor.open(Some(record.clone()));
                    writeln!(out, "Filter Options (row: {})", record.name)?;
                    self.render_draft(out)?;
                }
                None => writeln!(out, "No record with id {}", id)?,
            },
            SessionCommand::Close => {
                self.editor.close();
                writeln!(out, "Panel closed; draft discarded.")?;
            }
            SessionCommand::Set(field, value) => {
                if !self.editor.is_open() {
                    writeln!(out, "The filter panel is closed. Use 'open <id>' first.")?;
                } else {
                    self.editor.update_field(field, &value);
                    self.render_draft(out)?;
                }
            }
            SessionCommand::Draft => {
                if self.editor.is_open() {
                    self.render_draft(out)?;
                } else {
                    writeln!(out, "The filter panel is closed.")?;
                }
            }
            SessionCommand::Apply => match self.editor.commit() {
                Some(criteria) => {
                    self.engine.apply_criteria(criteria);
                    writeln!(out, "Filters applied.")?;
                    self.render_table(out)?;
                }
                None => writeln!(out, "Nothing to apply: the filter panel is closed.")?,
            },
            SessionCommand::Clear => {
                self.engine.clear_criteria();
                writeln!(out, "Filters cleared.")?;
                self.render_table(out)?;
            }
            SessionCommand::Filters => {
                write!(out, "{}", format_applied_filters(self.engine.criteria()))?;
            }
            SessionCommand::Next => {
                let total = self.engine.derive_visible(self.records).len();
                self.pager.next(total);
                self.render_table(out)?;
            }
            SessionCommand::Prev => {
                let total = self.engine.derive_visible(self.records).len();
                self.pager.prev(total);
                self.render_table(out)?;
            }
            SessionCommand::Page(number) => {
                let total = self.engine.derive_visible(self.records).len();
                self.pager.jump(number, total);
                self.render_table(out)?;
            }
            SessionCommand::Help => writeln!(out, "{}", HELP_TEXT)?,
            SessionCommand::Quit => {}
        }
        Ok(())
    }

    fn render_table<W: Write>(&self, out: &mut W) -> Result<()> {
        let visible = self.engine.derive_visible(self.records);
        write!(out, "{}", format_applied_filters(self.engine.criteria()))?;
        writeln!(
            out,
            "{}",
            render_record_table(self.pager.slice(&visible), &self.config.display)
        )?;
        writeln!(out, "{}", self.pager.footer(visible.len()))?;
        Ok(())
    }

    fn render_draft<W: Write>(&self, out: &mut W) -> Result<()> {
        let draft = self.editor.draft();
        writeln!(out, "Draft: {}", describe_draft(draft))?;
        Ok(())
    }
}

fn describe_draft(draft: &FilterCriteria) -> String {
    let labels = draft.active_filter_labels();
    if labels.is_empty() {
        "(no constraints)".to_string()
    } else {
        labels.join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_joins_value_tokens() {
        let command = SessionCommand::parse("set name Desk Lamp").unwrap();
        assert_eq!(
            command,
            SessionCommand::Set(DraftField::Name, "Desk Lamp".to_string())
        );
    }

    #[test]
    fn test_parse_set_with_empty_value() {
        let command = SessionCommand::parse("set name").unwrap();
        assert_eq!(command, SessionCommand::Set(DraftField::Name, String::new()));
    }

    #[test]
    fn test_parse_rejects_unknown_command() {
        assert!(SessionCommand::parse("frobnicate").is_err());
        assert!(SessionCommand::parse("open twelve").is_err());
        assert!(SessionCommand::parse("set color red").is_err());
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(SessionCommand::parse("n").unwrap(), SessionCommand::Next);
        assert_eq!(SessionCommand::parse("q").unwrap(), SessionCommand::Quit);
        assert_eq!(SessionCommand::parse("?").unwrap(), SessionCommand::Help);
    }
}
