//! Command handlers for the interactive address book.
//!
//! Each parsed [`Command`] is executed against an owned [`AddressBook`] and
//! turned into a plain-text reply. Failures are rendered as friendly messages
//! instead of being propagated, so the command loop never stops on a bad
//! input.

use super::command::{Command, USAGE};
use crate::book::AddressBook;
use crate::error::{AddressBookError, AddressBookResult, CommandError};
use crate::matching::{ContactMatcher, ContactQuery};
use crate::models::Record;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

const NOT_FOUND_REPLY: &str = "Contact not found. Please check the name.";

/// Maximum number of fuzzy matches shown by `match`.
const MAX_MATCH_RESULTS: usize = 5;

/// Minimum fuzzy confidence shown by `match`.
const MATCH_CONFIDENCE_THRESHOLD: u8 = 30;

/// Outcome of handling one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading commands
    Continue(String),

    /// Print the text and stop
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Continue(text) | Reply::Exit(text) => text,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit(_))
    }
}

/// Executes commands against an address book bound to a file.
#[derive(Debug)]
pub struct CommandHandler {
    book: AddressBook,
    book_file: PathBuf,
    today: Option<NaiveDate>,
}

impl CommandHandler {
    pub fn new(book: AddressBook, book_file: impl Into<PathBuf>) -> Self {
        Self {
            book,
            book_file: book_file.into(),
            today: None,
        }
    }

    /// Pin the date used for birthday commands instead of the local date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_file(&self) -> &Path {
        &self.book_file
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Parse and execute one input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => return Reply::Continue(Self::describe_command_error(&e)),
        };
        tracing::debug!(?command, "Handling command");

        match self.execute(command) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::debug!(error = %e, "Command failed");
                Reply::Continue(Self::describe_error(&e))
            }
        }
    }

    fn describe_command_error(err: &CommandError) -> String {
        match err {
            CommandError::Empty => "Please enter a command.".to_string(),
            CommandError::Unknown(_) => "Unknown command. Please try again.".to_string(),
            CommandError::Usage { .. } => err.to_string(),
        }
    }

    fn describe_error(err: &AddressBookError) -> String {
        match err {
            AddressBookError::RecordNotFound(_) => NOT_FOUND_REPLY.to_string(),
            AddressBookError::Validation(e) => e.to_string(),
            AddressBookError::PhoneNotFound(_) => err.to_string(),
            AddressBookError::Io(_) | AddressBookError::Json(_) => {
                format!("Failed to save address book: {}", err)
            }
        }
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> AddressBookResult<Reply> {
        let text = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Help => Self::help(),
            Command::Add { name, phone } => self.add(&name, &phone)?,
            Command::Change { name, old, new } => {
                self.book.edit_phone_in_record(&name, &old, &new)?;
                format!("Phone number for {} changed to {}.", name, new)
            }
            Command::Phone { name } => self.phone(&name)?,
            Command::ShowAll => self.show_all(),
            Command::Find { query } => Self::list(self.book.search_contact(&query)),
            Command::Delete { name } => {
                if self.book.delete(&name) {
                    format!("Contact {} deleted.", name)
                } else {
                    NOT_FOUND_REPLY.to_string()
                }
            }
            Command::Rename { old, new } => {
                self.book.edit_record_name(&old, &new)?;
                format!("Contact {} renamed to {}.", old, new)
            }
            Command::Birthday { name, date } => {
                self.book.set_birthday_for_record(&name, &date)?;
                format!("Birthday for {} set to {}.", name, date)
            }
            Command::Days { name } => self.days(&name)?,
            Command::Upcoming { days } => self.upcoming(days),
            Command::Match { name } => self.fuzzy_match(&name),
            Command::Save => {
                self.save()?;
                format!("Address book saved to {}.", self.book_file.display())
            }
            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
        };
        Ok(Reply::Continue(text))
    }

    /// Persist the book to its file.
    pub fn save(&self) -> AddressBookResult<()> {
        self.book.save_to_file(&self.book_file)
    }

    fn help() -> String {
        let mut text = String::from("Available commands:");
        for (_, usage) in USAGE {
            text.push_str("\n  ");
            text.push_str(usage);
        }
        text
    }

    fn add(&mut self, name: &str, phone: &str) -> AddressBookResult<String> {
        if self.book.contains(name) {
            self.book.add_phone_to_record(name, phone)?;
        } else {
            let mut record = Record::new(name);
            record.add_phone(phone)?;
            self.book.add_record(record);
        }
        Ok(format!(
            "Contact {} with phone number {} added.",
            name, phone
        ))
    }

    fn phone(&self, name: &str) -> AddressBookResult<String> {
        let record = self
            .book
            .find(name)
            .ok_or_else(|| AddressBookError::RecordNotFound(name.to_string()))?;
        if record.phones().is_empty() {
            return Ok(format!("{} has no phone numbers.", name));
        }
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        Ok(format!(
            "The phone number for {} is {}.",
            name,
            phones.join(", ")
        ))
    }

    fn show_all(&self) -> String {
        if self.book.is_empty() {
            return "No contacts found.".to_string();
        }
        let pages = self.book.paginate();
        let total = pages.len();
        let mut text = String::from("All contacts:");
        for (index, page) in pages.enumerate() {
            if total > 1 {
                text.push_str(&format!("\n--- Page {} of {} ---", index + 1, total));
            }
            for record in page {
                text.push('\n');
                text.push_str(&record.to_string());
            }
        }
        text
    }

    fn list(records: Vec<&Record>) -> String {
        if records.is_empty() {
            return "No contacts found.".to_string();
        }
        records
            .iter()
            .map(|record| record.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn days(&self, name: &str) -> AddressBookResult<String> {
        let record = self
            .book
            .find(name)
            .ok_or_else(|| AddressBookError::RecordNotFound(name.to_string()))?;
        Ok(match record.days_to_birthday_from(self.today()) {
            Some(0) => format!("{}'s birthday is today!", name),
            Some(days) => format!("{} days until {}'s birthday.", days, name),
            None => format!("{} has no birthday set.", name),
        })
    }

    fn upcoming(&self, within_days: i64) -> String {
        let upcoming = self.book.upcoming_birthdays(within_days, self.today());
        if upcoming.is_empty() {
            return format!("No birthdays in the next {} days.", within_days);
        }
        upcoming
            .iter()
            .map(|(record, days)| format!("{}: in {} days", record.name(), days))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn fuzzy_match(&self, name: &str) -> String {
        let matcher = ContactMatcher::new();
        let results = matcher.find_matches(
            &ContactQuery::by_name(name),
            &self.book,
            MAX_MATCH_RESULTS,
            MATCH_CONFIDENCE_THRESHOLD,
        );
        if results.is_empty() {
            return "No contacts found.".to_string();
        }
        results
            .iter()
            .map(|m| format!("{} (confidence {})", m.record.name(), m.confidence))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> CommandHandler {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        CommandHandler::new(AddressBook::new(), "unused.json").with_today(today)
    }

    fn reply(handler: &mut CommandHandler, line: &str) -> String {
        handler.handle_line(line).text().to_string()
    }

    #[test]
    fn test_hello_and_exit() {
        let mut h = handler();
        assert_eq!(reply(&mut h, "hello"), "How can I help you?");
        assert_eq!(
            h.handle_line("close"),
            Reply::Exit("Good bye!".to_string())
        );
    }

    #[test]
    fn test_help_lists_usages() {
        let mut h = handler();
        let text = reply(&mut h, "help");
        assert!(text.starts_with("Available commands:"));
        assert!(text.contains("add [name] [phone]"));
    }

    #[test]
    fn test_add_then_phone() {
        let mut h = handler();
        assert_eq!(
            reply(&mut h, "add John 1234567890"),
            "Contact John with phone number 1234567890 added."
        );
        reply(&mut h, "add John 9876543210");
        assert_eq!(
            reply(&mut h, "phone John"),
            "The phone number for John is 1234567890, 9876543210."
        );
        assert_eq!(h.book().len(), 1);
    }

    #[test]
    fn test_add_invalid_phone_creates_nothing() {
        let mut h = handler();
        assert_eq!(reply(&mut h, "add John 123"), "Invalid phone number format");
        assert!(h.book().is_empty());
    }

    #[test]
    fn test_change_phone() {
        let mut h = handler();
        reply(&mut h, "add John 1234567890");
        assert_eq!(
            reply(&mut h, "change John 1234567890 1112223333"),
            "Phone number for John changed to 1112223333."
        );
        assert_eq!(
            reply(&mut h, "change John 5555555555 1112223333"),
            "Phone number 5555555555 not found"
        );
        assert_eq!(
            reply(&mut h, "change Nobody 1234567890 1112223333"),
            NOT_FOUND_REPLY
        );
    }

    #[test]
    fn test_unknown_and_usage() {
        let mut h = handler();
        assert_eq!(reply(&mut h, "dance"), "Unknown command. Please try again.");
        assert_eq!(
            reply(&mut h, "phone"),
            "Invalid command format. Please use 'phone [name]'."
        );
        assert_eq!(reply(&mut h, ""), "Please enter a command.");
    }

    #[test]
    fn test_show_all_pages() {
        let mut h = CommandHandler::new(
            AddressBook::with_page_size(std::num::NonZeroUsize::new(2).unwrap()),
            "unused.json",
        );
        assert_eq!(reply(&mut h, "show all"), "No contacts found.");

        reply(&mut h, "add Ann 1111111111");
        reply(&mut h, "add Bob 2222222222");
        reply(&mut h, "add Cat 3333333333");
        assert_eq!(
            reply(&mut h, "show all"),
            "All contacts:\n\
             --- Page 1 of 2 ---\n\
             Contact name: Ann, phones: 1111111111\n\
             Contact name: Bob, phones: 2222222222\n\
             --- Page 2 of 2 ---\n\
             Contact name: Cat, phones: 3333333333"
        );
    }

    #[test]
    fn test_find_delete_rename() {
        let mut h = handler();
        reply(&mut h, "add John 1234567890");
        reply(&mut h, "add Jane 5550001111");

        assert_eq!(
            reply(&mut h, "find 555"),
            "Contact name: Jane, phones: 5550001111"
        );
        assert_eq!(
            reply(&mut h, "rename John Jon"),
            "Contact John renamed to Jon."
        );
        assert_eq!(reply(&mut h, "phone John"), NOT_FOUND_REPLY);
        assert_eq!(reply(&mut h, "delete Jon"), "Contact Jon deleted.");
        assert_eq!(reply(&mut h, "delete Jon"), NOT_FOUND_REPLY);
        assert_eq!(reply(&mut h, "find zzz"), "No contacts found.");
    }

    #[test]
    fn test_birthday_commands() {
        let mut h = handler();
        reply(&mut h, "add John 1234567890");
        assert_eq!(reply(&mut h, "days John"), "John has no birthday set.");
        assert_eq!(
            reply(&mut h, "birthday John 20-05-1990"),
            "Incorrect birthday format, should be YYYY-MM-DD"
        );
        assert_eq!(
            reply(&mut h, "birthday John 1990-05-20"),
            "Birthday for John set to 1990-05-20."
        );
        assert_eq!(reply(&mut h, "days John"), "10 days until John's birthday.");
        assert_eq!(reply(&mut h, "upcoming 14"), "John: in 10 days");
        assert_eq!(
            reply(&mut h, "upcoming 3"),
            "No birthdays in the next 3 days."
        );
    }

    #[test]
    fn test_fuzzy_match_command() {
        let mut h = handler();
        reply(&mut h, "add John 1234567890");
        assert_eq!(reply(&mut h, "match john"), "John (confidence 95)");
        assert_eq!(reply(&mut h, "match xavier"), "No contacts found.");
    }
}
