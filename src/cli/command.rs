//! Command-line parsing.

use crate::error::CommandError;

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Phone { name: String },
    ShowAll,
    Find { query: String },
    Delete { name: String },
    Rename { old: String, new: String },
    Birthday { name: String, date: String },
    Days { name: String },
    Upcoming { days: i64 },
    Match { name: String },
    Save,
    Exit,
}

/// Keywords with their usage line, for the help text.
pub const USAGE: &[(&str, &str)] = &[
    ("hello", "hello"),
    ("help", "help"),
    ("add", "add [name] [phone]"),
    ("change", "change [name] [old_phone] [new_phone]"),
    ("phone", "phone [name]"),
    ("show", "show all"),
    ("find", "find [text]"),
    ("delete", "delete [name]"),
    ("rename", "rename [old_name] [new_name]"),
    ("birthday", "birthday [name] [YYYY-MM-DD]"),
    ("days", "days [name]"),
    ("upcoming", "upcoming [days]"),
    ("match", "match [name]"),
    ("save", "save"),
    ("exit", "good bye | close | exit"),
];

fn usage(keyword: &str) -> &'static str {
    USAGE
        .iter()
        .find(|(k, _)| *k == keyword)
        .map(|(_, usage)| *usage)
        .unwrap_or("help")
}

fn expect_args<'a>(
    args: &'a [&'a str],
    count: usize,
    keyword: &str,
) -> Result<&'a [&'a str], CommandError> {
    if args.len() == count {
        Ok(args)
    } else {
        Err(CommandError::Usage {
            usage: usage(keyword),
        })
    }
}

fn join_rest(args: &[&str], keyword: &str) -> Result<String, CommandError> {
    if args.is_empty() {
        Err(CommandError::Usage {
            usage: usage(keyword),
        })
    } else {
        Ok(args.join(" "))
    }
}

impl Command {
    /// Parse one input line.
    ///
    /// Keywords are case-insensitive; arguments are kept as typed. Names are
    /// single words, except for `find` and `match` which take the rest of
    /// the line.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let keyword = match words.next() {
            Some(word) => word.to_lowercase(),
            None => return Err(CommandError::Empty),
        };
        let args: Vec<&str> = words.collect();

        let exact = |count: usize| expect_args(&args, count, &keyword);
        let rest = || join_rest(&args, &keyword);

        let command = match keyword.as_str() {
            "hello" => {
                exact(0)?;
                Command::Hello
            }
            "help" => Command::Help,
            "add" => {
                let a = exact(2)?;
                Command::Add {
                    name: a[0].to_string(),
                    phone: a[1].to_string(),
                }
            }
            "change" => {
                let a = exact(3)?;
                Command::Change {
                    name: a[0].to_string(),
                    old: a[1].to_string(),
                    new: a[2].to_string(),
                }
            }
            "phone" => Command::Phone {
                name: exact(1)?[0].to_string(),
            },
            "show" => match args.as_slice() {
                [all] if all.eq_ignore_ascii_case("all") => Command::ShowAll,
                _ => {
                    return Err(CommandError::Usage {
                        usage: usage("show"),
                    })
                }
            },
            "find" => Command::Find { query: rest()? },
            "delete" => Command::Delete {
                name: exact(1)?[0].to_string(),
            },
            "rename" => {
                let a = exact(2)?;
                Command::Rename {
                    old: a[0].to_string(),
                    new: a[1].to_string(),
                }
            }
            "birthday" => {
                let a = exact(2)?;
                Command::Birthday {
                    name: a[0].to_string(),
                    date: a[1].to_string(),
                }
            }
            "days" => Command::Days {
                name: exact(1)?[0].to_string(),
            },
            "upcoming" => {
                let a = exact(1)?;
                let days = a[0]
                    .parse::<i64>()
                    .ok()
                    .filter(|days| *days >= 0)
                    .ok_or(CommandError::Usage {
                        usage: usage("upcoming"),
                    })?;
                Command::Upcoming { days }
            }
            "match" => Command::Match { name: rest()? },
            "save" => {
                exact(0)?;
                Command::Save
            }
            "good" => match args.as_slice() {
                [bye] if bye.eq_ignore_ascii_case("bye") => Command::Exit,
                _ => return Err(CommandError::Unknown(line.trim().to_string())),
            },
            "close" | "exit" => Command::Exit,
            _ => return Err(CommandError::Unknown(line.trim().to_string())),
        };

        Ok(command)
    }
}
