use std::str::FromStr;

use business::domain::product::value_objects::ProductId;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  list                            show the current page
  reload                          fetch the current page again
  next | prev                     move one page forward or back
  page <n>                        jump to page n
  create <name> <price> <stock>   add a product (the name may contain spaces)
  delete <id>                     remove a product shown on this page
  help                            show this help
  quit                            exit";

/// A line of console input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Reload,
    Next,
    Prev,
    Page(u32),
    /// Raw form inputs. Validation happens in the product form.
    Create {
        name: String,
        price: String,
        stock: String,
    },
    Delete(ProductId),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Type a command, or 'help' to list them")]
    Empty,

    #[error("Unknown command '{0}', type 'help' to list commands")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a valid page number")]
    InvalidPage(String),

    #[error("{0}")]
    InvalidId(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Err(CommandError::Empty);
        };
        let args: Vec<&str> = words.collect();

        match keyword.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(Command::List),
            "reload" | "r" => Ok(Command::Reload),
            "next" | "n" => Ok(Command::Next),
            "prev" | "p" => Ok(Command::Prev),
            "page" => match args.as_slice() {
                [page] => page
                    .parse::<u32>()
                    .map(Command::Page)
                    .map_err(|_| CommandError::InvalidPage(page.to_string())),
                _ => Err(CommandError::Usage("page <n>")),
            },
            "create" | "add" => match args.as_slice() {
                [name @ .., price, stock] if !name.is_empty() => Ok(Command::Create {
                    name: name.join(" "),
                    price: price.to_string(),
                    stock: stock.to_string(),
                }),
                _ => Err(CommandError::Usage("create <name> <price> <stock>")),
            },
            "delete" | "rm" => match args.as_slice() {
                [id] => id
                    .parse::<ProductId>()
                    .map(Command::Delete)
                    .map_err(CommandError::InvalidId),
                _ => Err(CommandError::Usage("delete <id>")),
            },
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
