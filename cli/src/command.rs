use sweeper_core::{Command, Coord, Coord2, InputEvent, PanelGeometry, PointerButton};
use thiserror::Error;

pub(crate) const HELP: &str = "\
commands:
  r X Y | reveal X Y         open the cell at column X, row Y
  f X Y | flag X Y           toggle a flag on the cell
  click PX PY [left|right]   pointer event at pixel (PX, PY)
  n | new                    restart with the same board
  h | help                   show this help
  q | quit                   leave";

#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum ParseError {
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{0}` expects {1} arguments")]
    WrongArity(&'static str, usize),
    #[error("`{0}` is not a valid number")]
    BadNumber(String),
    #[error("unknown button `{0}`, use left or right")]
    BadButton(String),
}

/// One line of user input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Input {
    Command(Command),
    Event(InputEvent),
    Help,
}

impl Input {
    /// Resolves pointer events against the board, `None` when they miss it.
    pub(crate) fn into_command(self, geometry: &PanelGeometry, size: Coord2) -> Option<Command> {
        match self {
            Self::Command(command) => Some(command),
            Self::Event(event) => geometry.decode(event, size),
            Self::Help => None,
        }
    }
}

fn number<T: std::str::FromStr>(word: &str) -> Result<T, ParseError> {
    word.parse()
        .map_err(|_| ParseError::BadNumber(word.to_string()))
}

fn cell(name: &'static str, args: &[&str]) -> Result<Coord2, ParseError> {
    match args {
        [x, y] => Ok((number::<Coord>(x)?, number::<Coord>(y)?)),
        _ => Err(ParseError::WrongArity(name, 2)),
    }
}

fn no_args(name: &'static str, args: &[&str]) -> Result<(), ParseError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(ParseError::WrongArity(name, 0))
    }
}

/// Parses a line, blank lines yield `None`.
pub(crate) fn parse(line: &str) -> Result<Option<Input>, ParseError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = words.split_first() else {
        return Ok(None);
    };

    let input = match name.to_ascii_lowercase().as_str() {
        "r" | "reveal" => Input::Command(Command::Reveal(cell("reveal", args)?)),
        "f" | "flag" => Input::Command(Command::ToggleFlag(cell("flag", args)?)),
        "click" => {
            let (x, y, button) = match args {
                [x, y] => (x, y, PointerButton::Primary),
                [x, y, button] => {
                    let button = match button.to_ascii_lowercase().as_str() {
                        "left" | "l" => PointerButton::Primary,
                        "right" | "r" => PointerButton::Secondary,
                        _ => return Err(ParseError::BadButton(button.to_string())),
                    };
                    (x, y, button)
                }
                _ => return Err(ParseError::WrongArity("click", 3)),
            };
            Input::Event(InputEvent::Pointer {
                x: number(x)?,
                y: number(y)?,
                button,
            })
        }
        "n" | "new" => {
            no_args("new", args)?;
            Input::Event(InputEvent::Restart)
        }
        "q" | "quit" => {
            no_args("quit", args)?;
            Input::Event(InputEvent::Quit)
        }
        "h" | "help" => Input::Help,
        _ => return Err(ParseError::Unknown(name.to_string())),
    };
    Ok(Some(input))
}
