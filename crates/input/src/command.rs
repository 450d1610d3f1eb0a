use lifegrid_common::Direction;

/// A high-level command produced by any front end (key press or typed line).
///
/// The session consumes commands, never raw input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Advance one generation.
    Step,
    /// Advance the given number of generations.
    Run(u32),
    /// Move the viewport one cell.
    Pan(Direction),
    /// Reseed the starting rectangle at random.
    Randomize,
    Quit,
    /// Unbound input.
    Noop,
}

/// Errors from parsing a typed command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected a number of generations, got {0:?}")]
    InvalidCount(String),
    #[error("unknown command {0:?}")]
    Unknown(String),
}

impl Command {
    /// Map a single key press. Running several generations needs a count,
    /// so it is only reachable through [`Command::parse`].
    pub fn from_key(key: char) -> Self {
        match key {
            ' ' => Self::Step,
            'w' => Self::Pan(Direction::Up),
            's' => Self::Pan(Direction::Down),
            'a' => Self::Pan(Direction::Left),
            'd' => Self::Pan(Direction::Right),
            'n' => Self::Randomize,
            'q' => Self::Quit,
            _ => Self::Noop,
        }
    }

    /// Parse a typed line such as `r 10`, `step`, `left` or a single key.
    ///
    /// An empty line steps once, like pressing space.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Self::Step);
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "step" => Self::Step,
            "r" | "run" => {
                let count = words.next().unwrap_or("1");
                let n = count
                    .parse::<u32>()
                    .map_err(|_| ParseError::InvalidCount(count.to_string()))?;
                Self::Run(n)
            }
            "up" => Self::Pan(Direction::Up),
            "down" => Self::Pan(Direction::Down),
            "left" => Self::Pan(Direction::Left),
            "right" => Self::Pan(Direction::Right),
            "new" | "random" => Self::Randomize,
            "quit" | "exit" => Self::Quit,
            key if key.chars().count() == 1 => match Self::from_key(key.chars().next().unwrap_or(' ')) {
                Self::Noop => return Err(ParseError::Unknown(head.to_string())),
                command => command,
            },
            _ => return Err(ParseError::Unknown(head.to_string())),
        };

        if let Some(extra) = words.next() {
            if !matches!(command, Self::Run(_)) {
                return Err(ParseError::Unknown(format!("{head} {extra}")));
            }
        }
        Ok(command)
    }
}
