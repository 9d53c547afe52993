use std::fmt;
use std::io;
use std::sync::OnceLock;

static COLOR_DISABLED: OnceLock<()> = OnceLock::new();

/// Turns off colored error output for the rest of the process.
pub fn disable_color() {
    let _ = COLOR_DISABLED.set(());
}

/// Errors that can occur during decoding or validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character outside the decode table
    InvalidCharacter {
        char: char,
        position: usize,
        /// Copy of the input for context, when the whole input is known
        input: Option<String>,
    },
    /// The input ends in a lone symbol, which cannot carry a whole byte
    MalformedChunk { position: usize },
}

impl DecodeError {
    /// Create an InvalidCharacter error with the input shown for context
    pub fn invalid_character(c: char, position: usize, input: &str) -> Self {
        // Truncate long inputs
        let display_input = match input.char_indices().nth(60) {
            Some((cut, _)) => format!("{}...", &input[..cut]),
            None => input.to_string(),
        };

        DecodeError::InvalidCharacter {
            char: c,
            position,
            input: Some(display_input),
        }
    }

    /// Create an InvalidCharacter error for a byte read from a stream
    pub fn invalid_byte(byte: u8, position: usize) -> Self {
        let c = if byte.is_ascii() {
            byte as char
        } else {
            char::REPLACEMENT_CHARACTER
        };

        DecodeError::InvalidCharacter {
            char: c,
            position,
            input: None,
        }
    }

    /// Position in the input where decoding failed
    pub fn position(&self) -> usize {
        match self {
            DecodeError::InvalidCharacter { position, .. } => *position,
            DecodeError::MalformedChunk { position } => *position,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::InvalidCharacter {
                char: c,
                position,
                input,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!("invalid character {:?} at position {}", c, position),
                )?;

                // Show input with caret pointing at error position
                if let Some(input) = input {
                    writeln!(f)?;
                    writeln!(f)?;
                    writeln!(f, "  {}", input)?;
                    write!(f, "  {}", " ".repeat(*position))?;
                    if use_color {
                        writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                    } else {
                        writeln!(f, "^")?;
                    }
                }

                writeln!(f)?;
                write_hint(
                    f,
                    use_color,
                    "valid characters: 0-9 a-z except u (case-insensitive; o, i, l are read as 0, 1, 1)",
                )
            }
            DecodeError::MalformedChunk { position } => {
                write_header(
                    f,
                    use_color,
                    &format!("input ends with a lone symbol at position {}", position),
                )?;
                writeln!(f)?;
                writeln!(f)?;
                write_hint(
                    f,
                    use_color,
                    "a trailing group of one symbol cannot encode a whole byte; the input is probably truncated",
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors yielded by a decoding stream.
///
/// The source itself may fail, so a stream reports either an I/O error from
/// the source or a decode error from the symbols it produced.
#[derive(Debug)]
pub enum StreamError {
    /// Reading from the source failed
    Io(io::Error),
    /// The source produced symbols that do not decode
    Decode(DecodeError),
}

impl StreamError {
    /// Returns the decode error, if this is one.
    pub fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            StreamError::Decode(e) => Some(e),
            StreamError::Io(_) => None,
        }
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Io(e) => write_header(f, should_use_color(), &format!("read failed: {}", e)),
            StreamError::Decode(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::Io(e) => Some(e),
            StreamError::Decode(e) => Some(e),
        }
    }
}

impl From<io::Error> for StreamError {
    fn from(e: io::Error) -> Self {
        StreamError::Io(e)
    }
}

impl From<DecodeError> for StreamError {
    fn from(e: DecodeError) -> Self {
        StreamError::Decode(e)
    }
}

impl From<StreamError> for io::Error {
    fn from(e: StreamError) -> Self {
        match e {
            StreamError::Io(e) => e,
            StreamError::Decode(e) => io::Error::new(io::ErrorKind::InvalidData, e),
        }
    }
}

fn write_header(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;31merror:\x1b[0m {}", message)
    } else {
        write!(f, "error: {}", message)
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", message)
    } else {
        write!(f, "hint: {}", message)
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    if COLOR_DISABLED.get().is_some() {
        return false;
    }

    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
