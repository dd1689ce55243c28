#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    OutOfRange { column: usize, row: usize },
    InvalidDigit(u8),
    InvalidEntry(String),
    DuplicatePosition { column: usize, row: usize },
    MissingPosition { column: usize, row: usize },
    NoPuzzle,
    TomlDeserialize(toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value)
    }
}

impl From<toml::de::Error> for Error {
    fn from(value: toml::de::Error) -> Self {
        Error::TomlDeserialize(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::OutOfRange { column, row } => {
                write!(f, "position [{column},{row}] is out of range (0-8)")
            },
            Self::InvalidDigit(value) => write!(f, "digit {value} is outside 1-9"),
            Self::InvalidEntry(entry) => {
                write!(f, "malformed cell entry '{entry}', expected 'COL,ROW;EXPECTED,FIXED'")
            },
            Self::DuplicatePosition { column, row } => {
                write!(f, "position [{column},{row}] was supplied more than once")
            },
            Self::MissingPosition { column, row } => {
                write!(f, "no entry for position [{column},{row}]")
            },
            Self::NoPuzzle => write!(f, "no puzzle configuration supplied"),
            Self::TomlDeserialize(e) => write!(f, "TOML deserialization error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::TomlDeserialize(e) => Some(e),
            _ => None,
        }
    }
}
