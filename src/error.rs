//! Error enum

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// A line violates the expected cell/field layout of its format.
    Format(String),
    /// A companion stream ran out before (or after) the stream driving it.
    Alignment(String),
    /// A gold annotation outside of `ok`/`x`.
    Annotation { line: usize, value: String },
    /// The serialized dictionary artifact could not be decoded.
    Artifact(bincode::Error),
    Custom(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<bincode::Error> for Error {
    fn from(e: bincode::Error) -> Error {
        Error::Artifact(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
