use std::fmt;
use errno::Errno;

#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    Lookup(Errno),
    Schema(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::Lookup(errno) => write!(f, "process lookup failed: {}", errno),
            Error::Schema(msg)   => write!(f, "process record mismatch: {}", msg),
        }
    }
}
