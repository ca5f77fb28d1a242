use core::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A heap was configured without a comparison function.
    MissingComparator,
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::MissingComparator => write!(fmt, "priority queue requires a comparator"),
        }
    }
}

impl std::error::Error for Error {}
