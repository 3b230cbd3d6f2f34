use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    /// A sequence was pulled after it yielded its last element.
    #[error("no more elements")]
    Exhausted,

    #[error("arithmetic overflow in {op}")]
    Overflow { op: &'static str },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("negative value specified for the number of elements in a combination")]
    NegativeChoose,

    #[error("number of elements to combine is less than the number of elements in a combination")]
    TooFewElements,
}
