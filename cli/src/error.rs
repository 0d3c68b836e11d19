use std::num::ParseIntError;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid index `{text}`: {source}")]
    InvalidIndex {
        text: String,
        source: ParseIntError,
    },
    #[error("the number of runs must be at least 1")]
    NoRuns,
}
