use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Input doesn't match either linear function shape
    #[error("malformed linear function: {0:?}")]
    MalformedLinearFunction(String),

    /// No slope-variable sub-expression could be located
    #[error("no variable term found in {0:?}")]
    MissingVariableTerm(String),

    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// Symbol can't be told apart from signs, digits or decimal points
    #[error("invalid variable symbol: {0:?}")]
    InvalidVariable(char),
}
