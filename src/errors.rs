use thiserror::Error;

pub type Result<T> = std::result::Result<T, TagError>;

/// Failure classes of the metadata tag parser.
///
/// Projection itself never surfaces these: a field whose tag fails to
/// parse is simply excluded from the output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("bad syntax for tag pair: {0}")]
    Pair(String),

    #[error("bad syntax for tag key: {0}")]
    Key(String),

    #[error("bad syntax for tag value: {0}")]
    Value(String),
}
