use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{name} must be positive, got {value}")]
    InvalidArgument { name: &'static str, value: i64 },

    #[error("site (row={row}, col={col}) is outside a {n}x{n} grid")]
    SiteOutOfRange { row: usize, col: usize, n: usize },

    #[error("element {index} is outside a universe of {len} elements")]
    ElementOutOfRange { index: usize, len: usize },
}

impl Error {
    /// Both coordinate and element-id range failures.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Error::SiteOutOfRange { .. } | Error::ElementOutOfRange { .. }
        )
    }
}
