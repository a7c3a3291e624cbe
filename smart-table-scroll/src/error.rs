/// Errors raised while constructing a [`crate::ScrollableTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A required option was not supplied. Carries the option's name.
    #[error("Need to pass `{0}` into ScrollableTable.")]
    MissingRequiredOption(&'static str),
}

pub type Result<T> = core::result::Result<T, TableError>;
