use crate::domain::AppError;

pub trait GitPort {
    /// Describe HEAD like `git describe --tags --always`.
    ///
    /// Yields the nearest reachable tag (with a `-<n>-g<abbrev>` suffix when
    /// HEAD is past it) or the abbreviated commit id when no tag is reachable.
    fn describe(&self) -> Result<String, AppError>;
}
