use std::fmt::Display;

pub trait ResultExt<T, InitialError> {
    /// Map an error to a string-based error variant
    ///
    /// Folds a foreign error into a variant that only keeps its message, using the
    /// `Display` implementation of `InitialError`.
    ///
    /// # Example
    /// ```rust
    /// use moneta_util::result_ext::ResultExt;
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// enum MyError {
    ///     #[error("bad number: {0}")]
    ///     Parse(String),
    /// }
    ///
    /// fn example() -> Result<u8, MyError> {
    ///     "300".parse::<u8>().map_err_str(MyError::Parse)
    /// }
    ///
    /// assert!(example().is_err());
    /// ```
    fn map_err_str<FinalError, F>(self, f: F) -> Result<T, FinalError>
    where
        InitialError: Display,
        F: FnOnce(String) -> FinalError;
}

impl<Type, InitialError> ResultExt<Type, InitialError> for Result<Type, InitialError> {
    fn map_err_str<FinalError, F>(self, f: F) -> Result<Type, FinalError>
    where
        InitialError: Display,
        F: FnOnce(String) -> FinalError,
    {
        self.map_err(|e| f(e.to_string()))
    }
}
