/// Type alias for Result with anyhow::Error as the error type.
/// Adapters and the application layer propagate through this alias; the
/// parsing core returns its own typed errors.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
