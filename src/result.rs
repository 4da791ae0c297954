use crate::error::Error as BbsErr;
/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BbsErr>;
