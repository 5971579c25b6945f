//! Export core modules shared across CLI wrappers.

#[cfg(feature = "excel")]
pub mod log_sheet;
