//! CLI command implementations.

pub(crate) mod format;
pub(crate) mod sample;

pub(crate) use format::FormatArgs;
