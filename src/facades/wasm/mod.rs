pub mod alerts;
pub mod converters;
pub mod format;
