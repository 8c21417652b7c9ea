//! Command implementations for the `farm` binary
//!
//! Each command loads one scenario file and reports on its ability list.

mod check;
mod lint;
mod select;

pub use check::Check;
pub use lint::Lint;
pub use select::Select;
