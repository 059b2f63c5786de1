//! Human-readable renderings of sizes, dates and row numbers.

pub mod date;
pub mod number;
pub mod size;

pub use date::{format_date, format_time};
pub use number::{format_index, group_thousands};
pub use size::format_size;
