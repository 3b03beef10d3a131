pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{error, header, info, kcal, success, summary_row};
pub use table::{entries_table, format_timestamp};
pub use theme::{theme, Theme};
