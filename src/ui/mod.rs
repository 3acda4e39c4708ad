pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{status, success, warn};
pub use table::{report_list, report_table};
pub use theme::{theme, Theme};
