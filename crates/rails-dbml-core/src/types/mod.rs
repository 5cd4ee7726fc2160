mod column_type;
mod line;
mod param_map;
mod statement;
mod warning;

pub use column_type::ColumnType;
pub use line::Line;
pub use param_map::ParamMap;
pub use statement::Statement;
pub use warning::{ConversionWarning, WarningKind};
