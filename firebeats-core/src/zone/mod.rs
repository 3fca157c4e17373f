mod error;
mod zone_code;
mod zone_id;
mod zone_table;

pub use error::ZoneError;
pub use zone_code::ZoneCode;
pub use zone_id::ZoneId;
pub use zone_table::{ZoneTable, ZoneTableRow};
