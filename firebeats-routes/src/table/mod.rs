mod datetime_ops;
mod error;
mod join;
mod records;

pub use datetime_ops::{deserialize_utc_datetime, parse_utc_datetime};
pub use error::TableError;
pub use join::{join_responses, ResponseRecord, ResponseTables};
pub use records::{
    read_records, IncidentRecord, IncidentReportRecord, StationRecord, StationReportRecord,
};
