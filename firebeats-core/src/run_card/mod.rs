mod directory_source;
mod error;
mod source;

pub use directory_source::{DirectoryRunCardSource, RunCardRecord};
pub use error::RunCardError;
pub use source::RunCardSource;
