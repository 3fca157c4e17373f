#[derive(thiserror::Error, Debug)]
pub enum ZoneError {
    #[error("zone label '{0}' does not begin with a numeric prefix")]
    Format(String),
    #[error("zone label '{label}' has a numeric prefix that cannot be read: {message}")]
    NumericPrefix { label: String, message: String },
    #[error("failure writing zone table to '{path}': {message}")]
    Write { path: String, message: String },
}
