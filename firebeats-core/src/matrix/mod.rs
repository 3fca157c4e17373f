mod build;
pub mod codec;
mod error;
mod layout;
mod run_order;

pub use build::build_run_order;
pub use error::MatrixError;
pub use layout::MatrixLayout;
pub use run_order::{RunOrderBuilder, RunOrderMatrix, RunOrderRow};
