pub mod matrix;
pub mod run_card;
pub mod station;
pub mod util;
pub mod zone;
