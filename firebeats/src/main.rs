use clap::Parser;
use firebeats::app::{FirebeatsApp, FirebeatsAppError};

fn main() -> Result<(), FirebeatsAppError> {
    env_logger::init();
    let args = FirebeatsApp::parse();
    args.op.run()
}
