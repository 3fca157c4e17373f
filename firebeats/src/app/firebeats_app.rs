use std::path::Path;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use super::{
    inspect_matrix, read_config_key, run_beats, run_routes, BeatsConfig, FirebeatsAppError,
    RoutesConfig,
};

/// Command line tool compiling fire department beat data for dispatch simulation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct FirebeatsApp {
    #[command(subcommand)]
    pub op: FirebeatsOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum FirebeatsOperation {
    /// build the run-order matrix, zone table, beat geometry and bounds
    Beats {
        /// TOML configuration file with a [beats] table
        #[arg(short, long)]
        configuration_file: String,

        /// location on disk to write output files. if not provided,
        /// use the current working directory.
        #[arg(short, long)]
        output_directory: Option<String>,
    },
    /// route historical responses and write timestamped station routes
    Routes {
        /// TOML configuration file with a [routes] table
        #[arg(short, long)]
        configuration_file: String,

        /// location on disk to write output files. if not provided,
        /// use the current working directory.
        #[arg(short, long)]
        output_directory: Option<String>,
    },
    /// print the contents of a matrix file
    Inspect {
        #[arg(short, long)]
        matrix_file: String,

        /// the file holds facility labels instead of StationIds
        #[arg(short, long)]
        strings: bool,
    },
}

impl FirebeatsOperation {
    pub fn run(&self) -> Result<(), FirebeatsAppError> {
        match self {
            FirebeatsOperation::Beats {
                configuration_file,
                output_directory,
            } => {
                let config = read_config_key::<BeatsConfig>(configuration_file, "beats")?;
                let outdir = output_directory.as_ref().map(Path::new);
                let matrix = run_beats(&config, outdir)?;
                log::info!(
                    "finished compiling {} zones with up to {} runs",
                    matrix.height(),
                    matrix.width()
                );
                Ok(())
            }
            FirebeatsOperation::Routes {
                configuration_file,
                output_directory,
            } => {
                let config = read_config_key::<RoutesConfig>(configuration_file, "routes")?;
                let outdir = output_directory.as_ref().map(Path::new);
                let timelines = run_routes(&config, outdir)?;
                log::info!("finished animating routes for {} stations", timelines.len());
                Ok(())
            }
            FirebeatsOperation::Inspect {
                matrix_file,
                strings,
            } => {
                let mut stdout = std::io::stdout().lock();
                inspect_matrix(Path::new(matrix_file), *strings, &mut stdout)?;
                Ok(())
            }
        }
    }
}
