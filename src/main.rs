use clap::Parser;
use geolocation_plotter::cli::{run, Cli};
use geolocation_plotter::logging::LogContext;
use geolocation_plotter::utils::format_elapsed;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, error, info};

fn main() -> ExitCode {
    let start_time = Instant::now();
    let cli = Cli::parse();

    let log = LogContext::init(cli.log_level());
    debug!("started");

    let exit_code = match run(&cli) {
        Ok(summary) => {
            debug!(
                "plotted {} of {} rows to {}",
                summary.rows_plotted,
                summary.rows_loaded,
                summary.output_file.display()
            );
            info!("Time: {}", format_elapsed(start_time.elapsed()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    };

    log.close();
    exit_code
}
