use retrosync_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible.
    logging::init_logging().expect("failed to initialize logging");

    // Parse CLI and dispatch.
    if let Err(err) = cli::run_from_args() {
        eprintln!("retrosync error: {:#}", err);
        std::process::exit(1);
    }
}
