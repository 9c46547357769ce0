use std::env;

use tracing_subscriber::EnvFilter;

mod cli;
#[cfg(unix)]
mod exits;
mod terminal;

fn main() {
    #[cfg(unix)]
    exits::install_handlers();
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    let filter = EnvFilter::try_from_env("PASSFORGE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let args: Vec<String> = env::args().collect();
    std::process::exit(cli::run(args));
}
