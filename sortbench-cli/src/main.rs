//! `sortbench` binary entry point.
//!
//! One diagnostic line on stderr and a failure status on any error; the full
//! table on stdout otherwise.

fn main() {
    if let Err(err) = sortbench_cli::run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
