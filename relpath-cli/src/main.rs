//! Binary entrypoint for relpath

fn main() {
    if let Err(err) = relpath_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
