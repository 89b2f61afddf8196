use relax2d::cli::Args;

fn main() {
    let args = Args::cli_setup("relax2d");
    if let Err(e) = args.run() {
        tracing::error!("{e}");
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
}
