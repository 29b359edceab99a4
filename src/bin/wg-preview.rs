use std::ffi::OsString;
use wondergray::{args, error::GrayError, help};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    help::maybe_print_help_and_exit("wg-preview");
    let arguments: Vec<_> = std::env::args_os().collect();

    if let Err(e) = real_main(arguments) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn real_main(args: Vec<OsString>) -> Result<(), GrayError> {
    let plan = args::parse_args(args)?;
    plan.execute()
}
