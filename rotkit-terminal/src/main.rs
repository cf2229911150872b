/// rotkit - rotation matrices, Euler angles and rigid transforms from the terminal
///
/// Examples:
///   rotkit build zyx "30 45 60"
///   rotkit axis-angle --axis "1 0 0" --angle 45
///   rotkit extract "0.5 -0.866 0; 0.866 0.5 0; 0 0 1"
///   rotkit transform --rotate x:30 --rotate y:60 --rotate z:90 --translate "10 5 6" --point "1 2 3"

use clap::Parser;
use crossterm::tty::IsTty;
use rotkit_terminal::{App, Cli};
use std::io::stdout;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let color = !cli.no_color && stdout().is_tty();

    let mut app = App::new(stdout().lock(), color);
    match app.run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
