// --- Fall course planner: console entry point ---

use std::io;
use std::process::ExitCode;

use courseplan::catalog::Catalog;
use courseplan::config::Config;
use courseplan::run_session;

fn run() -> courseplan::Result<()> {
    let config = Config::from_env()?;
    let catalog = Catalog::fall()?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&config, &catalog, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
