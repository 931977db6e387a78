use std::process::ExitCode;

use clap::Parser;
use scripts::{
    cli::{parse_error_exit_code, Cli},
    commands::exit_code,
    utils::setup_logging,
};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match parse_error_exit_code(&e) {
            Some(code) => {
                let _ = e.print();
                return ExitCode::from(code);
            }
            None => e.exit(),
        },
    };
    setup_logging();

    let res = cli.run().await;
    if let Err(e) = &res {
        error!("{e}");
    }

    ExitCode::from(exit_code(&res))
}
