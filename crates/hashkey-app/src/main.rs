use std::io::Write;

use hashkey_app::{
    cli::{Cli, CliError},
    settings::Settings,
};
use hashkey_core::{generate, report};

fn main() -> Result<(), String> {
    let cli = match Cli::parse_from_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err @ CliError::Usage) => {
            println!("{err}");
            std::process::exit(1);
        }
    };

    dotenvy::dotenv().ok();
    let settings = Settings::from_env();

    hashkey_app::telemetry::init(&settings.log_filter);

    let key = generate(&cli.identifier(), cli.timestamp().as_deref());

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report::render(&key).as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| format!("Failed to write report: {e}"))?;

    tracing::info!(hash_key = %key.hash_key, "report written");

    Ok(())
}
