use clap::Parser;

use reviewbot::cli::{check, output, run, CheckCommand, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let result = match &cli.command {
        Commands::Run(args) => run::execute(&cli, args).await,
        Commands::Check(CheckCommand::Config) => check::execute_config(config_path),
        Commands::Check(CheckCommand::Connection) => check::execute_connection(config_path).await,
        #[cfg(feature = "telegram")]
        Commands::Check(CheckCommand::Telegram) => check::execute_telegram().await,
    };

    if let Err(e) = result {
        output::failed(&e.to_string());
        std::process::exit(1);
    }
}
