use clap::Parser;
use tracing_subscriber::EnvFilter;

use project_audit::cli::{Cli, Commands};
use project_audit::commands::{run_audit, run_init, run_templates, run_uv};

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let exit_code = match &cli.command {
        Commands::Audit(args) => run_audit(args, &cli),
        Commands::Uv(args) => run_uv(args, &cli),
        Commands::Init(args) => run_init(args, cli.quiet),
        Commands::Templates(args) => run_templates(args, cli.quiet),
    };

    std::process::exit(exit_code);
}

fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
