use clap::Parser;

use rpgle_guard::cli::{Cli, Commands};
use rpgle_guard::commands::{run_check, run_init, run_rules, run_stats};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Stats(args) => run_stats(args, &cli),
        Commands::Rules(args) => run_rules(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
