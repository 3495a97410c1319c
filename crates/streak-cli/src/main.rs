//! CLI frontend for the Streak odds calculator.

mod commands;
mod prompt;

use std::process;

use clap::{Parser, Subcommand};

use commands::{CalcArgs, PlayArgs};

#[derive(Parser)]
#[command(
    name = "streak",
    about = "Streak: how likely was that run of luck?",
    version,
    propagate_version = true,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Log modifier and calculation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    play: PlayArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the questions one at a time (the default)
    Play(PlayArgs),

    /// Compute the odds of a streak from flags, without prompting
    Calc(CalcArgs),

    /// List the supported games and the parameters their modifiers need
    Games,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        None => commands::play::run(cli.play.game, &cli.play.config.to_config()),
        Some(Commands::Play(args)) => commands::play::run(args.game, &args.config.to_config()),
        Some(Commands::Calc(args)) => commands::calc::run(&args),
        Some(Commands::Games) => commands::games::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
