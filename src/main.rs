use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::Level;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lay out a page of profiles as an orbit and print the statistics
    Layout(cmd::layout::LayoutArgs),
    /// Run one page transition in real time and log its phases
    Transition(cmd::transition::TransitionArgs),
}

fn main() {
    // Raw matches let config merging tell typed flags from defaults.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Layout(args) => match matches.subcommand_matches("layout") {
            Some(sub_matches) => cmd::layout::run(args, sub_matches),
            None => unreachable!("clap routed a layout command without its matches"),
        },
        Commands::Transition(args) => cmd::transition::run(args),
    };

    if let Err(e) = result {
        eprintln!("\n❌ FATAL ERROR:");
        eprintln!("   {}", e);
        process::exit(1);
    }
}
