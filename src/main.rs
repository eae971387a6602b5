use clap::{Parser, Subcommand};
use colored::Colorize;

use gh_sponsors::error::SponsorsError;
use gh_sponsors::sponsors::list::{list_run, new_cmd_list, ListArgs};
use gh_sponsors::{Bootstrap, Factory};

/// Find out who sponsors a GitHub account
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The GitHub host to query
    #[arg(long, global = true, env = "GH_HOST")]
    hostname: Option<String>,

    /// Print debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List sponsors for a user
    #[command(after_help = "Examples:\n  $ gh-sponsors list monalisa")]
    List(ListArgs),
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(args) {
        log::debug!("{e:?}");
        eprintln!("{}", e.to_string().bold().red());
        if e.is_flag_error() {
            eprintln!("Run with --help for usage.");
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), SponsorsError> {
    let bootstrap = Bootstrap::new(args.hostname)?;
    let factory = Factory::new(bootstrap);

    match args.command {
        Command::List(list_args) => new_cmd_list(&factory, &list_args, list_run),
    }
}
