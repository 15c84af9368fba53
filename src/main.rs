//! todo - pending/resolved task tracker

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use todo_tracker::cli::{self, Cli, Commands};
use todo_tracker::tui;

fn main() -> Result<()> {
    if std::env::var("TODO_TRACKER_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("todo_tracker=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completion(args)) => {
            generate(args.shell, &mut Cli::command(), "todo", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Lang(args)) => cli::language::run(args),
        Some(Commands::Add(args)) => cli::add::run(cli.file, args),
        Some(Commands::List(args)) => cli::list::run(cli.file, args),
        Some(Commands::Toggle(args)) => cli::task::run_toggle(cli.file, args),
        Some(Commands::Edit(args)) => cli::task::run_edit(cli.file, args),
        Some(Commands::Delete(args)) => cli::task::run_delete(cli.file, args),
        None => tui::run(cli.file),
    }
}
