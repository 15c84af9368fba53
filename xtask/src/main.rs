//! xtask - Development tasks for todo-tracker

use clap::{Parser, Subcommand};
use std::fs;
use std::path::Path;
use todo_tracker::i18n::{self, Language};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for todo-tracker")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate CLI documentation from clap definitions
    GenDocs,
    /// Generate the translation table for every supported language
    GenLocales,
}

fn main() {
    let args = Xtask::parse();
    match args.command {
        Commands::GenDocs => generate_cli_docs(),
        Commands::GenLocales => generate_locale_table(),
    }
}

fn generate_cli_docs() {
    let markdown = clap_markdown::help_markdown::<todo_tracker::cli::Cli>();
    write_doc("reference.md", &markdown);
}

fn generate_locale_table() {
    let mut out = String::from("# Translations\n\n|");
    for lang in Language::ALL {
        out.push_str(&format!(" {} |", lang.name()));
    }
    out.push_str("\n|");
    for _ in Language::ALL {
        out.push_str("---|");
    }
    out.push('\n');

    for key in i18n::LABELS {
        out.push('|');
        for lang in Language::ALL {
            out.push_str(&format!(" {} |", lang.tr(key)));
        }
        out.push('\n');
    }

    write_doc("translations.md", &out);
}

fn write_doc(name: &str, content: &str) {
    let docs_dir = Path::new("docs/cli");
    fs::create_dir_all(docs_dir).expect("Failed to create docs/cli directory");

    let output_path = docs_dir.join(name);
    fs::write(&output_path, content).expect("Failed to write documentation");

    println!("Generated {}", output_path.display());
}
