//! `todo lang` command implementation

use anyhow::{bail, Result};
use clap::Args;

use crate::config::{save_config, Config};
use crate::i18n::{self, Language};

#[derive(Args)]
pub struct LangArgs {
    /// Language code to switch to (en, fr, es, it, de)
    pub code: Option<String>,
}

pub fn run(args: LangArgs) -> Result<()> {
    let mut config = Config::load()?;

    let Some(code) = args.code else {
        println!("{}: {}", config.language.tr(i18n::LANGUAGE), config.language);
        println!();
        for lang in Language::ALL {
            let marker = if lang == config.language { "*" } else { " " };
            println!("  {} {:<3} {}", marker, lang.code(), lang.name());
        }
        return Ok(());
    };

    let Some(language) = Language::parse(&code) else {
        bail!(
            "Unknown language '{}'. Supported: {}",
            code,
            i18n::supported_codes()
        );
    };

    config.language = language;
    save_config(&config)?;
    println!("{}: {}", language.tr(i18n::LANGUAGE), language);
    Ok(())
}
