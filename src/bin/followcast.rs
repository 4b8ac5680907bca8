//! followcast command-line binary.
//!
//! # Environment Variables
//!
//! - `OPENAI_API_KEY` — pass-through credential for the `tag` command
//! - `FOLLOWCAST_MODEL` — chat model (default: "gpt-4")
//! - `FOLLOWCAST_BASE_URL` — API base URL (default: https://api.openai.com/v1)
//! - `FOLLOWCAST_MIN_SHARED_TAGS` — matcher threshold (default: 2)
//! - `RUST_LOG` — log filter (default: "info")
//!
//! # Usage
//!
//! ```bash
//! followcast tag personas.csv tagged_personas.csv
//! followcast followers tagged_personas.csv followers.csv
//! followcast vocab tagged_personas.csv
//! ```

use std::path::Path;

use anyhow::Context;

use followcast::cli::{parse_command, usage, CliCommand};
use followcast::dataset;
use followcast::llm::{suggest_tags_for_all, OpenAiSuggester};
use followcast::matching::{build_follow_table, persona_vocabulary, MatchConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let command = match args.get(1).map(String::as_str).and_then(parse_command) {
        Some(command) => command,
        None => {
            eprintln!("{}", usage());
            std::process::exit(2);
        }
    };

    match command {
        CliCommand::Version => {
            println!("followcast {}", followcast::VERSION);
            Ok(())
        }
        CliCommand::Vocab => {
            let input = expect_arg(&args, 2, "input CSV")?;
            let personas = dataset::load_personas(Path::new(&input))
                .with_context(|| format!("failed to load {}", input))?;
            for tag in persona_vocabulary(&personas) {
                println!("{}", tag);
            }
            Ok(())
        }
        CliCommand::Followers => {
            let input = expect_arg(&args, 2, "input CSV")?;
            let output = expect_arg(&args, 3, "output CSV")?;
            let personas = dataset::load_personas(Path::new(&input))
                .with_context(|| format!("failed to load {}", input))?;
            let config = match_config_from_env()?;
            let rows = build_follow_table(&personas, &config)?;
            dataset::write_follow_table(Path::new(&output), &rows)
                .with_context(|| format!("failed to write {}", output))?;
            log::info!("wrote {} follow rows to {}", rows.len(), output);
            Ok(())
        }
        CliCommand::Tag => {
            let input = expect_arg(&args, 2, "input CSV")?;
            let output = expect_arg(&args, 3, "output CSV")?;
            let mut personas = dataset::load_personas(Path::new(&input))
                .with_context(|| format!("failed to load {}", input))?;

            let mut suggester = OpenAiSuggester::new(std::env::var("OPENAI_API_KEY").ok());
            if let Ok(model) = std::env::var("FOLLOWCAST_MODEL") {
                suggester = suggester.with_model(model);
            }
            if let Ok(base_url) = std::env::var("FOLLOWCAST_BASE_URL") {
                suggester = suggester.with_base_url(base_url);
            }

            suggest_tags_for_all(&suggester, &mut personas).await?;
            dataset::write_tagged_personas(Path::new(&output), &personas)
                .with_context(|| format!("failed to write {}", output))?;
            log::info!("wrote {} tagged personas to {}", personas.len(), output);
            Ok(())
        }
    }
}

fn expect_arg(args: &[String], index: usize, what: &str) -> anyhow::Result<String> {
    match args.get(index) {
        Some(arg) => Ok(arg.clone()),
        None => {
            eprintln!("{}", usage());
            anyhow::bail!("missing argument: {}", what)
        }
    }
}

fn match_config_from_env() -> anyhow::Result<MatchConfig> {
    let mut config = MatchConfig::default();
    if let Ok(raw) = std::env::var("FOLLOWCAST_MIN_SHARED_TAGS") {
        config.min_shared_tags = raw
            .parse()
            .with_context(|| format!("FOLLOWCAST_MIN_SHARED_TAGS is not a number: {}", raw))?;
    }
    Ok(config)
}
