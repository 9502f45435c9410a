//! Skills command - list the skill vocabulary.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use console::style;

use skilllens_core::SkillVocabulary;

use super::load_config;

/// Arguments for the skills command.
#[derive(Args)]
pub struct SkillsArgs {
    /// JSON skill vocabulary (default: configured or built-in list)
    #[arg(long)]
    vocabulary: Option<PathBuf>,

    /// Only show skills whose name or alias contains this text
    #[arg(long)]
    filter: Option<String>,
}

pub async fn run(args: SkillsArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let vocabulary = match args.vocabulary.or(config.extraction.vocabulary_path) {
        Some(path) => Arc::new(SkillVocabulary::from_file(&path)?),
        None => SkillVocabulary::builtin(),
    };

    let filter = args.filter.map(|f| f.to_lowercase());
    let mut shown = 0;

    for term in vocabulary.iter() {
        if let Some(filter) = &filter {
            let hit = term.name().contains(filter.as_str())
                || term.aliases().iter().any(|a| a.contains(filter.as_str()));
            if !hit {
                continue;
            }
        }

        if term.aliases().is_empty() {
            println!("{}", term.name());
        } else {
            println!(
                "{} {}",
                term.name(),
                style(format!("({})", term.aliases().join(", "))).dim()
            );
        }
        shown += 1;
    }

    eprintln!(
        "{} {} of {} skills",
        style("ℹ").blue(),
        shown,
        vocabulary.len()
    );

    Ok(())
}
