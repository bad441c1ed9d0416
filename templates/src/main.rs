use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use hangul_templates::{
    builtin_registry_with, explain, Config, JamoClass, Project, Syllable, SYLLABLE_BASE,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hangul-templates")]
#[command(about = "Apply Hangul syllable templates to a glyph project")]
#[command(version)]
struct Cli {
    /// TOML config (template, start_pointer, collision_policy, validate_rules)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered templates and their variant counts
    List,
    /// Print the documentation rows of a template
    Describe {
        /// Template name (defaults to the configured template)
        template: Option<String>,
    },
    /// Show the variants selected for one syllable
    Select {
        /// A precomposed Hangul syllable, e.g. 러
        syllable: String,
        #[arg(short, long)]
        template: Option<String>,
    },
    /// Apply a template to a project seeded with every syllable glyph
    Apply {
        #[arg(short, long)]
        template: Option<String>,
        /// First placeholder id
        #[arg(short, long)]
        start: Option<u32>,
        /// Overwrite glyphs that already occupy placeholder ids
        #[arg(long)]
        allow_overwrite: bool,
        /// Write the resulting project as JSON
        #[arg(long)]
        dump: Option<PathBuf>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_toml(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e)),
        None => Ok(Config::default()),
    }
}

fn parse_syllable(input: &str) -> Result<Syllable> {
    let mut chars = input.trim().chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        bail!("expected exactly one syllable, got '{}'", input);
    };
    Syllable::from_char(ch).with_context(|| {
        format!(
            "'{}' (U+{:04X}) is not a precomposed Hangul syllable (U+{:04X}..U+D7A3)",
            ch, ch as u32, SYLLABLE_BASE
        )
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref())?;
    tracing::debug!(?config, "loaded configuration");
    let registry = builtin_registry_with(&config)?;

    match cli.command {
        Commands::List => {
            for template in registry.iter() {
                let counts = template.counts();
                println!(
                    "{}\tchoseong={} jungseong={} jongseong={} placeholders={}",
                    template.name(),
                    counts.choseong,
                    counts.jungseong,
                    counts.jongseong,
                    counts.placeholder_count()
                );
            }
        }
        Commands::Describe { template } => {
            let name = template.unwrap_or(config.template);
            let template = registry.get(&name)?;
            for class in JamoClass::ALL {
                println!("[{}]", class);
                for (i, row) in template.docs().rows(class).iter().enumerate() {
                    println!("  {:>2}. {}", i + 1, row);
                }
            }
        }
        Commands::Select { syllable, template } => {
            let name = template.unwrap_or(config.template);
            let template = registry.get(&name)?;
            let report = explain(template, parse_syllable(&syllable)?)?;
            println!("{} U+{:04X} ({})", report.syllable, report.codepoint, report.template);
            for c in &report.components {
                println!("  {:<9} {}  variant {:>2}  {}", c.class.tag(), c.symbol, c.variant + 1, c.description);
            }
        }
        Commands::Apply {
            template,
            start,
            allow_overwrite,
            dump,
        } => {
            if let Some(name) = template {
                config.set_template(&name);
            }
            if let Some(start) = start {
                config.set_start_pointer(start);
            }
            if allow_overwrite {
                config.allow_overwrite(true);
            }

            let mut project = Project::with_hangul_syllables();
            let report = config.apply(&registry, &mut project)?;
            println!(
                "applied {} to {} syllables: {} placeholders at {}..{}",
                report.template,
                report.syllables,
                report.placeholder_count(),
                report.start_pointer,
                report.next_pointer
            );

            if let Some(path) = dump {
                let json = project.to_json().context("Failed to serialize project")?;
                std::fs::write(&path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("wrote {} glyphs to {}", project.len(), path.display());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_syllable() {
        assert_eq!(parse_syllable(" 러 ").unwrap(), Syllable::from_char('러').unwrap());
        assert!(parse_syllable("가나").is_err());
        assert!(parse_syllable("").is_err());
        assert!(parse_syllable("A").is_err());
    }
}
