//! Export a template's variant selection for every Hangul syllable
//!
//! Usage:
//!   cargo run -p export_variants -- --template POKE_PT --format json
//!   cargo run -p export_variants -- --format csv --output poke_pt.csv

use clap::Parser;
use hangul_templates::{builtin_registry, selection_table, SelectionRow};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "export_variants")]
#[command(about = "Export per-syllable variant selections to JSON or CSV")]
struct Args {
    /// Template name
    #[arg(short, long, default_value = "POKE_PT")]
    template: String,

    /// Output format: json or csv
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only export syllables with a trailing consonant
    #[arg(long)]
    closed_only: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let registry = builtin_registry()?;
    let template = registry.get(&args.template)?;

    let mut rows = selection_table(template)?;
    if args.closed_only {
        rows.retain(|r| r.jongseong.is_some());
    }

    let output = match args.format.as_str() {
        "json" => export_json(&rows)?,
        "csv" => export_csv(&rows),
        _ => anyhow::bail!("Unsupported format: {}. Use 'json' or 'csv'", args.format),
    };

    if let Some(path) = args.output {
        std::fs::write(path, output)?;
    } else {
        print!("{}", output);
    }

    Ok(())
}

fn export_json(rows: &[SelectionRow]) -> anyhow::Result<String> {
    let json = serde_json::to_string_pretty(rows)?;
    Ok(json)
}

fn export_csv(rows: &[SelectionRow]) -> String {
    let mut output =
        String::from("syllable,codepoint,choseong,jungseong,jongseong,choseong_variant,jungseong_variant,jongseong_variant\n");
    for r in rows {
        let jongseong = r.jongseong.map(String::from).unwrap_or_default();
        output.push_str(&format!(
            "{},U+{:04X},{},{},{},{},{},{}\n",
            r.syllable,
            r.codepoint,
            r.choseong,
            r.jungseong,
            jongseong,
            r.choseong_variant,
            r.jungseong_variant,
            r.jongseong_variant
        ));
    }
    output
}
