use clap::Parser;
use hangul_templates::{builtin_registry, explain, Syllable};

#[derive(Parser, Debug)]
#[command(name = "show_syllable")]
#[command(about = "Explain which component variants a template picks for syllables")]
struct Args {
    /// Syllables to explain, e.g. 러테돝
    text: String,

    #[arg(short, long, default_value = "POKE_PT")]
    template: String,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let registry = builtin_registry()?;
    let template = registry.get(&args.template)?;

    for ch in args.text.chars().filter(|c| !c.is_whitespace()) {
        let Some(syllable) = Syllable::from_char(ch) else {
            eprintln!("'{}' (U+{:04X}) is not a Hangul syllable, skipping", ch, ch as u32);
            continue;
        };
        let report = explain(template, syllable)?;
        if args.json {
            println!("{}", serde_json::to_string(&report)?);
            continue;
        }
        println!("{} U+{:04X}", report.syllable, report.codepoint);
        for c in &report.components {
            println!("  {} {} #{} {}", c.class.tag(), c.symbol, c.variant + 1, c.description);
        }
    }

    Ok(())
}
