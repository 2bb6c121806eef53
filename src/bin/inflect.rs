use anyhow::Context;
use clap::Parser;
use menagerie::utils::logger;
use menagerie::{Case, DictionaryAnalyzer, Inflector};

#[derive(Parser)]
#[command(name = "inflect")]
#[command(about = "Put Russian nouns into a grammatical case")]
struct Args {
    /// Words to inflect (nominative or any known form)
    #[arg(required = true)]
    words: Vec<String>,

    /// Target case: nomn, gent, datv, accs, ablt, loct (or the English names)
    #[arg(short, long)]
    case: Case,

    /// Guess forms for words missing from the lexicon
    #[arg(long)]
    guess: bool,

    /// Extra lexicon TOML merged into the built-in one
    #[arg(long)]
    lexicon: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let mut analyzer = DictionaryAnalyzer::builtin().context("built-in lexicon is broken")?;
    if let Some(path) = &args.lexicon {
        analyzer = analyzer
            .with_lexicon_file(path)
            .with_context(|| format!("failed to load lexicon '{}'", path))?;
    }
    let inflector = Inflector::new(analyzer.with_guessing(args.guess));

    tracing::debug!(
        "Inflecting {} words into {}",
        args.words.len(),
        args.case
    );

    for word in &args.words {
        println!("{} → {}", word, inflector.inflect(word, args.case));
    }

    Ok(())
}
