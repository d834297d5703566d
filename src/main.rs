use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use squatgen::{
    Candidate, DomainFuzzConfig, DomainFuzzer, FuzzConfig, FuzzResult, Fuzzer, Strategy,
    DEFAULT_APPEND_WORDS, DEFAULT_TLD_SWAP_LIST,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "squatgen")]
#[command(about = "Generate typosquatting look-alikes for domains or plain words")]
struct Cli {
    /// Domains (or words, with --word) to generate variations for
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Append every letter a-z
    #[arg(long)]
    addition: bool,

    /// Enable bitsquatting variations
    #[arg(long)]
    bitsquatting: bool,

    /// Enable visual glyph substitution
    #[arg(long)]
    homoglyph: bool,

    /// Enable hyphenation variations
    #[arg(long)]
    hyphenation: bool,

    /// Insert keyboard neighbours around inner characters
    #[arg(long)]
    insertion: bool,

    /// Enable character omission variations
    #[arg(long)]
    omission: bool,

    /// Enable repetition variations
    #[arg(long)]
    repetition: bool,

    /// Replace characters with keyboard neighbours
    #[arg(long)]
    replacement: bool,

    /// Swap adjacent characters
    #[arg(long)]
    transposition: bool,

    /// Enable vowel swapping variations
    #[arg(long)]
    vowel_swap: bool,

    /// Enable subdomain injection variations
    #[arg(long)]
    subdomain: bool,

    /// Enable combosquatting with dictionary words
    #[arg(long)]
    append_word: bool,

    /// Enable TLD swapping
    #[arg(long)]
    tld: bool,

    /// Enable all variation types, including combosquatting and TLD swaps
    #[arg(long)]
    all: bool,

    /// Treat inputs as plain words instead of domains
    #[arg(long)]
    word: bool,

    /// Path to dictionary file for combosquatting (implies --append-word)
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Path to a file of TLDs to swap in (implies --tld)
    #[arg(long)]
    tld_list: Option<PathBuf>,

    /// Drop candidates that are not valid hostnames
    #[arg(long)]
    filter: bool,

    /// Maximum number of variations to output per input (unlimited if not specified)
    #[arg(long)]
    max_variations: Option<usize>,

    /// Print candidates as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn selected(&self) -> Vec<Strategy> {
        let flags = [
            (self.addition, Strategy::Addition),
            (self.bitsquatting, Strategy::Bitsquatting),
            (self.homoglyph, Strategy::Homoglyph),
            (self.hyphenation, Strategy::Hyphenation),
            (self.insertion, Strategy::Insertion),
            (self.omission, Strategy::Omission),
            (self.repetition, Strategy::Repetition),
            (self.replacement, Strategy::Replacement),
            (self.transposition, Strategy::Transposition),
            (self.vowel_swap, Strategy::VowelSwap),
            (self.subdomain, Strategy::Subdomain),
            (self.append_word || self.dictionary.is_some(), Strategy::AppendWord),
            (self.tld || self.tld_list.is_some(), Strategy::Tld),
        ];
        flags
            .into_iter()
            .filter_map(|(on, strategy)| on.then_some(strategy))
            .collect()
    }

    fn word_config(&self) -> FuzzConfig {
        let selected = self.selected();
        if self.all || selected.is_empty() {
            FuzzConfig::default()
        } else {
            FuzzConfig::only(&selected)
        }
    }

    fn domain_config(&self) -> Result<DomainFuzzConfig> {
        let selected = self.selected();
        if !self.all && selected.is_empty() {
            return DomainFuzzConfig::builder()
                .filter_invalid(self.filter)
                .build()
                .context("invalid strategy selection");
        }

        let enabled = |strategy| self.all || selected.contains(&strategy);
        let mut builder = DomainFuzzConfig::builder()
            .base(self.word_config())
            .subdomain(enabled(Strategy::Subdomain))
            .filter_invalid(self.filter);

        if enabled(Strategy::AppendWord) {
            let words = load_list(self.dictionary.as_deref(), DEFAULT_APPEND_WORDS)?;
            builder = builder.append_word(true).append_words(words);
        }
        if enabled(Strategy::Tld) {
            let tlds = load_list(self.tld_list.as_deref(), DEFAULT_TLD_SWAP_LIST)?;
            builder = builder.tld(true).tld_swap_list(tlds);
        }

        builder.build().context("invalid strategy selection")
    }
}

#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    candidates: &'a [Candidate],
}

fn load_list(path: Option<&Path>, fallback: &[&str]) -> Result<Vec<String>> {
    let Some(path) = path else {
        return Ok(fallback.iter().map(|s| s.to_string()).collect());
    };

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(contents
        .lines()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // One engine per input; nothing is shared between them but static tables.
    let results: Vec<FuzzResult> = if cli.word {
        let config = cli.word_config();
        cli.inputs
            .par_iter()
            .map(|input| Fuzzer::new(input.as_str(), config).into_result())
            .collect()
    } else {
        let config = cli.domain_config()?;
        debug!(?config, "domain configuration");
        cli.inputs
            .par_iter()
            .map(|input| {
                DomainFuzzer::new(input, config.clone())
                    .map(DomainFuzzer::into_result)
                    .with_context(|| format!("failed to fuzz {input:?}"))
            })
            .collect::<Result<_>>()?
    };

    let limit = cli.max_variations.unwrap_or(usize::MAX);
    let mut total = 0;

    if cli.json {
        let reports: Vec<Report<'_>> = cli
            .inputs
            .iter()
            .zip(&results)
            .map(|(input, result)| {
                let candidates = &result.candidates()[..result.len().min(limit)];
                total += candidates.len();
                Report { input, candidates }
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for result in &results {
            for candidate in result.candidates().iter().take(limit) {
                println!("{}, {}", candidate.strategy, candidate.value);
                total += 1;
            }
        }
    }

    info!(inputs = cli.inputs.len(), total, "done");
    eprintln!("Generated {total} variations");
    Ok(())
}
