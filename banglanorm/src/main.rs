//! Command-line front end for the Bangla normalizer.
//!
//! Usage:
//! - `banglanorm "বাংলা   টেক্সট"` - normalize one string with the defaults
//! - `banglanorm --form nfd --digits-to-ascii "বাংলা১২৩"` - pick the options
//! - `banglanorm --info "কিছু্"` - show the characters before and after
//! - `banglanorm --variants rules.csv "..."` - add character-variant rules
//! - `banglanorm` - run the built-in samples

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use banglanorm::{unicode_info, BanglaNormalizer, NormalizeOptions, UnicodeCharInfo, UnicodeForm};
use banglarules::parse_variant_rules;
use clap::Parser;
use colored::*;
use tabled::{settings::Style, Table, Tabled};
use tracing::Level;

#[derive(Parser)]
#[command(name = "banglanorm")]
#[command(about = "Normalize Bangla text to a canonical Unicode representation")]
struct Args {
    /// Text to normalize. Without it, the built-in samples are run.
    text: Option<String>,

    /// Unicode normalization form (NFC, NFD, NFKC or NFKD)
    #[arg(short = 'f', long = "form", default_value = "NFC")]
    form: UnicodeForm,

    /// Delete all ASCII and Bangla digits
    #[arg(long)]
    remove_digits: bool,

    /// Convert Bangla digits to ASCII digits
    #[arg(long)]
    digits_to_ascii: bool,

    /// Apply OCR corrections
    #[arg(long)]
    ocr: bool,

    /// Keep viramas at the end of words
    #[arg(long)]
    keep_hasanta: bool,

    /// Print per-character Unicode information for input and output
    #[arg(long)]
    info: bool,

    /// CSV file of extra character-variant rules (header `variant,canonical`)
    #[arg(long, value_name = "CSV")]
    variants: Option<PathBuf>,

    /// Log pipeline stages to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Tabled)]
struct CharRow {
    #[tabled(rename = "Char")]
    ch: String,
    #[tabled(rename = "Code point")]
    codepoint: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "CCC")]
    combining_class: u8,
}

impl From<UnicodeCharInfo> for CharRow {
    fn from(info: UnicodeCharInfo) -> Self {
        Self {
            ch: format!("{:?}", info.ch),
            codepoint: info.codepoint,
            name: info.name,
            category: info.category.to_string(),
            combining_class: info.combining_class,
        }
    }
}

const SAMPLES: &[&str] = &[
    "বাংলা   টেক্সট",
    "আমার\u{200D}নাম",
    "বাংলা১২৩text",
    "হেলো।।।",
    "কিছু\u{00A0}টেক্সট",
    "\u{09C7}\u{09BE}কার",
    "কিছু\u{09CD}",
    "আমি\u{200C}আছি",
];

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::TRACE } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let normalizer = match &args.variants {
        Some(path) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read variant rules: {}", path.display()))?;
            let rules = parse_variant_rules(&data)
                .with_context(|| format!("Failed to parse variant rules: {}", path.display()))?;
            BanglaNormalizer::with_variant_rules(rules)?
        }
        None => BanglaNormalizer::new()?,
    };

    let options = NormalizeOptions::new()
        .with_unicode_form(args.form)
        .with_remove_digits(args.remove_digits)
        .with_digits_to_ascii(args.digits_to_ascii)
        .with_ocr_fixes(args.ocr)
        .with_hasanta(!args.keep_hasanta);

    match &args.text {
        Some(text) => {
            let normalized = normalizer.normalize(text, &options);
            if args.info {
                print_info("Input", text);
                print_info("Normalized", &normalized);
            } else {
                println!("{}", normalized);
            }
        }
        None => run_samples(&normalizer, &options, args.info),
    }

    Ok(())
}

fn run_samples(normalizer: &BanglaNormalizer, options: &NormalizeOptions, info: bool) {
    println!("{}", "Bangla Text Normalization".bold().underline());
    println!("{}", "=".repeat(50));

    for sample in SAMPLES {
        let normalized = normalizer.normalize(sample, options);
        println!("\nOriginal:   {:?}", sample);
        println!("Normalized: {:?}", normalized);
        if info {
            print_info("Normalized", &normalized);
        }
    }

    println!("\n{}", "Normalization levels".bold().underline());
    println!("{}", "=".repeat(50));
    let text = "বাংলা\u{200D}১২৩  টেক্সট।।";
    println!("Original: {:?}", text);
    let levels = [
        ("Basic", NormalizeOptions::new()),
        ("With digit conversion", NormalizeOptions::new().with_digits_to_ascii(true)),
        ("With digit removal", NormalizeOptions::new().with_remove_digits(true)),
        (
            "NFD form",
            NormalizeOptions::new().with_unicode_form(UnicodeForm::Nfd),
        ),
    ];
    for (label, level) in levels {
        println!("{:<22} {:?}", format!("{}:", label), normalizer.normalize(text, &level));
    }
}

fn print_info(label: &str, text: &str) {
    println!("{} {:?}", format!("{}:", label).bold(), text);
    let rows: Vec<CharRow> = unicode_info(text).into_iter().map(CharRow::from).collect();
    if rows.is_empty() {
        println!("(empty)");
        return;
    }
    let table = Table::new(&rows).with(Style::modern()).to_string();
    println!("{}", table);
}
