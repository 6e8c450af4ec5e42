//! Reference check for the Bangla normalizer
//!
//! Runs a fixed set of reference cases through [`BanglaNormalizer`] and shows
//! the results in a colored table (blue=correct, red=incorrect), followed by
//! accuracy statistics. Invisible characters are shown escaped.
//!
//! Usage:
//! - `cargo run --bin normalize_check`
//! - `cargo run --bin normalize_check -- --failures-only`

use anyhow::{bail, Result};
use banglanorm::{BanglaNormalizer, NormalizeOptions, UnicodeForm};
use clap::Parser;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Parser)]
#[command(name = "normalize_check")]
#[command(about = "Check the Bangla normalizer against reference cases")]
struct Args {
    /// Only list the cases that fail
    #[arg(long)]
    failures_only: bool,
}

#[derive(Tabled)]
struct CheckResult {
    #[tabled(rename = "Case")]
    label: String,
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Normalized")]
    normalized: String,
    #[tabled(rename = "Expected")]
    expected: String,
}

struct ReferenceCase {
    label: &'static str,
    input: &'static str,
    options: NormalizeOptions,
    expected: &'static str,
}

fn case(
    label: &'static str,
    input: &'static str,
    options: NormalizeOptions,
    expected: &'static str,
) -> ReferenceCase {
    ReferenceCase {
        label,
        input,
        options,
        expected,
    }
}

fn reference_cases() -> Vec<ReferenceCase> {
    let default = NormalizeOptions::new();
    vec![
        case("whitespace", "বাংলা   টেক্সট", default, "বাংলা টেক্সট"),
        case("zero width joiner", "আমার\u{200D}নাম", default, "আমারনাম"),
        case("zero width non-joiner", "আমি\u{200C}আছি", default, "আমিআছি"),
        case("no-break space", "কিছু\u{00A0}টেক্সট", default, "কিছু টেক্সট"),
        case("byte order mark", "\u{FEFF}  বাংলা  ", default, "বাংলা"),
        case(
            "digits to ascii",
            "বাংলা১২৩text",
            default.with_digits_to_ascii(true),
            "বাংলা123text",
        ),
        case(
            "digit removal",
            "বাংলা১২৩text",
            default.with_remove_digits(true),
            "বাংলাtext",
        ),
        case(
            "digit removal gap",
            "বাংলা\u{200D}১২৩  টেক্সট।।",
            default.with_remove_digits(true),
            "বাংলা টেক্সট।",
        ),
        case("danda run", "হেলো।।।", default, "হেলো।"),
        case("double danda", "হেলো\u{0965}", default, "হেলো।"),
        case("question marks", "কী??? না!!", default, "কী? না!"),
        case("split o-kar", "ক\u{09C7}\u{09BE}", default, "ক\u{09CB}"),
        case("split au-kar", "ক\u{09C7}\u{09D7}", default, "ক\u{09CC}"),
        case("repeated aa-kar", "কাাা", default, "কা"),
        case(
            "nfd keeps o-kar",
            "কো",
            default.with_unicode_form(UnicodeForm::Nfd),
            "কো",
        ),
        case("trailing hasanta", "কিছু\u{09CD}", default, "কিছু"),
        case(
            "kept hasanta",
            "কিছু\u{09CD}",
            default.with_hasanta(false),
            "কিছু\u{09CD}",
        ),
        case("conjunct", "টেক্সট", default, "টেক্সট"),
        case("ocr off", "ব\u{09BC}ই", default, "ব\u{09BC}ই"),
        case("ocr on", "ব\u{09BC}ই", default.with_ocr_fixes(true), "বই"),
    ]
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Running Bangla Normalization Check");
    println!("==================================\n");

    let normalizer = BanglaNormalizer::new()?;
    let cases = reference_cases();

    let mut results = Vec::new();
    let mut correct_count = 0;
    let total_count = cases.len();

    for case in &cases {
        let normalized = normalizer.normalize(case.input, &case.options);
        let is_correct = normalized == case.expected;
        if is_correct {
            correct_count += 1;
            if args.failures_only {
                continue;
            }
        }

        let shown = escape_invisible(&normalized);
        let colored_normalized = if is_correct {
            shown.blue().to_string()
        } else {
            shown.red().to_string()
        };

        results.push(CheckResult {
            label: case.label.to_string(),
            input: escape_invisible(case.input),
            normalized: colored_normalized,
            expected: escape_invisible(case.expected),
        });
    }

    if !results.is_empty() {
        let table = Table::new(&results).with(Style::modern()).to_string();
        println!("{}", table);
    }

    let accuracy = (correct_count as f64 / total_count as f64) * 100.0;

    println!("\n{}", "SUMMARY STATISTICS".bold().underline());
    println!("{}", "=".repeat(50));
    println!("  Total cases: {}", total_count);
    println!("  Total correct: {}", correct_count);

    let accuracy_str = format!("{:.2}%", accuracy);
    let colored_accuracy = if accuracy >= 100.0 {
        accuracy_str.green()
    } else if accuracy >= 90.0 {
        accuracy_str.yellow()
    } else {
        accuracy_str.red()
    };
    println!("\n{}: {}", "OVERALL ACCURACY".bold(), colored_accuracy.bold());

    if correct_count != total_count {
        bail!("{} of {} cases failed", total_count - correct_count, total_count);
    }
    Ok(())
}

/// Spell out characters that would be invisible in a terminal.
fn escape_invisible(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{200B}'..='\u{200F}' | '\u{00A0}' | '\u{FEFF}' | '\u{2060}' | '\u{061C}' => {
                format!("\\u{{{:04X}}}", c as u32)
            }
            c if c.is_control() => c.escape_default().to_string(),
            c => c.to_string(),
        })
        .collect()
}
