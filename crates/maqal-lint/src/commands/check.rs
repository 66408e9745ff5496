//! Check command — analyze an article and gate on its human-style score.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use maqal_lint_core::quality_report;

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Article file to analyze.
    pub file: Utf8PathBuf,

    /// Minimum acceptable human-style score (0–100).
    #[arg(long)]
    pub min_score: Option<f64>,
}

/// Analyze an article file and print the quality report.
#[instrument(name = "cmd_check", skip_all, fields(file = %args.file))]
pub fn cmd_check(
    args: CheckArgs,
    global_json: bool,
    config_min_score: Option<f64>,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min_score = ?args.min_score, "executing check command");

    let content = super::read_input_file(&args.file, max_input)?;
    let min_score = args.min_score.or(config_min_score);

    let report = quality_report(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&args.file, &report);
    }

    if let Some(min) = min_score
        && report.human_style_score < min
    {
        bail!(
            "{} human-style score {:.1} is below minimum {:.1} — revise before publishing.",
            args.file,
            report.human_style_score,
            min,
        );
    }

    Ok(())
}

fn print_report(file: &Utf8PathBuf, report: &maqal_lint_core::QualityReport) {
    println!("{}", file.bold());

    println!(
        "\n  {} {} words, {} sentences, {} paragraphs",
        "Size:".cyan(),
        report.word_count,
        report.sentence_count,
        report.paragraph_count,
    );

    println!(
        "\n  {} avg sentence {:.1} words, paragraph avg {:.1} ± {:.1}",
        "Structure:".cyan(),
        report.avg_sentence_length,
        report.paragraph_metrics.avg_len,
        report.paragraph_metrics.std_len,
    );

    println!(
        "\n  {} TTR {:.3}, sensory {:.2}%, passive {:.2}%, opening HHI {:.3}",
        "Lexical:".cyan(),
        report.ttr,
        report.sensory_ratio,
        report.passive_ratio,
        report.sentence_variety.start_hhi,
    );

    if !report.boilerplate_flags.is_empty() {
        println!(
            "\n  {} {} boilerplate matches",
            "Boilerplate:".yellow(),
            report.boilerplate_flags.len(),
        );
        for flag in &report.boilerplate_flags {
            println!("    …{}…", flag.excerpt);
        }
    }

    if !report.repeated_phrases.is_empty() {
        let top: Vec<_> = report
            .repeated_phrases
            .iter()
            .take(5)
            .map(|p| format!("\"{}\" ×{}", p.phrase, p.count))
            .collect();
        println!("\n  {} {}", "Repeats:".yellow(), top.join(", "));
    }

    println!(
        "\n  {} E-E-A-T {:.0}%, info gain {:.0}%, fluff {:.2}",
        "Signals:".cyan(),
        report.eeat_score,
        report.info_gain_score,
        report.fluff_density,
    );

    let score_str = if report.human_style_score >= 80.0 {
        format!("{:.1}", report.human_style_score).green().to_string()
    } else if report.human_style_score >= 60.0 {
        format!("{:.1}", report.human_style_score).yellow().to_string()
    } else {
        format!("{:.1}", report.human_style_score).red().to_string()
    };
    println!("\n  {} {}/100", "Human-style score:".cyan(), score_str);

    if !report.tips.is_empty() {
        println!("\n  {}", "Tips:".cyan());
        for tip in &report.tips {
            println!("    • {tip}");
        }
    }
}
