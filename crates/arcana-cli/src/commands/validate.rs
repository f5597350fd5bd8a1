use std::path::Path;

use colored::Colorize;

use arcana_core::{Locale, validate_deck};

use crate::context::AppContext;

pub fn run(ctx: &AppContext, images: Option<&Path>, json: bool) -> Result<(), String> {
    let mut failed = Vec::new();
    let mut reports = Vec::new();

    for locale in Locale::ALL {
        let Some(deck) = ctx.deck_for(locale) else {
            continue;
        };
        let report = validate_deck(deck, images);
        if !report.is_conformant() {
            failed.push(locale);
        }
        reports.push((locale, report));
    }

    if json {
        let by_locale: serde_json::Map<String, serde_json::Value> = reports
            .iter()
            .map(|(locale, report)| {
                serde_json::to_value(report).map(|v| (locale.code().to_string(), v))
            })
            .collect::<Result<serde_json::Map<_, _>, _>>()
            .map_err(|e| format!("cannot serialize output: {e}"))?;
        println!("{}", super::to_json(&by_locale)?);
    } else {
        for (locale, report) in &reports {
            let path = ctx.config().path_for(*locale);
            println!("  {} {}", locale.code().bold(), path.display().to_string().dimmed());
            println!(
                "    {} cards ({} major, {} other)",
                report.total, report.major, report.other
            );
            let types: Vec<String> = report
                .by_type
                .iter()
                .map(|(t, n)| format!("{t}: {n}"))
                .collect();
            println!("    types: {}", types.join(", "));
            if let Some((lo, hi)) = report.sequence_range {
                println!("    sequence: {lo}..={hi}");
            }
            if !report.extra_columns.is_empty() {
                println!("    extra columns: {}", report.extra_columns.join(", "));
            }
            if report.images_checked {
                println!(
                    "    images: {} of {} found",
                    report.total - report.missing_images.len(),
                    report.total
                );
            }
            for problem in report.problems() {
                println!("    {} {problem}", "✗".red());
            }
            println!();
        }
    }

    if failed.is_empty() {
        if !json {
            println!("  All checks passed.");
        }
        Ok(())
    } else {
        let codes: Vec<_> = failed.iter().map(|l| l.code()).collect();
        Err(format!("validation failed for: {}", codes.join(", ")))
    }
}
