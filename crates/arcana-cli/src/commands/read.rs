use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use arcana_reading::{Reading, Spread, localize_position};

use crate::context::AppContext;

/// The readings offered on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReadingKind {
    /// A single card with a coin-flip orientation.
    One,
    /// Past, present, future.
    Three,
    /// The general six-card spread.
    Six,
}

pub fn run(ctx: &AppContext, kind: ReadingKind, json: bool) -> Result<(), String> {
    let engine = ctx.engine()?;
    let mut rng = ctx.config().reading().rng();
    let locale = ctx.locale();

    let spread = match kind {
        ReadingKind::One => {
            let drawn = engine.one_card_reading(&mut rng).map_err(|e| e.to_string())?;
            if json {
                println!("{}", super::to_json(&drawn)?);
                return Ok(());
            }
            println!(
                "  {} {}",
                drawn.card.name.bold(),
                format!("({})", super::orientation(drawn.reversed, locale)).dimmed()
            );
            println!();
            println!("  {}", drawn.meaning());
            if !drawn.card.message.is_empty() {
                println!("  {}", drawn.card.message.italic());
            }
            return Ok(());
        }
        ReadingKind::Three => Spread::Three,
        ReadingKind::Six => Spread::Six,
    };

    let reading = engine.read(spread, &mut rng).map_err(|e| e.to_string())?;
    if json {
        println!("{}", super::to_json(&reading)?);
        return Ok(());
    }
    print_reading(&reading, ctx);

    Ok(())
}

fn print_reading(reading: &Reading<'_>, ctx: &AppContext) {
    let locale = ctx.locale();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Position", "Card", "Orientation", "Meaning"]);

    for placement in reading.iter() {
        table.add_row(vec![
            localize_position(placement.position, locale).to_string(),
            placement.card.name.clone(),
            super::orientation(placement.reversed, locale).to_string(),
            placement.card.meaning(placement.reversed).to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} cards, {} reversed",
        reading.len(),
        reading.reversed_count()
    );
}
