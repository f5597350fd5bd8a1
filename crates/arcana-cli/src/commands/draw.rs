use comfy_table::{ContentArrangement, Table};

use crate::context::AppContext;

pub fn run(ctx: &AppContext, count: i64, allow_duplicates: bool, json: bool) -> Result<(), String> {
    let engine = ctx.engine()?;
    let mut rng = ctx.config().reading().rng();
    let locale = ctx.locale();

    let drawn = engine
        .draw_cards(count, allow_duplicates, &mut rng)
        .map_err(|e| e.to_string())?;

    if json {
        println!("{}", super::to_json(&drawn)?);
        return Ok(());
    }

    if drawn.is_empty() {
        println!("  No cards drawn.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Card", "Orientation", "Meaning"]);

    for (i, d) in drawn.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            d.card.name.clone(),
            super::orientation(d.reversed, locale).to_string(),
            super::truncate(d.meaning(), 60),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} cards, {} reversed",
        drawn.len(),
        drawn.iter().filter(|d| d.reversed).count()
    );

    Ok(())
}
