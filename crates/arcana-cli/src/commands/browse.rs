use comfy_table::{ContentArrangement, Table};

use arcana_core::Card;

use crate::context::AppContext;

/// Which part of the deck to list.
pub enum Filter<'a> {
    /// Every card.
    All,
    /// The Major Arcana.
    Major,
    /// Everything that is not Major Arcana.
    Minor,
    /// Cards with exactly this `cardtype`.
    Type(&'a str),
}

pub fn run(ctx: &AppContext, filter: Filter<'_>) -> Result<(), String> {
    let deck = ctx.deck()?;

    let cards: Vec<&Card> = match filter {
        Filter::All => deck.cards().iter().collect(),
        Filter::Major => deck.major_arcana(),
        Filter::Minor => deck.minor_arcana(),
        Filter::Type(cardtype) => deck.get_by_type(cardtype),
    };

    if cards.is_empty() {
        println!("  No cards found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Name", "Type", "Slug", "Upright"]);

    for card in &cards {
        table.add_row(vec![
            card.sequence.to_string(),
            card.name.clone(),
            card.cardtype.to_string(),
            card.url.clone(),
            super::truncate(&card.desc, 48),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", cards.len());

    Ok(())
}
