use colored::Colorize;

use arcana_core::{Card, Locale};

use crate::context::AppContext;

pub fn run(ctx: &AppContext, url: &str, json: bool) -> Result<(), String> {
    let deck = ctx.deck()?;
    let nav = deck.navigate(url).map_err(|e| e.to_string())?;

    if json {
        println!("{}", super::to_json(&nav)?);
        return Ok(());
    }

    let locale = ctx.locale();
    print_card(nav.card, locale);

    // Navigation
    println!();
    println!("  {}", format!("{}/{}", nav.index + 1, deck.len()).dimmed());
    if let Some(prev) = nav.prev {
        println!("  ← prev: {} ({})", prev.name, prev.url);
    }
    if let Some(next) = nav.next {
        println!("  → next: {} ({})", next.name, next.url);
    }

    Ok(())
}

/// Print every non-empty field of a card.
pub fn print_card(card: &Card, locale: Locale) {
    println!("  {} [{}]", card.name.bold(), card.cardtype.to_string().dimmed());
    println!("  {}", card.image.dimmed());
    println!();

    let fields = [
        (super::orientation(false, locale), &card.desc),
        (super::orientation(true, locale), &card.rdesc),
        ("message", &card.message),
        ("qabalah", &card.qabalah),
        ("hebrew letter", &card.hebrew_letter),
        ("meditation", &card.meditation),
    ];
    for (label, value) in fields {
        if !value.is_empty() {
            println!("  {:<14} {value}", format!("{label}:"));
        }
    }
}
