use crate::context::AppContext;

/// Look a card up by name (case-insensitive) and show it like `show` does.
pub fn run(ctx: &AppContext, name: &str, json: bool) -> Result<(), String> {
    let deck = ctx.deck()?;
    let card = deck.get_by_name(name).map_err(|e| e.to_string())?;
    super::show::run(ctx, &card.url, json)
}
