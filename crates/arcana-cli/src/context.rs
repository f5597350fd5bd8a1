//! Per-locale decks, built once at startup and handed to every command.

use std::collections::HashMap;

use arcana_core::{Deck, DeckResult, Locale};
use arcana_reading::ReadingEngine;

use crate::config::AppConfig;

/// Everything a command needs: one loaded deck per locale plus the
/// configuration that selected them.
pub struct AppContext {
    config: AppConfig,
    decks: HashMap<Locale, Deck>,
}

impl AppContext {
    /// Load the card table of every supported locale. Any load failure
    /// aborts startup.
    pub fn load(config: AppConfig) -> DeckResult<Self> {
        let mut decks = HashMap::new();
        for locale in Locale::ALL {
            let deck = Deck::from_path(config.path_for(locale))?;
            decks.insert(locale, deck);
        }
        Ok(Self::from_decks(config, decks))
    }

    /// Assemble a context from decks already in memory.
    pub fn from_decks(config: AppConfig, decks: HashMap<Locale, Deck>) -> Self {
        Self { config, decks }
    }

    /// The configuration this context was built from.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The selected output locale.
    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    /// The deck for a locale, if one was loaded.
    pub fn deck_for(&self, locale: Locale) -> Option<&Deck> {
        self.decks.get(&locale)
    }

    /// The deck for the selected locale.
    pub fn deck(&self) -> Result<&Deck, String> {
        self.deck_for(self.locale())
            .ok_or_else(|| format!("no card table loaded for locale '{}'", self.locale()))
    }

    /// A reading engine over the selected locale's deck.
    pub fn engine(&self) -> Result<ReadingEngine<'_>, String> {
        self.deck().map(ReadingEngine::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "name,url,image,desc,rdesc,message,qabalah,hebrew_letter,meditation,sequence,cardtype\n\
                         The Fool,the-fool,images/01.jpeg,a,b,,,,,1,major\n";
    const TABLE_ZH: &str = "name,url,image,desc,rdesc,message,qabalah,hebrew_letter,meditation,sequence,cardtype\n\
                            愚者,the-fool,images/01.jpeg,甲,乙,,,,,1,major\n";

    fn context(locale: Locale) -> AppContext {
        let decks = HashMap::from([
            (Locale::En, Deck::from_csv_str(TABLE).unwrap()),
            (Locale::Zh, Deck::from_csv_str(TABLE_ZH).unwrap()),
        ]);
        AppContext::from_decks(AppConfig::default().with_locale(locale), decks)
    }

    #[test]
    fn selects_deck_by_locale() {
        assert_eq!(context(Locale::En).deck().unwrap().cards()[0].name, "The Fool");
        assert_eq!(context(Locale::Zh).deck().unwrap().cards()[0].name, "愚者");
    }

    #[test]
    fn engine_draws_from_selected_deck() {
        let ctx = context(Locale::Zh);
        let engine = ctx.engine().unwrap();
        let mut rng = ctx.config().reading().rng();
        let drawn = engine.one_card_reading(&mut rng).unwrap();
        assert_eq!(drawn.card.name, "愚者");
    }

    #[test]
    fn missing_locale_is_reported() {
        let ctx = AppContext::from_decks(AppConfig::default(), HashMap::new());
        assert!(ctx.deck().is_err());
    }

    #[test]
    fn load_fails_without_tables() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = AppContext::load(AppConfig::default().with_data_dir(dir.path()))
            .err()
            .unwrap();
        assert!(err.is_load_error());
    }
}
