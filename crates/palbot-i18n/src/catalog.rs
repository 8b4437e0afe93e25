//! Fluent bundle loading and message formatting.

use crate::locale::Locale;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use palbot_common::{PalbotError, Result};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Message identifiers shared by all catalogues.
pub mod keys {
    /// One-time notice while a command is on cooldown.
    pub const COOLDOWN_NOTICE: &str = "cooldown-notice";
    /// `/metrics` failed to reach the server.
    pub const METRICS_ERROR: &str = "metrics-error";
    /// `/metrics` summary template.
    pub const METRICS_SUMMARY: &str = "metrics-summary";
    /// `/players` failed to reach the server.
    pub const PLAYERS_ERROR: &str = "players-error";
    /// `/players` with nobody online.
    pub const PLAYERS_NONE: &str = "players-none";
    /// Heading of the player list.
    pub const PLAYERS_HEADER: &str = "players-header";
    /// Template for a single player.
    pub const PLAYERS_ENTRY: &str = "players-entry";
    /// Appended when the player list was cut short.
    pub const PLAYERS_TRUNCATED: &str = "players-truncated";

    /// Every key a catalogue must define.
    pub const ALL: [&str; 8] = [
        COOLDOWN_NOTICE,
        METRICS_ERROR,
        METRICS_SUMMARY,
        PLAYERS_ERROR,
        PLAYERS_NONE,
        PLAYERS_HEADER,
        PLAYERS_ENTRY,
        PLAYERS_TRUNCATED,
    ];
}

/// Thread-safe set of Fluent bundles for the selected and default locales.
pub struct Catalog {
    locale: Locale,
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("locale", &self.locale)
            .field("loaded", &self.bundles.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Catalog {
    /// Builds a catalogue for `locale`, with the default locale as fallback.
    pub fn new(locale: Locale) -> Result<Self> {
        let mut bundles = HashMap::new();
        bundles.insert(locale, build_bundle(locale)?);
        if locale != Locale::default() {
            bundles.insert(Locale::default(), build_bundle(Locale::default())?);
        }

        debug!(locale = locale.code(), "Reply catalogue loaded");
        Ok(Self { locale, bundles })
    }

    /// The locale replies are rendered in.
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Formats a message without arguments.
    pub fn text(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Formats a message, falling back to the default locale and finally to
    /// the key itself when no catalogue defines it.
    pub fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        for locale in [self.locale, Locale::default()] {
            if let Some(text) = self.format_in(locale, key, args) {
                return text;
            }
        }

        warn!(key, "Message missing from every catalogue");
        key.to_string()
    }

    /// Whether the selected locale defines `key` itself.
    pub fn has_message(&self, key: &str) -> bool {
        self.bundles
            .get(&self.locale)
            .is_some_and(|bundle| bundle.has_message(key))
    }

    fn format_in(&self, locale: Locale, key: &str, args: Option<&FluentArgs<'_>>) -> Option<String> {
        let bundle = self.bundles.get(&locale)?;
        let message = bundle.get_message(key)?;
        let pattern = message.value()?;

        let mut errors = Vec::new();
        let formatted = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            warn!(key, locale = locale.code(), ?errors, "Formatting errors");
        }

        Some(formatted.into_owned())
    }
}

fn build_bundle(locale: Locale) -> Result<FluentBundle<FluentResource>> {
    let resource = FluentResource::try_new(locale.source().to_string()).map_err(|(_, errors)| {
        PalbotError::localization(
            format!("failed to parse catalogue: {errors:?}"),
            Some(locale.code().to_string()),
        )
    })?;

    let mut bundle = FluentBundle::new_concurrent(vec![locale.to_language_identifier()?]);
    bundle.set_use_isolating(false);
    bundle.add_resource(resource).map_err(|errors| {
        PalbotError::localization(
            format!("failed to add catalogue: {errors:?}"),
            Some(locale.code().to_string()),
        )
    })?;

    Ok(bundle)
}
