//! Reply text for each command outcome.

use fluent_bundle::FluentArgs;
use palbot_i18n::{keys, Catalog};
use palbot_palworld::{Player, PlayerList, ServerMetrics};

/// Most players listed in one `/players` reply.
pub const MAX_LISTED_PLAYERS: usize = 10;

const BLOCK_SEPARATOR: &str = "\n\n";

/// Renders replies from a localized catalogue.
#[derive(Debug)]
pub struct ReplyFormatter {
    catalog: Catalog,
}

impl ReplyFormatter {
    /// Formatter over `catalog`.
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// `/metrics` summary. Frame time is shown with two decimals.
    pub fn metrics(&self, metrics: &ServerMetrics) -> String {
        let mut args = FluentArgs::new();
        args.set("current", metrics.current_player_num.to_string());
        args.set("max", metrics.max_player_num.to_string());
        args.set("fps", metrics.server_fps.to_string());
        args.set("uptime", metrics.uptime.to_string());
        args.set("days", metrics.days.to_string());
        args.set("frame_time", format!("{:.2}", metrics.server_frame_time));

        self.catalog.format(keys::METRICS_SUMMARY, Some(&args))
    }

    /// `/players` listing: header and up to [`MAX_LISTED_PLAYERS`] entries in
    /// server order. When more are online the truncation notice follows the
    /// last entry directly, on the same line.
    pub fn players(&self, list: &PlayerList) -> String {
        if list.is_empty() {
            return self.catalog.text(keys::PLAYERS_NONE);
        }

        let mut blocks = Vec::with_capacity(MAX_LISTED_PLAYERS + 1);
        blocks.push(self.catalog.text(keys::PLAYERS_HEADER));
        blocks.extend(
            list.players
                .iter()
                .take(MAX_LISTED_PLAYERS)
                .map(|player| self.player(player)),
        );

        let mut text = blocks.join(BLOCK_SEPARATOR);
        if list.players.len() > MAX_LISTED_PLAYERS {
            let mut args = FluentArgs::new();
            args.set("shown", MAX_LISTED_PLAYERS.to_string());
            text.push_str(&self.catalog.format(keys::PLAYERS_TRUNCATED, Some(&args)));
        }

        text
    }

    fn player(&self, player: &Player) -> String {
        let mut args = FluentArgs::new();
        args.set("name", player.name.as_str());
        args.set("account", player.account_name.as_str());
        args.set("user_id", player.user_id.as_str());
        args.set("x", format!("{:.1}", player.location_x));
        args.set("y", format!("{:.1}", player.location_y));
        args.set("ping", format!("{:.2}", player.ping));
        args.set("level", player.level.to_string());

        self.catalog.format(keys::PLAYERS_ENTRY, Some(&args))
    }

    /// Reply when the metrics request failed.
    pub fn metrics_error(&self) -> String {
        self.catalog.text(keys::METRICS_ERROR)
    }

    /// Reply when the players request failed.
    pub fn players_error(&self) -> String {
        self.catalog.text(keys::PLAYERS_ERROR)
    }

    /// Notice sent once per cooldown window.
    pub fn cooldown_notice(&self) -> String {
        self.catalog.text(keys::COOLDOWN_NOTICE)
    }
}
