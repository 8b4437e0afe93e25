//! Response bodies of the Palworld REST API.

use serde::{Deserialize, Serialize};

/// Response of `GET /v1/api/metrics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerMetrics {
    /// Current server frames per second.
    #[serde(rename = "serverfps")]
    pub server_fps: u32,
    /// Players currently online.
    #[serde(rename = "currentplayernum")]
    pub current_player_num: u32,
    /// Server frame time in milliseconds.
    #[serde(rename = "serverframetime")]
    pub server_frame_time: f64,
    /// Player capacity.
    #[serde(rename = "maxplayernum")]
    pub max_player_num: u32,
    /// Server uptime in seconds.
    pub uptime: u64,
    /// In-game days elapsed.
    pub days: u32,
}

/// Response of `GET /v1/api/players`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerList {
    /// Online players in server order.
    pub players: Vec<Player>,
}

/// A single online player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    /// Character name.
    pub name: String,
    /// Platform account name.
    #[serde(rename = "accountName")]
    pub account_name: String,
    /// In-game player id.
    #[serde(rename = "playerId")]
    pub player_id: String,
    /// Platform user id, e.g. `steam_7656...`.
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Remote address.
    pub ip: String,
    /// Latency in milliseconds.
    pub ping: f64,
    /// World X coordinate.
    pub location_x: f64,
    /// World Y coordinate.
    pub location_y: f64,
    /// Character level.
    pub level: u32,
}

impl PlayerList {
    /// Whether nobody is online.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
