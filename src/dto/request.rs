use serde::Deserialize;

/// Fields are optional so the handler can name the missing one.
#[derive(Debug, Default, Deserialize)]
pub struct StartGame {
    #[serde(default)]
    pub player_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MakeMove {
    #[serde(default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatsQuery {
    #[serde(default)]
    pub player_id: Option<String>,
}
