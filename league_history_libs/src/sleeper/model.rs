use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct UserRecord {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl UserRecord {
    /// Label shown for the owner of a roster: the display name, or the username when the
    /// display name is missing or blank.
    pub fn label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.username.as_deref().unwrap_or_default(),
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct RosterRecord {
    pub roster_id: i64,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub settings: RosterSettings,
}

/// Season record of a roster.
///
/// Point totals are split in two integers by the provider: `fpts` carries the whole part and
/// `fpts_decimal` the digits printed after the decimal point.
#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct RosterSettings {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub wins: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub losses: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub ties: Option<u32>,
    #[serde(default)]
    pub fpts: Option<Number>,
    #[serde(default)]
    pub fpts_decimal: Option<Number>,
}

/// Reads a win/loss/tie count. Values that are not a whole non-negative number are dropped.
fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => match number.as_u64() {
            Some(count) => u32::try_from(count).ok(),
            None => number
                .as_f64()
                .filter(|count| {
                    count.fract() == 0.0 && *count >= 0.0 && *count <= u32::MAX as f64
                })
                .map(|count| count as u32),
        },
        Some(other) => {
            tracing::warn!("ignoring malformed roster count {}", other);
            None
        }
        None => None,
    };

    Ok(count)
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct LeagueRecord {
    pub league_id: String,
    #[serde(default)]
    pub name: String,
    pub season: String,
    #[serde(default)]
    pub total_rosters: u32,
    #[serde(default)]
    pub previous_league_id: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_league_ignores_unknown_fields() {
        let value = json!({
            "league_id": "784",
            "name": "Dynasty",
            "season": "2023",
            "total_rosters": 12,
            "previous_league_id": null,
            "status": "complete",
            "sport": "nfl"
        });
        let league: LeagueRecord = serde_json::from_value(value).unwrap();

        assert_eq!(
            league,
            LeagueRecord {
                league_id: String::from("784"),
                name: String::from("Dynasty"),
                season: String::from("2023"),
                total_rosters: 12,
                previous_league_id: None,
            }
        );
    }

    #[test]
    fn deserialize_roster_without_settings() {
        let roster: RosterRecord =
            serde_json::from_value(json!({"roster_id": 3, "owner_id": null, "players": []}))
                .unwrap();

        assert_eq!(roster.owner_id, None);
        assert_eq!(roster.settings, RosterSettings::default());
    }

    #[test]
    fn malformed_counts_are_dropped() {
        let roster: RosterRecord = serde_json::from_value(json!({
            "roster_id": 1,
            "settings": {"wins": 9.0, "losses": -1, "ties": "two", "fpts": 1200}
        }))
        .unwrap();

        assert_eq!(roster.settings.wins, Some(9));
        assert_eq!(roster.settings.losses, None);
        assert_eq!(roster.settings.ties, None);
        assert_eq!(roster.settings.fpts, Some(Number::from(1200)));

        let roster: RosterRecord = serde_json::from_value(json!({
            "roster_id": 2,
            "settings": {"wins": 10.5, "losses": null}
        }))
        .unwrap();

        assert_eq!(roster.settings.wins, None);
        assert_eq!(roster.settings.losses, None);
    }

    #[test]
    fn label_prefers_display_name() {
        let user = UserRecord {
            user_id: String::from("1"),
            display_name: Some(String::from("Gridiron")),
            username: Some(String::from("gridiron99")),
        };
        assert_eq!(user.label(), "Gridiron");

        let user = UserRecord {
            display_name: Some(String::new()),
            ..user
        };
        assert_eq!(user.label(), "gridiron99");

        let user = UserRecord {
            display_name: None,
            ..user
        };
        assert_eq!(user.label(), "gridiron99");
    }
}
