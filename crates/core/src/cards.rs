use crate::PoolError;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Corp,
    Runner,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Corp, Side::Runner];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Corp => "Corp",
            Self::Runner => "Runner",
        }
    }

    /// Lowercase form used in output file names and console messages.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Corp => "corp",
            Self::Runner => "runner",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = PoolError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Corp" => Ok(Self::Corp),
            "Runner" => Ok(Self::Runner),
            other => Err(PoolError::UnknownSide(other.to_string())),
        }
    }
}

/// One catalog entry. Only `title`, `side`, `type_code`, `set_code` and
/// `cyclenumber` are required; everything else is carried along untouched.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Card {
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    pub title: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub type_name: String,
    pub type_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subtype: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subtype_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(rename = "baselink", default)]
    pub base_link: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub faction: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub faction_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub faction_letter: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flavor: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub illustrator: String,
    #[serde(rename = "influencelimit", default)]
    pub influence_limit: Option<i64>,
    #[serde(rename = "minimumdecksize", default)]
    pub minimum_deck_size: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub number: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: i64,
    #[serde(rename = "setname", default, deserialize_with = "null_as_default")]
    pub set_name: String,
    pub set_code: String,
    pub side: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub side_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uniqueness: bool,
    #[serde(rename = "cyclenumber")]
    pub cycle_number: i64,
    #[serde(rename = "last-modified", default, deserialize_with = "null_as_default")]
    pub last_modified: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(rename = "imagesrc", default, deserialize_with = "null_as_default")]
    pub image_src: String,
    #[serde(rename = "largeimagesrc", default)]
    pub large_image_src: Option<String>,
}

impl Card {
    /// Minimal card with just the fields filtering and sampling look at.
    pub fn new(
        title: impl Into<String>,
        side: Side,
        type_code: impl Into<String>,
        set_code: impl Into<String>,
        cycle_number: i64,
    ) -> Self {
        Self {
            title: title.into(),
            side: side.as_str().to_string(),
            type_code: type_code.into(),
            set_code: set_code.into(),
            cycle_number,
            ..Self::default()
        }
    }

    /// `None` for anything other than the two playable sides.
    pub fn side(&self) -> Option<Side> {
        self.side.parse().ok()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
