//! Model value object representing the generative model in use

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const RESOURCE_PREFIX: &str = "models/";

/// Generative language model identifier (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini15Flash,
    Gemini15Pro,
    Gemini20Flash,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini15Flash => "gemini-1.5-flash",
            Model::Gemini15Pro => "gemini-1.5-pro",
            Model::Gemini20Flash => "gemini-2.0-flash",
            Model::Custom(s) => s,
        }
    }

    /// Resource name used in API paths, e.g. `models/gemini-1.5-flash`
    pub fn resource_name(&self) -> String {
        format!("{}{}", RESOURCE_PREFIX, self.as_str())
    }
}

impl Default for Model {
    /// Returns the pinned default model (Gemini 1.5 Flash)
    fn default() -> Self {
        Model::Gemini15Flash
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let name = s.strip_prefix(RESOURCE_PREFIX).unwrap_or(s);
        Ok(match name {
            "gemini-1.5-flash" => Model::Gemini15Flash,
            "gemini-1.5-pro" => Model::Gemini15Pro,
            "gemini-2.0-flash" => Model::Gemini20Flash,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.parse() {
            Ok(model) => Ok(model),
            Err(never) => match never {},
        }
    }
}
