//! The exported script format.

use crate::error::ScriptError;
use serde::{Deserialize, Serialize};

/// A finished script, as written to the saved file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub script_name: String,
    pub actions: Vec<RecordedAction>,
}

/// One numbered step of a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedAction {
    /// Position in the script. Written as a decimal string.
    #[serde(with = "index_string")]
    pub index: usize,
    #[serde(flatten)]
    pub step: Step,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Step {
    #[serde(rename = "Click")]
    Click { xpath: String },
    #[serde(rename = "Click One Of")]
    ClickOneOf { options: Vec<Choice> },
    #[serde(rename = "Fill Field")]
    FillField { xpath: String },
}

/// A named alternative of a "Click One Of" step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub name: String,
    pub xpath: String,
}

impl Script {
    pub fn to_json(&self) -> Result<String, ScriptError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ScriptError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The file name a saved copy of this script gets, e.g. `login.txt`.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}{}", self.script_name, extension)
    }
}

mod index_string {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(index: &usize, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&index.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
