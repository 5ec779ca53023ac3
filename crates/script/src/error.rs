use crate::draft::{ActionId, OptionId};
use crate::recorder::SlotId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("The script needs a name")]
    MissingName,

    #[error("Action {index} has no type selected")]
    UnconfiguredAction { index: usize },

    #[error("Action {index} has no recorded element")]
    MissingLocator { index: usize },

    #[error("Option '{name}' of action {index} has no recorded element")]
    MissingOptionLocator { index: usize, name: String },

    #[error("Unknown path slot {0:?}")]
    UnknownSlot(SlotId),

    #[error("Unknown action {0:?}")]
    UnknownAction(ActionId),

    #[error("Unknown option {0:?}")]
    UnknownOption(OptionId),

    #[error("Action {0:?} is not a 'Click One Of' action")]
    NotAChoice(ActionId),

    #[error("Unknown action type '{0}'")]
    UnknownKind(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
