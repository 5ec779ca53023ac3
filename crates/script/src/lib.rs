//! Recording and exporting action scripts.
//!
//! A [`Recorder`] owns the path slots that receive locators of right-clicked elements;
//! a [`ScriptDraft`] arranges those slots into actions. Exporting the draft yields a
//! [`Script`], which serializes to the JSON script format replay tools consume.

pub mod config;
pub mod draft;
pub mod error;
pub mod recorder;
pub mod script;

pub use config::RecorderConfig;
pub use draft::{ActionId, ActionKind, DraftAction, DraftOption, OptionId, ScriptDraft};
pub use error::ScriptError;
pub use recorder::{Recorder, SlotId};
pub use script::{Choice, RecordedAction, Script, Step};
