//! The `ScriptRecorder` class behind the script-builder panel.

use crate::error::DropbotError;
use crate::node::WebNode;
use dropbot_script::{
    ActionId, ActionKind, OptionId, Recorder, RecorderConfig, ScriptDraft, SlotId,
};
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{EventTarget, Node};

/// Builds one action script from elements the user right-clicks.
///
/// # Example
///
/// ```javascript
/// const rec = new ScriptRecorder(storedConfigJson);
/// const action = rec.addAction();
/// const slot = rec.setActionType(action, "Click");
/// rec.selectSlot(slot);
/// document.addEventListener("contextmenu", (e) => rec.onContextMenu(e.target));
/// // ...
/// download(rec.fileName(), rec.exportJson());
/// ```
#[wasm_bindgen]
pub struct ScriptRecorder {
    recorder: Recorder,
    draft: ScriptDraft,
    config: RecorderConfig,
}

#[wasm_bindgen]
impl ScriptRecorder {
    /// Create a recorder, reading settings from the stored config JSON if given.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<ScriptRecorder, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) if !json.trim().is_empty() => {
                RecorderConfig::from_json(json).map_err(DropbotError::from)?
            }
            _ => RecorderConfig::default(),
        };
        Ok(Self {
            recorder: Recorder::new(),
            draft: ScriptDraft::new(),
            config,
        })
    }

    #[wasm_bindgen(js_name = isPaused)]
    pub fn is_paused(&self) -> bool {
        self.config.paused
    }

    /// Flip the paused flag. Returns the new value.
    #[wasm_bindgen(js_name = togglePaused)]
    pub fn toggle_paused(&mut self) -> bool {
        self.config.toggle_paused()
    }

    #[wasm_bindgen(js_name = startupDelayMs)]
    pub fn startup_delay_ms(&self) -> f64 {
        self.config.startup_delay_ms as f64
    }

    /// The settings as JSON, for writing back to storage.
    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> Result<String, JsValue> {
        Ok(self.config.to_json().map_err(DropbotError::from)?)
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.draft.name().to_string()
    }

    #[wasm_bindgen(setter)]
    pub fn set_name(&mut self, name: String) {
        self.draft.set_name(name);
    }

    #[wasm_bindgen(js_name = addAction)]
    pub fn add_action(&mut self) -> u32 {
        self.draft.add_action().0
    }

    #[wasm_bindgen(js_name = removeAction)]
    pub fn remove_action(&mut self, action: u32) -> Result<(), JsValue> {
        self.draft
            .remove_action(ActionId(action), &mut self.recorder)
            .map_err(DropbotError::from)?;
        Ok(())
    }

    /// Set the type of an action by its label. An empty or missing label clears it.
    ///
    /// Returns the target slot created for "Click" and "Fill Field" actions.
    #[wasm_bindgen(js_name = setActionType)]
    pub fn set_action_type(
        &mut self,
        action: u32,
        label: Option<String>,
    ) -> Result<Option<u32>, JsValue> {
        let kind = match label.as_deref() {
            None | Some("") => None,
            Some(label) => Some(label.parse::<ActionKind>().map_err(DropbotError::from)?),
        };
        let slot = self
            .draft
            .set_kind(ActionId(action), kind, &mut self.recorder)
            .map_err(DropbotError::from)?;
        Ok(slot.map(|s| s.0))
    }

    /// Add an option to a "Click One Of" action. Returns `[optionId, slotId]`.
    #[wasm_bindgen(js_name = addOption)]
    pub fn add_option(&mut self, action: u32) -> Result<Vec<u32>, JsValue> {
        let (option, slot) = self
            .draft
            .add_option(ActionId(action), &mut self.recorder)
            .map_err(DropbotError::from)?;
        Ok(vec![option.0, slot.0])
    }

    #[wasm_bindgen(js_name = renameOption)]
    pub fn rename_option(&mut self, action: u32, option: u32, name: String) -> Result<(), JsValue> {
        self.draft
            .rename_option(ActionId(action), OptionId(option), name)
            .map_err(DropbotError::from)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = removeOption)]
    pub fn remove_option(&mut self, action: u32, option: u32) -> Result<(), JsValue> {
        self.draft
            .remove_option(ActionId(action), OptionId(option), &mut self.recorder)
            .map_err(DropbotError::from)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = selectSlot)]
    pub fn select_slot(&mut self, slot: u32) -> Result<(), JsValue> {
        self.recorder
            .select(SlotId(slot))
            .map_err(DropbotError::from)?;
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.recorder.deselect();
    }

    #[wasm_bindgen(js_name = activeSlot)]
    pub fn active_slot(&self) -> Option<u32> {
        self.recorder.active_slot().map(|s| s.0)
    }

    #[wasm_bindgen(js_name = slotXPath)]
    pub fn slot_xpath(&self, slot: u32) -> Option<String> {
        self.recorder.xpath(SlotId(slot)).map(str::to_string)
    }

    /// Handle a right-click: record the locator of `target` into the active slot.
    ///
    /// Returns the recorded locator, or `undefined` when nothing was recorded.
    #[wasm_bindgen(js_name = onContextMenu)]
    pub fn on_context_menu(&mut self, target: Option<EventTarget>) -> Option<String> {
        let node = WebNode::new(target?.dyn_into::<Node>().ok()?);
        let slot = self.recorder.record_element(&node)?;
        debug!("Context menu target recorded into {:?}", slot);
        self.recorder.xpath(slot).map(str::to_string)
    }

    /// The finished script as JSON.
    #[wasm_bindgen(js_name = exportJson)]
    pub fn export_json(&self) -> Result<String, JsValue> {
        let script = self
            .draft
            .export(&self.recorder)
            .map_err(DropbotError::from)?;
        Ok(script.to_json().map_err(DropbotError::from)?)
    }

    /// The file name the exported script should be saved under.
    #[wasm_bindgen(js_name = fileName)]
    pub fn file_name(&self) -> Result<String, JsValue> {
        let script = self
            .draft
            .export(&self.recorder)
            .map_err(DropbotError::from)?;
        Ok(script.file_name(&self.config.file_extension))
    }
}
