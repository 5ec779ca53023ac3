//! The editable form of a script: actions whose locators live in recorder slots.

use crate::error::ScriptError;
use crate::recorder::{Recorder, SlotId};
use crate::script::{Choice, RecordedAction, Script, Step};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionId(pub u32);

/// The action types a user can pick for a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Click,
    ClickOneOf,
    FillField,
}

impl ActionKind {
    /// The label used in the script format and the type picker.
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Click => "Click",
            ActionKind::ClickOneOf => "Click One Of",
            ActionKind::FillField => "Fill Field",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActionKind {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Click" => Ok(ActionKind::Click),
            "Click One Of" => Ok(ActionKind::ClickOneOf),
            "Fill Field" => Ok(ActionKind::FillField),
            other => Err(ScriptError::UnknownKind(other.to_string())),
        }
    }
}

/// A named alternative of a "Click One Of" action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftOption {
    pub id: OptionId,
    pub name: String,
    pub slot: SlotId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftAction {
    pub id: ActionId,
    pub kind: Option<ActionKind>,
    /// The target slot of a "Click" or "Fill Field" action.
    pub slot: Option<SlotId>,
    pub options: Vec<DraftOption>,
}

impl DraftAction {
    /// Every slot this action owns.
    fn slots(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.slot
            .into_iter()
            .chain(self.options.iter().map(|o| o.slot))
    }
}

#[derive(Debug, Default)]
pub struct ScriptDraft {
    name: String,
    actions: Vec<DraftAction>,
    next_id: u32,
}

impl ScriptDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn actions(&self) -> &[DraftAction] {
        &self.actions
    }

    pub fn action(&self, id: ActionId) -> Option<&DraftAction> {
        self.actions.iter().find(|a| a.id == id)
    }

    fn action_mut(&mut self, id: ActionId) -> Result<&mut DraftAction, ScriptError> {
        self.actions
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(ScriptError::UnknownAction(id))
    }

    fn fresh_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Appends an action with no type selected yet.
    pub fn add_action(&mut self) -> ActionId {
        let id = ActionId(self.fresh_id());
        self.actions.push(DraftAction {
            id,
            kind: None,
            slot: None,
            options: Vec::new(),
        });
        id
    }

    /// Removes an action together with the slots it owns.
    pub fn remove_action(&mut self, id: ActionId, recorder: &mut Recorder) -> Result<(), ScriptError> {
        let position = self
            .actions
            .iter()
            .position(|a| a.id == id)
            .ok_or(ScriptError::UnknownAction(id))?;
        let action = self.actions.remove(position);
        release_slots(&action, recorder);
        Ok(())
    }

    /// Changes the type of an action, discarding its options and recorded target.
    ///
    /// "Click" and "Fill Field" get a fresh target slot, which is returned; "Click One
    /// Of" starts with no options.
    pub fn set_kind(
        &mut self,
        id: ActionId,
        kind: Option<ActionKind>,
        recorder: &mut Recorder,
    ) -> Result<Option<SlotId>, ScriptError> {
        let action = self.action_mut(id)?;
        release_slots(action, recorder);
        action.options.clear();
        action.slot = None;
        action.kind = kind;

        if matches!(kind, Some(ActionKind::Click | ActionKind::FillField)) {
            action.slot = Some(recorder.create_slot());
        }
        Ok(action.slot)
    }

    /// Adds an unnamed option with its own slot to a "Click One Of" action.
    pub fn add_option(
        &mut self,
        id: ActionId,
        recorder: &mut Recorder,
    ) -> Result<(OptionId, SlotId), ScriptError> {
        let option_id = OptionId(self.fresh_id());
        let action = self.action_mut(id)?;
        if action.kind != Some(ActionKind::ClickOneOf) {
            return Err(ScriptError::NotAChoice(id));
        }
        let slot = recorder.create_slot();
        action.options.push(DraftOption {
            id: option_id,
            name: String::new(),
            slot,
        });
        Ok((option_id, slot))
    }

    pub fn rename_option(
        &mut self,
        id: ActionId,
        option: OptionId,
        name: impl Into<String>,
    ) -> Result<(), ScriptError> {
        let action = self.action_mut(id)?;
        let entry = action
            .options
            .iter_mut()
            .find(|o| o.id == option)
            .ok_or(ScriptError::UnknownOption(option))?;
        entry.name = name.into();
        Ok(())
    }

    pub fn remove_option(
        &mut self,
        id: ActionId,
        option: OptionId,
        recorder: &mut Recorder,
    ) -> Result<(), ScriptError> {
        let action = self.action_mut(id)?;
        let position = action
            .options
            .iter()
            .position(|o| o.id == option)
            .ok_or(ScriptError::UnknownOption(option))?;
        let removed = action.options.remove(position);
        // A slot already gone from the recorder is not an error here.
        let _ = recorder.delete_slot(removed.slot);
        Ok(())
    }

    /// Builds the finished script from this draft and the locators in `recorder`.
    pub fn export(&self, recorder: &Recorder) -> Result<Script, ScriptError> {
        if self.name.is_empty() {
            return Err(ScriptError::MissingName);
        }

        let mut actions = Vec::with_capacity(self.actions.len());
        for (index, action) in self.actions.iter().enumerate() {
            let target = || {
                action
                    .slot
                    .and_then(|slot| recorder.xpath(slot))
                    .map(str::to_string)
                    .ok_or(ScriptError::MissingLocator { index })
            };

            let step = match action.kind {
                None => return Err(ScriptError::UnconfiguredAction { index }),
                Some(ActionKind::Click) => Step::Click { xpath: target()? },
                Some(ActionKind::FillField) => Step::FillField { xpath: target()? },
                Some(ActionKind::ClickOneOf) => Step::ClickOneOf {
                    options: action
                        .options
                        .iter()
                        .map(|option| {
                            let xpath = recorder.xpath(option.slot).ok_or_else(|| {
                                ScriptError::MissingOptionLocator {
                                    index,
                                    name: option.name.clone(),
                                }
                            })?;
                            Ok(Choice {
                                name: option.name.clone(),
                                xpath: xpath.to_string(),
                            })
                        })
                        .collect::<Result<_, ScriptError>>()?,
                },
            };
            actions.push(RecordedAction { index, step });
        }

        Ok(Script {
            script_name: self.name.clone(),
            actions,
        })
    }
}

fn release_slots(action: &DraftAction, recorder: &mut Recorder) {
    for slot in action.slots() {
        // A slot already gone from the recorder is not an error here.
        let _ = recorder.delete_slot(slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dropbot_dom::tests::create_test_tree;

    #[test]
    fn kind_labels_round_trip() {
        for kind in [ActionKind::Click, ActionKind::ClickOneOf, ActionKind::FillField] {
            assert_eq!(kind.label().parse::<ActionKind>().unwrap(), kind);
        }
        assert!(matches!(
            "Select Action Type".parse::<ActionKind>(),
            Err(ScriptError::UnknownKind(_))
        ));
    }

    #[test]
    fn changing_kind_resets_slots_and_options() {
        let mut recorder = Recorder::new();
        let mut draft = ScriptDraft::new();
        let action = draft.add_action();

        let slot = draft
            .set_kind(action, Some(ActionKind::Click), &mut recorder)
            .unwrap()
            .unwrap();
        assert!(recorder.contains(slot));

        assert_eq!(
            draft
                .set_kind(action, Some(ActionKind::ClickOneOf), &mut recorder)
                .unwrap(),
            None
        );
        assert!(!recorder.contains(slot));
        let (_, option_slot) = draft.add_option(action, &mut recorder).unwrap();

        draft
            .set_kind(action, Some(ActionKind::FillField), &mut recorder)
            .unwrap();
        assert!(!recorder.contains(option_slot));
        assert!(draft.action(action).unwrap().options.is_empty());
        assert_eq!(recorder.len(), 1);
    }

    #[test]
    fn options_require_click_one_of() {
        let mut recorder = Recorder::new();
        let mut draft = ScriptDraft::new();
        let action = draft.add_action();
        assert!(matches!(
            draft.add_option(action, &mut recorder),
            Err(ScriptError::NotAChoice(_))
        ));
    }

    #[test]
    fn removing_an_action_releases_its_slots() {
        let mut recorder = Recorder::new();
        let mut draft = ScriptDraft::new();
        let action = draft.add_action();
        draft
            .set_kind(action, Some(ActionKind::ClickOneOf), &mut recorder)
            .unwrap();
        draft.add_option(action, &mut recorder).unwrap();
        draft.add_option(action, &mut recorder).unwrap();
        assert_eq!(recorder.len(), 2);

        draft.remove_action(action, &mut recorder).unwrap();
        assert!(recorder.is_empty());
        assert!(draft.actions().is_empty());
    }

    #[test]
    fn export_requires_a_name_and_configured_actions() {
        let mut recorder = Recorder::new();
        let mut draft = ScriptDraft::new();
        draft.add_action();
        assert!(matches!(draft.export(&recorder), Err(ScriptError::MissingName)));

        draft.set_name("demo");
        assert!(matches!(
            draft.export(&recorder),
            Err(ScriptError::UnconfiguredAction { index: 0 })
        ));

        let action = draft.actions()[0].id;
        draft
            .set_kind(action, Some(ActionKind::Click), &mut recorder)
            .unwrap();
        assert!(matches!(
            draft.export(&recorder),
            Err(ScriptError::MissingLocator { index: 0 })
        ));
    }

    #[test]
    fn export_collects_recorded_locators() {
        let tree = create_test_tree();
        let mut recorder = Recorder::new();
        let mut draft = ScriptDraft::new();
        draft.set_name("pick");

        let fill = draft.add_action();
        let fill_slot = draft
            .set_kind(fill, Some(ActionKind::FillField), &mut recorder)
            .unwrap()
            .unwrap();
        recorder.select(fill_slot).unwrap();
        recorder.record_element(&tree.node("span"));

        let choose = draft.add_action();
        draft
            .set_kind(choose, Some(ActionKind::ClickOneOf), &mut recorder)
            .unwrap();
        let (option, option_slot) = draft.add_option(choose, &mut recorder).unwrap();
        draft.rename_option(choose, option, "second").unwrap();
        recorder.select(option_slot).unwrap();
        recorder.record_element(&tree.node("li2"));

        let script = draft.export(&recorder).unwrap();
        assert_eq!(script.script_name, "pick");
        assert_eq!(
            script.actions,
            vec![
                RecordedAction {
                    index: 0,
                    step: Step::FillField {
                        xpath: "/html/body/div[1]/span".into()
                    },
                },
                RecordedAction {
                    index: 1,
                    step: Step::ClickOneOf {
                        options: vec![Choice {
                            name: "second".into(),
                            xpath: "/html/body/ul/li[2]".into()
                        }]
                    },
                },
            ]
        );
    }

    #[test]
    fn unrecorded_option_fails_export() {
        let mut recorder = Recorder::new();
        let mut draft = ScriptDraft::new();
        draft.set_name("x");
        let action = draft.add_action();
        draft
            .set_kind(action, Some(ActionKind::ClickOneOf), &mut recorder)
            .unwrap();
        let (option, _) = draft.add_option(action, &mut recorder).unwrap();
        draft.rename_option(action, option, "only").unwrap();
        assert!(matches!(
            draft.export(&recorder),
            Err(ScriptError::MissingOptionLocator { index: 0, ref name }) if name == "only"
        ));
    }
}
