//! Path slots and the selection state that routes recorded locators into them.

use crate::error::ScriptError;
use dropbot_dom::LocatorNode;
use dropbot_locator::derive_xpath;
use log::debug;
use std::collections::BTreeMap;

/// Identifies one path slot of a [`Recorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub u32);

/// Manages the path slots on the page and which one, if any, is active.
///
/// Only the active slot receives a locator when an element is recorded.
#[derive(Debug, Default)]
pub struct Recorder {
    slots: BTreeMap<SlotId, Option<String>>,
    next_id: u32,
    active: Option<SlotId>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_slot(&mut self) -> SlotId {
        let id = SlotId(self.next_id);
        self.next_id += 1;
        self.slots.insert(id, None);
        id
    }

    /// Removes a slot. Deleting the active slot clears the selection.
    pub fn delete_slot(&mut self, id: SlotId) -> Result<(), ScriptError> {
        self.slots.remove(&id).ok_or(ScriptError::UnknownSlot(id))?;
        if self.active == Some(id) {
            self.active = None;
        }
        Ok(())
    }

    /// Makes `id` the slot that receives the next recorded locator.
    pub fn select(&mut self, id: SlotId) -> Result<(), ScriptError> {
        if !self.slots.contains_key(&id) {
            return Err(ScriptError::UnknownSlot(id));
        }
        self.active = Some(id);
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.active = None;
    }

    pub fn active_slot(&self) -> Option<SlotId> {
        self.active
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.slots.contains_key(&id)
    }

    /// The locator recorded into `id`, if any.
    pub fn xpath(&self, id: SlotId) -> Option<&str> {
        self.slots.get(&id).and_then(|x| x.as_deref())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Stores `xpath` in the active slot, replacing what was there. Returns the slot
    /// written, or `None` when no slot is active.
    pub fn record_xpath(&mut self, xpath: impl Into<String>) -> Option<SlotId> {
        let id = self.active?;
        let slot = self.slots.get_mut(&id)?;
        let xpath = xpath.into();
        debug!("Recorded '{}' into slot {:?}", xpath, id);
        *slot = Some(xpath);
        Some(id)
    }

    /// Derives the locator of `element` and records it into the active slot.
    pub fn record_element<N: LocatorNode>(&mut self, element: &N) -> Option<SlotId> {
        if self.active.is_none() {
            debug!("No active slot; ignoring recorded element");
            return None;
        }
        let xpath = derive_xpath(Some(element))?;
        self.record_xpath(xpath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dropbot_dom::tests::create_test_tree;

    #[test]
    fn nothing_is_recorded_without_an_active_slot() {
        let mut recorder = Recorder::new();
        let slot = recorder.create_slot();
        assert_eq!(recorder.record_xpath("/html"), None);
        assert_eq!(recorder.xpath(slot), None);
    }

    #[test]
    fn active_slot_receives_and_overwrites() {
        let tree = create_test_tree();
        let mut recorder = Recorder::new();
        let first = recorder.create_slot();
        let second = recorder.create_slot();

        recorder.select(second).unwrap();
        assert_eq!(recorder.record_element(&tree.node("li2")), Some(second));
        assert_eq!(recorder.xpath(second), Some("/html/body/ul/li[2]"));

        assert_eq!(recorder.record_element(&tree.node("main")), Some(second));
        assert_eq!(recorder.xpath(second), Some(r#"//*[@id="main"]"#));
        assert_eq!(recorder.xpath(first), None);
    }

    #[test]
    fn non_elements_are_not_recorded() {
        let tree = create_test_tree();
        let mut recorder = Recorder::new();
        let slot = recorder.create_slot();
        recorder.select(slot).unwrap();
        assert_eq!(recorder.record_element(&tree.node("hello")), None);
        assert_eq!(recorder.xpath(slot), None);
    }

    #[test]
    fn deleting_the_active_slot_clears_selection() {
        let mut recorder = Recorder::new();
        let slot = recorder.create_slot();
        recorder.select(slot).unwrap();
        recorder.delete_slot(slot).unwrap();
        assert_eq!(recorder.active_slot(), None);
        assert!(recorder.is_empty());
        assert!(matches!(
            recorder.delete_slot(slot),
            Err(ScriptError::UnknownSlot(_))
        ));
        assert!(recorder.select(slot).is_err());
    }
}
