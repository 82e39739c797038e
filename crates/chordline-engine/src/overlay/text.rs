use std::collections::BTreeMap;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawList, ZIndex};
use crate::text::FontId;

/// Left/top inset of slot 1 from the anchor, logical px.
const INSET: f32 = 10.0;

/// Handle to a text slot created by [`TextOverlay::setup_text`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextHandle(usize);

impl TextHandle {
    pub fn slot(self) -> usize {
        self.0
    }
}

/// Numbered single-line text slots stacked below an anchor point.
///
/// Slot `n` (1-based) sits at `anchor + (10, 10 + (n - 1) · line_height)`.
#[derive(Debug, Clone)]
pub struct TextOverlay {
    font: FontId,
    size: f32,
    color: Color,
    anchor: Vec2,
    line_height: f32,
    slots: BTreeMap<usize, String>,
}

impl TextOverlay {
    pub fn new(font: FontId, size: f32, color: Color) -> Self {
        Self {
            font,
            size,
            color,
            anchor: Vec2::zero(),
            line_height: size * 1.2,
            slots: BTreeMap::new(),
        }
    }

    /// Creates (or replaces) the text in `slot`.
    pub fn setup_text(&mut self, initial: impl Into<String>, slot: usize) -> TextHandle {
        let slot = slot.max(1);
        self.slots.insert(slot, initial.into());
        TextHandle(slot)
    }

    pub fn update_text(&mut self, handle: TextHandle, text: impl Into<String>) {
        let text = text.into();
        match self.slots.get_mut(&handle.0) {
            Some(current) if *current != text => {
                log::trace!("text slot {} -> {text:?}", handle.0);
                *current = text;
            }
            Some(_) => {}
            None => {
                self.slots.insert(handle.0, text);
            }
        }
    }

    pub fn text(&self, handle: TextHandle) -> &str {
        self.slots.get(&handle.0).map_or("", String::as_str)
    }

    /// Moves slot 1 relative to `anchor` (logical px) and sets the spacing.
    pub fn set_anchor(&mut self, anchor: Vec2, line_height: f32) {
        self.anchor = anchor;
        self.line_height = line_height;
    }

    pub fn slot_origin(&self, slot: usize) -> Vec2 {
        let row = slot.saturating_sub(1) as f32;
        self.anchor + Vec2::new(INSET, INSET + row * self.line_height)
    }

    /// Records every non-empty slot as overlay text.
    pub fn push(&self, list: &mut DrawList) {
        for (&slot, text) in &self.slots {
            list.push_text(
                ZIndex::OVERLAY,
                text.as_str(),
                self.font,
                self.size,
                self.color,
                self.slot_origin(slot),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;

    fn overlay() -> TextOverlay {
        TextOverlay::new(FontId(0), 16.0, Color::WHITE)
    }

    // ── slots ─────────────────────────────────────────────────────────────

    #[test]
    fn setup_then_update() {
        let mut o = overlay();
        let h = o.setup_text("No line segment", 1);
        assert_eq!(o.text(h), "No line segment");

        o.update_text(h, "Circle");
        assert_eq!(o.text(h), "Circle");
    }

    #[test]
    fn slot_zero_is_treated_as_first() {
        let mut o = overlay();
        assert_eq!(o.setup_text("a", 0).slot(), 1);
    }

    #[test]
    fn slots_stack_by_line_height() {
        let mut o = overlay();
        o.set_anchor(Vec2::new(100.0, 0.0), 20.0);
        assert_eq!(o.slot_origin(1), Vec2::new(110.0, 10.0));
        assert_eq!(o.slot_origin(3), Vec2::new(110.0, 50.0));
    }

    // ── push ──────────────────────────────────────────────────────────────

    #[test]
    fn push_skips_empty_slots() {
        let mut o = overlay();
        o.setup_text("one", 1);
        o.setup_text("", 2);
        o.setup_text("three", 3);

        let mut list = DrawList::new();
        o.push(&mut list);
        let texts: Vec<_> = list
            .items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, ["one", "three"]);
    }

    #[test]
    fn text_is_positioned_by_slot() {
        let mut o = overlay();
        o.set_anchor(Vec2::zero(), 18.0);
        o.setup_text("second", 2);

        let mut list = DrawList::new();
        o.push(&mut list);
        let DrawCmd::Text(t) = &list.items()[0].cmd else {
            panic!("expected text");
        };
        assert_eq!(t.origin, Vec2::new(10.0, 28.0));
        assert_eq!(t.size, 16.0);
    }
}
