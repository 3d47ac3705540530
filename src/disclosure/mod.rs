//! Expand/collapse state shared by accordions, FAQ lists, footer link groups
//! and sidebar sections.

use std::collections::BTreeSet;
use std::fmt::{Debug, Display, Formatter};
use std::rc::Rc;

use gpui::{SharedString, Window};
use tracing::{debug, trace};

#[cfg(test)]
mod tests;

type ChangeHandler = Rc<dyn Fn(&OpenSet, &mut Window, &mut gpui::App)>;

#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PanelId(SharedString);

impl PanelId {
    pub fn new(value: impl Into<SharedString>) -> Self {
        Self(value.into())
    }

    pub fn as_shared(&self) -> &SharedString {
        &self.0
    }
}

impl Display for PanelId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<&'static str> for PanelId {
    fn from(value: &'static str) -> Self {
        Self(value.into())
    }
}

impl From<String> for PanelId {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<SharedString> for PanelId {
    fn from(value: SharedString) -> Self {
        Self(value)
    }
}

impl From<&PanelId> for PanelId {
    fn from(value: &PanelId) -> Self {
        value.clone()
    }
}

/// Panels currently expanded, iterated in sorted order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OpenSet {
    ids: BTreeSet<PanelId>,
}

impl OpenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &PanelId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PanelId> + '_ {
        self.ids.iter()
    }

    /// The sole open panel of a single-open group.
    pub fn first(&self) -> Option<&PanelId> {
        self.ids.first()
    }
}

impl FromIterator<PanelId> for OpenSet {
    fn from_iter<I: IntoIterator<Item = PanelId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a OpenSet {
    type Item = &'a PanelId;
    type IntoIter = std::collections::btree_set::Iter<'a, PanelId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DisclosureMode {
    /// At most one panel open; opening one collapses the others.
    #[default]
    Single,
    /// Any subset of panels open.
    Multiple,
}

/// Tracks which panels of one group are expanded under a fixed open policy.
#[derive(Clone, Default)]
pub struct DisclosureGroup {
    mode: DisclosureMode,
    open: OpenSet,
    on_change: Option<ChangeHandler>,
}

impl DisclosureGroup {
    pub fn new(mode: DisclosureMode) -> Self {
        Self {
            mode,
            open: OpenSet::new(),
            on_change: None,
        }
    }

    pub fn single() -> Self {
        Self::new(DisclosureMode::Single)
    }

    pub fn multiple() -> Self {
        Self::new(DisclosureMode::Multiple)
    }

    /// Seeds the open set. A single-open group keeps only the first id.
    pub fn with_initially_open<I>(mut self, ids: impl IntoIterator<Item = I>) -> Self
    where
        I: Into<PanelId>,
    {
        let mut ids = ids.into_iter().map(Into::into);
        self.open = match self.mode {
            DisclosureMode::Single => {
                let first = ids.next();
                let dropped = ids.count();
                if dropped > 0 {
                    debug!(dropped, "single-open group seeded with several panels; keeping the first");
                }
                first.into_iter().collect()
            }
            DisclosureMode::Multiple => ids.collect(),
        };
        self
    }

    pub fn on_change(
        mut self,
        handler: impl Fn(&OpenSet, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn mode(&self) -> DisclosureMode {
        self.mode
    }

    pub fn open_set(&self) -> &OpenSet {
        &self.open
    }

    pub fn is_open(&self, id: &PanelId) -> bool {
        self.open.contains(id)
    }

    /// Flips `id`. In single mode this replaces the open panel, or collapses
    /// everything when `id` was the open one. Accepts ids never seen before.
    /// Does not call the `on_change` handler; UI events go through
    /// [`toggle_in`](Self::toggle_in).
    pub fn toggle(&mut self, id: impl Into<PanelId>) -> &OpenSet {
        let id = id.into();
        let opened = match self.mode {
            DisclosureMode::Single => {
                let was_sole_open = self.open.len() == 1 && self.open.contains(&id);
                self.open.ids.clear();
                if !was_sole_open {
                    self.open.ids.insert(id.clone());
                }
                !was_sole_open
            }
            DisclosureMode::Multiple => {
                if self.open.ids.remove(&id) {
                    false
                } else {
                    self.open.ids.insert(id.clone());
                    true
                }
            }
        };
        trace!(panel = %id, opened, open_count = self.open.len(), "disclosure toggled");
        &self.open
    }

    /// Toggles from a UI event: notifies the change handler and refreshes the
    /// window.
    pub fn toggle_in(
        &mut self,
        id: impl Into<PanelId>,
        window: &mut Window,
        cx: &mut gpui::App,
    ) -> &OpenSet {
        self.toggle(id);
        if let Some(handler) = self.on_change.clone() {
            handler(&self.open, window, cx);
        }
        window.refresh();
        &self.open
    }
}

impl Debug for DisclosureGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisclosureGroup")
            .field("mode", &self.mode)
            .field("open", &self.open)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
