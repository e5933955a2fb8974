//! Raw interaction events reported by a presentation surface
//!
//! A surface (tree view, list widget, test harness) translates its native
//! input into these events and hands them to
//! [`FileBrowser::handle_interaction`](super::FileBrowser::handle_interaction).
//! Indices refer to the browser's current entry list, in presentation
//! order.

/// Keyboard modifiers held during a click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Ctrl (or platform equivalent): toggle one item
    pub ctrl: bool,
    /// Shift: extend a range from the anchor
    pub shift: bool,
}

impl Modifiers {
    /// No modifiers held
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
    };
    /// Ctrl only
    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
    };
    /// Shift only
    pub const SHIFT: Self = Self {
        ctrl: false,
        shift: true,
    };
    /// Ctrl and Shift together
    pub const CTRL_SHIFT: Self = Self {
        ctrl: true,
        shift: true,
    };
}

/// A single raw interaction from the presentation surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// Single click on the entry at `index`
    Click {
        /// Index into the current entry list
        index: usize,
        /// Modifiers held during the click
        modifiers: Modifiers,
    },
    /// Double click on the entry at `index`
    DoubleClick {
        /// Index into the current entry list
        index: usize,
    },
    /// Free-form path text committed in an edit field
    TextCommitted(String),
}
