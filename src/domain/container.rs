//! Display node representing one visible toast.

use std::fmt;
use std::time::Instant;

use super::toast_options::ToastPosition;

/// Identifier of a display node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(u64);

impl ContainerId {
    /// Creates an id from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Style classes carried by a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleClass {
    /// Entry animation.
    FadeIn,
    /// Top-anchored variant.
    Top,
    /// Exit animation.
    FadeOut,
}

impl StyleClass {
    /// Returns the class name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FadeIn => "toast-fade-in",
            Self::Top => "toast-top",
            Self::FadeOut => "toast-fade-out",
        }
    }
}

impl fmt::Display for StyleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle phase of the toast slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastPhase {
    /// Nothing is displayed.
    #[default]
    Absent,
    /// A toast is displayed and waiting for its dismiss timer.
    Visible,
    /// A toast is animating out and waiting for its completion signal.
    FadingOut,
}

/// A toast display node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastContainer {
    id: ContainerId,
    content: String,
    position: ToastPosition,
    classes: Vec<StyleClass>,
    shown_at: Instant,
}

impl ToastContainer {
    /// Creates a container tagged with the entry classes for `position`.
    #[must_use]
    pub fn new(
        id: ContainerId,
        content: impl Into<String>,
        position: ToastPosition,
        shown_at: Instant,
    ) -> Self {
        let classes = match position {
            ToastPosition::Top => vec![StyleClass::FadeIn, StyleClass::Top],
            ToastPosition::Bottom => vec![StyleClass::FadeIn],
        };

        Self {
            id,
            content: content.into(),
            position,
            classes,
            shown_at,
        }
    }

    /// Identifier assigned by the host.
    #[must_use]
    pub const fn id(&self) -> ContainerId {
        self.id
    }

    /// Displayed text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Screen edge the toast is anchored to.
    #[must_use]
    pub const fn position(&self) -> ToastPosition {
        self.position
    }

    /// Style classes in the order they were applied.
    #[must_use]
    pub fn classes(&self) -> &[StyleClass] {
        &self.classes
    }

    /// Time of insertion into the slot.
    #[must_use]
    pub const fn shown_at(&self) -> Instant {
        self.shown_at
    }

    /// Returns the space-separated class attribute.
    #[must_use]
    pub fn class_attr(&self) -> String {
        self.classes
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns true if `class` has been applied.
    #[must_use]
    pub fn has_class(&self, class: StyleClass) -> bool {
        self.classes.contains(&class)
    }

    /// Appends the exit class. Returns false if it was already present.
    pub fn mark_fading_out(&mut self) -> bool {
        if self.has_class(StyleClass::FadeOut) {
            return false;
        }
        self.classes.push(StyleClass::FadeOut);
        true
    }

    /// Phase derived from the applied classes.
    #[must_use]
    pub fn phase(&self) -> ToastPhase {
        if self.has_class(StyleClass::FadeOut) {
            ToastPhase::FadingOut
        } else {
            ToastPhase::Visible
        }
    }
}
