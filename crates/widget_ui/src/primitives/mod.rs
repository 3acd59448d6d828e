//! Shared control, overlay, calendar, and layout primitives.

use std::sync::atomic::{AtomicU64, Ordering};

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;

use crate::class_names::merge_class;
use crate::{Icon, IconName, IconSize};

mod calendar;
mod controls;
mod layout;
mod overlays;

pub use calendar::{Calendar, DatePicker};
pub use controls::{Button, IconButton, Input};
pub use layout::{Cluster, Stack};
pub use overlays::{Modal, Popover};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Neutral filled button.
    #[default]
    Default,
    /// Primary emphasized action.
    Primary,
    /// Secondary, lower-emphasis action.
    Secondary,
    /// Bordered button without fill.
    Outline,
    /// Borderless button that only shows a surface on hover.
    Ghost,
    /// Button styled as an inline link.
    Link,
    /// Destructive action.
    Destructive,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Link => "link",
            Self::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large button.
    Lg,
    /// Square icon-only button.
    Icon,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared input-field variants.
pub enum FieldVariant {
    /// Standard input.
    #[default]
    Standard,
    /// Inset input for dense forms.
    Inset,
}

impl FieldVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Inset => "inset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// When an [`Input`] runs its validation rules.
pub enum ValidateOn {
    /// On every keystroke.
    Input,
    /// When the field loses focus, then on every keystroke once touched.
    #[default]
    Blur,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Dialog width tokens.
pub enum ModalSize {
    /// Narrow confirmation dialog.
    Sm,
    /// Default dialog.
    #[default]
    Md,
    /// Wide dialog for forms or pickers.
    Lg,
}

impl ModalSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Where a [`Popover`] surface sits relative to its trigger.
pub enum PopoverPlacement {
    /// Below the trigger, start edges aligned.
    #[default]
    BottomStart,
    /// Below the trigger, end edges aligned.
    BottomEnd,
    /// Above the trigger, start edges aligned.
    TopStart,
}

impl PopoverPlacement {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
            Self::TopStart => "top-start",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    #[default]
    Md,
    /// Large gap.
    Lg,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout alignment tokens.
pub enum LayoutAlign {
    /// Stretch/fill alignment.
    #[default]
    Stretch,
    /// Start alignment.
    Start,
    /// Center alignment.
    Center,
    /// End alignment.
    End,
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout justification tokens.
pub enum LayoutJustify {
    /// Start justification.
    #[default]
    Start,
    /// Center justification.
    Center,
    /// Space between items.
    Between,
    /// End justification.
    End,
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Between => "between",
            Self::End => "end",
        }
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// Document-unique id for wiring `aria-labelledby`/`aria-describedby` pairs.
pub(crate) fn next_widget_id(prefix: &str) -> String {
    let id = NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed);
    format!("ui-{prefix}-{id}")
}
