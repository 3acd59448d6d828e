//! Accessible Leptos widgets: buttons, validated inputs, dialogs, and date pickers.
//!
//! Every widget renders the stable `data-ui-*` DOM contract (`data-ui-primitive`,
//! `data-ui-kind`, `data-ui-variant`, state tokens) that stylesheets target, and accepts a
//! `class` prop merged with its base class. Calendar date logic lives in `widget_core`;
//! this crate only binds it to the DOM.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class_names;
mod focus;
mod icon;
mod primitives;

pub use class_names::class_names;
pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, ButtonSize, ButtonVariant, Calendar, Cluster, DatePicker, FieldVariant, IconButton,
    Input, LayoutAlign, LayoutGap, LayoutJustify, Modal, ModalSize, Popover, PopoverPlacement,
    Stack, ValidateOn,
};

/// Convenience imports for crates composing the widget set.
pub mod prelude {
    pub use crate::{
        class_names, Button, ButtonSize, ButtonVariant, Calendar, Cluster, DatePicker,
        FieldVariant, Icon, IconButton, IconName, IconSize, Input, LayoutAlign, LayoutGap,
        LayoutJustify, Modal, ModalSize, Popover, PopoverPlacement, Stack, ValidateOn,
    };
    pub use widget_core::{
        CalendarDate, CalendarOptions, DateRange, SelectedValue, ValidationKind,
        ValidationRules, VisibleMonth, WeekNumbering, WeekStart,
    };
}
