//! Badge component for status labels and tags.

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;

use crate::error::Error;
use crate::ui::cn;

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BadgeVariant {
    /// Default badge style.
    #[default]
    Default,
    /// Muted secondary badge.
    Secondary,
    /// Error/destructive badge.
    Destructive,
    /// Outline badge.
    Outline,
    /// Success/positive badge.
    Success,
    /// Warning badge.
    Warning,
}

impl BadgeVariant {
    /// All variants in display order.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Secondary,
        Self::Destructive,
        Self::Outline,
        Self::Success,
        Self::Warning,
    ];

    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "border-transparent bg-primary text-white",
            Self::Secondary => "border-transparent bg-panel text-textPrimary",
            Self::Destructive => "border-transparent bg-danger text-white",
            Self::Outline => "border-panelBorder bg-transparent text-textPrimary",
            Self::Success => "border-transparent bg-success text-white",
            Self::Warning => "border-transparent bg-warning text-black",
        }
    }

    /// Short lowercase name, as used in query strings.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for BadgeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for BadgeVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::unknown("badge variant", s))
    }
}

/// Badge component for displaying status or labels.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge variant=BadgeVariant::Success>"Active"</Badge>
///     <Badge variant=BadgeVariant::Destructive>"Revoked"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    /// Badge variant.
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Additional CSS classes.
    #[prop(optional, into)]
    class: String,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let base_classes = "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs \
                        font-semibold transition-colors";

    let classes = cn([base_classes, variant.classes(), class.as_str()]);

    view! {
        <span class=classes>
            {children()}
        </span>
    }
}
