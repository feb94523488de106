//! Loading spinner with an optional message.

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;

use super::icons::LoaderIcon;
use crate::error::Error;
use crate::ui::cn;

/// Default text shown next to the spinner.
pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";

/// Size shared by the spinner and the sync status indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SpinnerSize {
    /// Small, for inline use.
    Sm,
    /// Medium (default).
    #[default]
    Md,
    /// Large, for page-level loading.
    Lg,
}

impl SpinnerSize {
    /// All sizes, smallest first.
    pub const ALL: [Self; 3] = [Self::Sm, Self::Md, Self::Lg];

    /// Icon dimension classes for this size.
    #[must_use]
    pub fn icon_classes(self) -> &'static str {
        match self {
            Self::Sm => "h-4 w-4",
            Self::Md => "h-6 w-6",
            Self::Lg => "h-8 w-8",
        }
    }

    /// Text size classes for this size.
    #[must_use]
    pub fn text_classes(self) -> &'static str {
        match self {
            Self::Sm => "text-xs",
            Self::Md => "text-sm",
            Self::Lg => "text-base",
        }
    }

    /// Short lowercase name, as used in query strings.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

impl fmt::Display for SpinnerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for SpinnerSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::unknown("size", s))
    }
}

/// Loading spinner component.
///
/// An empty or blank `message` renders the icon alone; the status region then
/// carries an `aria-label` instead.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <LoadingSpinner />
///     <LoadingSpinner size=SpinnerSize::Lg message="Fetching peers..." />
///     <LoadingSpinner size=SpinnerSize::Sm message="" class="text-primary" />
/// }
/// ```
#[component]
pub fn LoadingSpinner(
    /// Text displayed beside the spinner.
    #[prop(default = DEFAULT_LOADING_MESSAGE.to_string(), into)]
    message: String,
    /// Spinner size.
    #[prop(default = SpinnerSize::Md)]
    size: SpinnerSize,
    /// Additional CSS classes.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let base_classes = "inline-flex items-center gap-2 text-textMuted";
    let classes = cn([base_classes, size.text_classes(), class.as_str()]);

    let has_message = !message.trim().is_empty();
    let aria_label = (!has_message).then_some("Loading");

    view! {
        <div role="status" aria-live="polite" aria-label=aria_label class=classes>
            <LoaderIcon size={size.icon_classes()} />
            {has_message.then(|| view! { <span>{message}</span> })}
        </div>
    }
}
