//! SVG icon components.
//!
//! Icons are rendered inline as SVG elements so they pick up `currentColor`
//! from the surrounding text and can be sized with utility classes.

use leptos::prelude::*;

use crate::ui::cn;

/// Common icon size class.
const ICON_SIZE: &str = "h-4 w-4";

/// Loader/spinner icon.
#[component]
pub fn LoaderIcon(
    /// Size classes (e.g., "h-6 w-6").
    #[prop(default = ICON_SIZE)]
    size: &'static str,
    /// Additional CSS classes.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let classes = cn([size, "animate-spin", class.as_str()]);

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=classes
        >
            <path d="M21 12a9 9 0 1 1-6.219-8.56" />
        </svg>
    }
}

/// Refresh/rotate icon, used for in-progress sync.
#[component]
pub fn RefreshIcon(
    /// Size classes (e.g., "h-6 w-6").
    #[prop(default = ICON_SIZE)]
    size: &'static str,
    /// Additional CSS classes.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let classes = cn([size, class.as_str()]);

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=classes
        >
            <path d="M21 12a9 9 0 0 0-9-9 9.75 9.75 0 0 0-6.74 2.74L3 8" />
            <path d="M3 3v5h5" />
            <path d="M3 12a9 9 0 0 0 9 9 9.75 9.75 0 0 0 6.74-2.74L21 16" />
            <path d="M16 16h5v5" />
        </svg>
    }
}

/// Check/success icon.
#[component]
pub fn CheckIcon(
    /// Size classes (e.g., "h-6 w-6").
    #[prop(default = ICON_SIZE)]
    size: &'static str,
    /// Additional CSS classes.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let classes = cn([size, class.as_str()]);

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=classes
        >
            <polyline points="20 6 9 17 4 12" />
        </svg>
    }
}

/// Crossed-out cloud icon for lost connectivity.
#[component]
pub fn CloudOffIcon(
    /// Size classes (e.g., "h-6 w-6").
    #[prop(default = ICON_SIZE)]
    size: &'static str,
    /// Additional CSS classes.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let classes = cn([size, class.as_str()]);

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=classes
        >
            <path d="m2 2 20 20" />
            <path d="M5.782 5.782A7 7 0 0 0 9 19h8.5a4.5 4.5 0 0 0 1.307-.193" />
            <path d="M21.532 16.5A4.5 4.5 0 0 0 17.5 10h-1.79A7.008 7.008 0 0 0 10 5.07" />
        </svg>
    }
}

/// Warning triangle icon.
#[component]
pub fn AlertIcon(
    /// Size classes (e.g., "h-6 w-6").
    #[prop(default = ICON_SIZE)]
    size: &'static str,
    /// Additional CSS classes.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let classes = cn([size, class.as_str()]);

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=classes
        >
            <path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3" />
            <line x1="12" y1="9" x2="12" y2="13" />
            <line x1="12" y1="17" x2="12.01" y2="17" />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_fragment;

    #[test]
    fn test_loader_icon_spins() {
        let html = render_fragment(|| view! { <LoaderIcon /> });
        assert!(html.contains("<svg"));
        assert!(html.contains("h-4 w-4 animate-spin"));
        assert!(html.contains(r#"aria-hidden="true""#));
    }

    #[test]
    fn test_icon_appends_caller_class() {
        let html = render_fragment(|| view! { <CheckIcon class="text-success" /> });
        assert!(html.contains(r#"class="h-4 w-4 text-success""#));
    }

    #[test]
    fn test_icon_size_override() {
        let html = render_fragment(|| view! { <RefreshIcon size="h-8 w-8" /> });
        assert!(html.contains(r#"class="h-8 w-8""#));
        assert!(!html.contains("h-4 w-4"));
    }

    #[test]
    fn test_icon_without_class_has_no_trailing_space() {
        let html = render_fragment(|| view! { <AlertIcon /> });
        assert!(html.contains(r#"class="h-4 w-4""#));
    }
}
