//! Sync status indicator.

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;

use super::icons::{AlertIcon, CheckIcon, CloudOffIcon, RefreshIcon};
use super::spinner::SpinnerSize;
use crate::error::Error;
use crate::ui::cn;

/// Synchronization state shown by [`SyncStatusIndicator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SyncState {
    /// Everything is up to date.
    #[default]
    Synced,
    /// A sync is in progress.
    Syncing,
    /// No connection to peers or server.
    Offline,
    /// The last sync attempt failed.
    Error,
}

impl SyncState {
    /// All states in display order.
    pub const ALL: [Self; 4] = [Self::Synced, Self::Syncing, Self::Offline, Self::Error];

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Synced => "Synced",
            Self::Syncing => "Syncing...",
            Self::Offline => "Offline",
            Self::Error => "Sync failed",
        }
    }

    /// Text color classes for this state.
    #[must_use]
    pub fn tone_classes(self) -> &'static str {
        match self {
            Self::Synced => "text-success",
            Self::Syncing => "text-primary",
            Self::Offline => "text-textMuted",
            Self::Error => "text-danger",
        }
    }

    /// Short lowercase name, as used in query strings and `data-status`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Synced => "synced",
            Self::Syncing => "syncing",
            Self::Offline => "offline",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for SyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for SyncState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::unknown("sync status", s))
    }
}

/// Icon paired with a sync state label.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <SyncStatusIndicator status=SyncState::Syncing />
///     <SyncStatusIndicator status=SyncState::Offline show_label=false size=SpinnerSize::Sm />
/// }
/// ```
#[component]
pub fn SyncStatusIndicator(
    /// Current sync state.
    #[prop(default = SyncState::Synced)]
    status: SyncState,
    /// Icon and text size.
    #[prop(default = SpinnerSize::Md)]
    size: SpinnerSize,
    /// Whether to render the text label next to the icon.
    #[prop(default = true)]
    show_label: bool,
    /// Additional CSS classes.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let base_classes = "inline-flex items-center gap-1.5 font-medium";
    let classes = cn([
        base_classes,
        status.tone_classes(),
        size.text_classes(),
        class.as_str(),
    ]);
    let icon_size = size.icon_classes();

    let icon = match status {
        SyncState::Synced => view! { <CheckIcon size=icon_size /> }.into_any(),
        SyncState::Syncing => {
            view! { <RefreshIcon size=icon_size class="animate-spin" /> }.into_any()
        }
        SyncState::Offline => view! { <CloudOffIcon size=icon_size /> }.into_any(),
        SyncState::Error => view! { <AlertIcon size=icon_size /> }.into_any(),
    };

    view! {
        <div role="status" data-status={status.slug()} title={status.label()} class=classes>
            {icon}
            {show_label.then(|| view! { <span>{status.label()}</span> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_fragment;

    #[test]
    fn test_default_state_is_synced() {
        let html = render_fragment(|| view! { <SyncStatusIndicator /> });
        assert!(html.contains(r#"data-status="synced""#));
        assert!(html.contains("text-success"));
        assert!(html.contains(">Synced</span>"));
        assert!(html.contains("h-6 w-6"));
    }

    #[test]
    fn test_syncing_spins_refresh_icon() {
        let html = render_fragment(|| view! { <SyncStatusIndicator status=SyncState::Syncing /> });
        assert!(html.contains("h-6 w-6 animate-spin"));
        assert!(html.contains("text-primary"));
        assert!(html.contains("Syncing..."));
    }

    #[test]
    fn test_error_state() {
        let html = render_fragment(|| view! { <SyncStatusIndicator status=SyncState::Error /> });
        assert!(html.contains(r#"data-status="error""#));
        assert!(html.contains("text-danger"));
        assert!(html.contains("Sync failed"));
        assert!(!html.contains("animate-spin"));
    }

    fn icon_marker(state: SyncState) -> &'static str {
        match state {
            SyncState::Synced => r#"<polyline points="20 6 9 17 4 12""#,
            SyncState::Syncing => r#"d="M3 3v5h5""#,
            SyncState::Offline => r#"d="m2 2 20 20""#,
            SyncState::Error => r#"x1="12" y1="9""#,
        }
    }

    fn assert_only_icon(html: &str, state: SyncState) {
        assert!(html.contains(icon_marker(state)), "{state} icon missing");
        for other in SyncState::ALL.into_iter().filter(|other| *other != state) {
            assert!(
                !html.contains(icon_marker(other)),
                "{state} indicator also renders the {other} icon"
            );
        }
    }

    #[test]
    fn test_synced_uses_check_icon() {
        let html = render_fragment(|| view! { <SyncStatusIndicator status=SyncState::Synced /> });
        assert_only_icon(&html, SyncState::Synced);
    }

    #[test]
    fn test_syncing_uses_refresh_icon() {
        let html = render_fragment(|| view! { <SyncStatusIndicator status=SyncState::Syncing /> });
        assert_only_icon(&html, SyncState::Syncing);
    }

    #[test]
    fn test_offline_uses_cloud_off_icon() {
        let html = render_fragment(|| view! { <SyncStatusIndicator status=SyncState::Offline /> });
        assert_only_icon(&html, SyncState::Offline);
    }

    #[test]
    fn test_error_uses_alert_icon() {
        let html = render_fragment(|| view! { <SyncStatusIndicator status=SyncState::Error /> });
        assert_only_icon(&html, SyncState::Error);
    }

    #[test]
    fn test_extra_attributes_reach_root() {
        let html = render_fragment(|| {
            view! { <SyncStatusIndicator status=SyncState::Offline attr:data-testid="sync" /> }
        });
        assert!(html.contains(r#"data-testid="sync""#));
        assert!(html.starts_with("<div"));
    }

    #[test]
    fn test_hidden_label_keeps_title() {
        let html = render_fragment(|| {
            view! { <SyncStatusIndicator status=SyncState::Offline show_label=false /> }
        });
        assert!(!html.contains("<span"));
        assert!(html.contains(r#"title="Offline""#));
    }

    #[test]
    fn test_size_and_class_pass_through() {
        let html = render_fragment(|| {
            view! { <SyncStatusIndicator size=SpinnerSize::Lg class="ml-auto" /> }
        });
        assert!(html.contains("h-8 w-8"));
        assert!(html.contains("text-base ml-auto"));
    }

    #[test]
    fn test_parse_round_trips_slug() {
        for state in SyncState::ALL {
            assert_eq!(state.to_string().parse::<SyncState>().unwrap(), state);
        }
        assert_eq!("SYNCING".parse::<SyncState>().unwrap(), SyncState::Syncing);
    }

    #[test]
    fn test_parse_unknown_is_error() {
        let err = "paused".parse::<SyncState>().unwrap_err();
        assert_eq!(err.to_string(), "unknown sync status `paused`");
    }
}
