//! Server-side rendering helpers.

use leptos::prelude::*;

/// Default stylesheet served from the static directory.
pub const DEFAULT_STYLESHEET: &str = "/static/app.css";

/// Render a view to an HTML string.
///
/// The view is built inside a fresh reactive [`Owner`] so components can be
/// rendered outside of a running Leptos application (handlers, tests).
///
/// # Example
///
/// ```rust,ignore
/// let html = render_fragment(|| view! { <LoadingSpinner size=SpinnerSize::Sm /> });
/// ```
pub fn render_fragment<F, V>(f: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| f().to_html())
}

/// Complete HTML document wrapping page content.
#[component]
pub fn Document(
    /// Page title.
    #[prop(into)]
    title: String,
    /// Stylesheet URL.
    #[prop(default = DEFAULT_STYLESHEET)]
    stylesheet: &'static str,
    /// Body content.
    children: Children,
) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
                <link rel="stylesheet" href=stylesheet/>
            </head>
            <body class="min-h-screen bg-background text-textPrimary antialiased">
                {children()}
            </body>
        </html>
    }
}
