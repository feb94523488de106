//! Static showcase page rendering every component variant.

use leptos::prelude::*;

use crate::ui::components::{
    Badge, BadgeVariant, LoadingSpinner, SpinnerSize, SyncState, SyncStatusIndicator,
};
use crate::ui::render::{Document, render_fragment};

/// Showcase of all component variants, grouped by component.
#[component]
pub fn TestPage(
    /// Heading shown at the top of the page.
    #[prop(into)]
    title: String,
) -> impl IntoView {
    view! {
        <main id="test-page" class="container mx-auto max-w-3xl space-y-8 px-4 py-8">
            <h1 class="text-2xl font-bold">{title}</h1>

            <Section id="spinners" heading="Loading spinner">
                {SpinnerSize::ALL
                    .into_iter()
                    .map(|size| {
                        view! {
                            <Sample caption={format!("size={size}")}>
                                <LoadingSpinner size=size />
                            </Sample>
                        }
                    })
                    .collect_view()}
                <Sample caption={String::from("message=\"\"")}>
                    <LoadingSpinner message="" />
                </Sample>
            </Section>

            <Section id="sync-status" heading="Sync status">
                {SyncState::ALL
                    .into_iter()
                    .map(|status| {
                        view! {
                            <Sample caption={format!("status={status}")}>
                                <SyncStatusIndicator status=status />
                                <SyncStatusIndicator
                                    status=status
                                    show_label=false
                                    size=SpinnerSize::Sm
                                />
                            </Sample>
                        }
                    })
                    .collect_view()}
            </Section>

            <Section id="badges" heading="Badge">
                {BadgeVariant::ALL
                    .into_iter()
                    .map(|variant| {
                        view! {
                            <Sample caption={format!("variant={variant}")}>
                                <Badge variant=variant>{variant.slug()}</Badge>
                            </Sample>
                        }
                    })
                    .collect_view()}
            </Section>
        </main>
    }
}

#[component]
fn Section(
    id: &'static str,
    heading: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="space-y-3">
            <h2 class="text-lg font-semibold">{heading}</h2>
            <div class="flex flex-wrap gap-4">
                {children()}
            </div>
        </section>
    }
}

#[component]
fn Sample(caption: String, children: Children) -> impl IntoView {
    view! {
        <figure class="flex flex-col items-start gap-2 rounded-lg border border-panelBorder p-3">
            <div class="flex items-center gap-3">{children()}</div>
            <figcaption class="font-mono text-xs text-textMuted">{caption}</figcaption>
        </figure>
    }
}

/// Render the showcase page as a complete HTML document.
pub fn render_test_page(title: &str) -> String {
    let heading = title.to_string();
    let title = title.to_string();
    render_fragment(move || {
        view! {
            <Document title=title>
                <TestPage title=heading />
            </Document>
        }
    })
}
