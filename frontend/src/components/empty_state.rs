use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] icon: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <i class=format!("{} text-3xl text-fg-muted", icon.unwrap_or("fas fa-folder-open"))></i>
            <h3 class="mt-2 text-sm font-semibold text-fg">{title}</h3>
            {description.map(|desc| view! { <p class="mt-1 text-sm text-fg-muted">{desc}</p> })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_title_and_description() {
        let html = render_to_string(move || {
            view! { <EmptyState title="No contracts yet" description="Create one to get started." icon="fas fa-file-contract" /> }
        });
        assert!(html.contains("No contracts yet"));
        assert!(html.contains("Create one to get started."));
        assert!(html.contains("fa-file-contract"));
    }
}
