use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm",
            ButtonVariant::Secondary => "bg-surface-muted hover:bg-surface-elevated text-fg border border-border",
            ButtonVariant::Danger => "bg-action-danger-bg hover:bg-action-danger-bg-hover text-action-danger-text",
            ButtonVariant::Ghost => "text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    let class = format!(
        "inline-flex items-center justify-center rounded-md px-3 py-1.5 text-sm font-semibold transition-colors disabled:opacity-50 disabled:cursor-not-allowed {} {}",
        variant.classes(),
        class
    );
    view! {
        <button
            type="button"
            class=class
            disabled=move || disabled.get() || loading.get()
            on:click=move |_| on_click.call(())
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn danger_variant_renders_danger_classes() {
        assert!(ButtonVariant::Danger.classes().contains("bg-action-danger-bg"));
        let html = render_to_string(move || {
            view! {
                <Button variant=ButtonVariant::Danger on_click=Callback::new(|_| {})>
                    "Delete"
                </Button>
            }
        });
        assert!(html.contains("Delete"));
        assert!(html.contains("bg-action-danger-bg"));
    }
}
