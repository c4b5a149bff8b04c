use leptos::prelude::*;
use leptos_ui::clx;
use tw_merge::tw_merge;

mod components {
    use super::*;
    clx! {FieldHint, p, "text-xs text-muted-foreground"}
    clx! {FieldNotice, p, "text-xs text-muted-foreground italic"}
}

pub use components::*;

/// Validation text returned by the server. It is HTML-safe and may contain
/// links, so it is rendered as markup.
#[component]
pub fn FieldError(#[prop(into, optional)] class: String, #[prop(into)] html: String) -> impl IntoView {
    let merged_class = tw_merge!(
        "text-sm text-destructive [&_a]:underline [&_a]:underline-offset-4",
        class
    );

    view! { <p data-name="FieldError" role="alert" class=merged_class inner_html=html></p> }
}
