use crate::counter::{CharacterCounter, CounterTone};
use leptos::prelude::*;

#[component]
pub(crate) fn CounterText(counter: RwSignal<CharacterCounter>) -> impl IntoView {
    let tone = move || match counter.with(|c| c.tone()) {
        CounterTone::Neutral => "neutral",
        CounterTone::Warning => "warning",
    };

    view! {
        <p
            data-name="FieldCounter"
            data-tone=tone
            class="min-h-4 text-xs tabular-nums text-muted-foreground data-[tone=warning]:text-destructive"
        >
            {move || counter.with(|c| c.message().to_string())}
        </p>
    }
}
