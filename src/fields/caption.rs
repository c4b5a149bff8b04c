use super::CounterText;
use crate::components::ui::{Label, Textarea};
use crate::counter::{CharacterCounter, FieldLimits};
use leptos::prelude::*;

#[component]
pub(crate) fn CaptionField(
    #[prop(into)] id: String,
    #[prop(into)] name: String,
    #[prop(into, optional)] initial: String,
) -> impl IntoView {
    let value = RwSignal::new(initial);
    let counter = RwSignal::new(CharacterCounter::new(FieldLimits::SHORT_CAPTION));

    view! {
        <div class="flex flex-col gap-2">
            <Label html_for=id.clone()>"Short caption"</Label>
            <Textarea
                id=id
                name=name
                required=true
                placeholder="Describe the photo in a sentence"
                bind_value=value
                on_input=Callback::new(move |v: String| counter.update(|c| c.on_input(&v)))
                on_focus=Callback::new(move |_: web_sys::FocusEvent| {
                    let v = value.get_untracked();
                    counter.update(|c| c.on_focus(&v));
                })
                on_blur=Callback::new(move |_: web_sys::FocusEvent| {
                    let v = value.get_untracked();
                    counter.update(|c| c.on_blur(&v));
                })
            />
            <CounterText counter=counter />
        </div>
    }
}
