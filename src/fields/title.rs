use super::CounterText;
use crate::components::ui::{FieldError, FieldHint, FieldNotice, Input, Label, Spinner};
use crate::counter::{CharacterCounter, FieldLimits};
use crate::state::AppContext;
use crate::validation::{BlurOutcome, TitleConfig, TitleState, TitleValidator};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Title input checked against the title-validation service on blur.
#[component]
pub(crate) fn TitleField(
    #[prop(into)] id: String,
    #[prop(into)] name: String,
    #[prop(into)] original_format: String,
    #[prop(into, optional)] initial: String,
) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let api_client = StoredValue::new(app_state.0.api_client.clone());

    let value = RwSignal::new(initial);
    let counter = RwSignal::new(CharacterCounter::new(FieldLimits::TITLE));
    let validator = RwSignal::new(TitleValidator::new(TitleConfig::new(
        original_format.clone(),
    )));
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    // Mirror the validator into the browser's constraint API; an empty
    // message makes the field submittable again.
    Effect::new(move |_| {
        let message = validator.with(|v| v.custom_validity().to_string());
        if let Some(input) = input_ref.get() {
            input.set_custom_validity(&message);
        }
    });

    let on_blur = Callback::new(move |_: web_sys::FocusEvent| {
        let current = value.get_untracked();
        counter.update(|c| c.on_blur(&current));

        let mut outcome = BlurOutcome::Cleared;
        validator.update(|v| outcome = v.on_blur(&current));

        let BlurOutcome::Validate(ticket) = outcome else {
            return;
        };

        let api_client = api_client.get_value();
        spawn_local(async move {
            let response = api_client.validate_title(&ticket.filename).await;
            let mut applied = false;
            validator.update(|v| applied = v.apply(&ticket, response));
            if !applied {
                log::debug!("title {:?} changed while it was being checked", ticket.value);
            }
        });
    });

    let on_focus = Callback::new(move |_: web_sys::FocusEvent| {
        let current = value.get_untracked();
        counter.update(|c| c.on_focus(&current));
    });

    let pending = Signal::derive(move || validator.with(|v| v.is_pending()));
    let invalid = Signal::derive(move || validator.with(|v| v.error_html().is_some()));

    view! {
        <div class="flex flex-col gap-2">
            <Label html_for=id.clone()>"Title"</Label>
            <div class="relative">
                <Input
                    id=id
                    name=name
                    required=true
                    bind_value=value
                    invalid=invalid
                    busy=pending
                    on_input=Callback::new(move |v: String| counter.update(|c| c.on_input(&v)))
                    on_focus=on_focus
                    on_blur=on_blur
                    node_ref=input_ref
                />
                <Show when=move || pending.get() fallback=|| ().into_view()>
                    <span class="pointer-events-none absolute right-3 top-2.5">
                        <Spinner />
                    </span>
                </Show>
            </div>
            <FieldHint>
                {format!("The .{original_format} extension is added automatically.")}
            </FieldHint>
            <CounterText counter=counter />
            {move || {
                validator
                    .with(|v| v.error_html().map(str::to_string))
                    .map(|html| view! { <FieldError html=html /> })
            }}
            {move || {
                validator.with(|v| match v.state() {
                    TitleState::Unavailable { reason } => v
                        .notice()
                        .map(|notice| view! { <FieldNotice attr:title=reason.clone()>{notice}</FieldNotice> }),
                    _ => None,
                })
            }}
        </div>
    }
}
