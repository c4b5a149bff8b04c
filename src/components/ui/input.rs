use leptos::html;
use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

const FIELD_CLASS: &str = "placeholder:text-muted-foreground selection:bg-primary selection:text-primary-foreground dark:bg-input/30 border-input flex h-9 w-full min-w-0 rounded-md border bg-transparent px-3 py-1 text-base shadow-xs transition-[color,box-shadow] outline-none disabled:pointer-events-none disabled:cursor-not-allowed disabled:opacity-50 md:text-sm";

const FIELD_STATE_CLASS: &str = "focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-2 aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive data-[busy=true]:pr-9";

pub(crate) fn field_class(extra: &str) -> String {
    tw_merge!(FIELD_CLASS, FIELD_STATE_CLASS, extra)
}

#[component]
pub fn Input(
    // Styling
    #[prop(into, optional)] class: String,

    // Common HTML attributes
    #[prop(into, default = "text")] r#type: &'static str,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] name: String,
    #[prop(into, optional)] id: String,
    #[prop(optional)] required: bool,
    #[prop(optional)] autocomplete_off: bool,

    // Two-way binding
    //
    // NOTE: `bind:value=...` is avoided on purpose; the manual wiring below
    // behaves the same across Leptos releases.
    #[prop(into)] bind_value: RwSignal<String>,

    // Field state reflected as attributes (for styling).
    #[prop(into, optional)] invalid: Signal<bool>,
    #[prop(into, optional)] busy: Signal<bool>,

    // Event hooks. `on_input` fires after `bind_value` has been updated.
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_focus: Option<Callback<web_sys::FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<web_sys::FocusEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<web_sys::KeyboardEvent>>,
    #[prop(optional)] on_paste: Option<Callback<web_sys::ClipboardEvent>>,

    // Ref for direct DOM access
    #[prop(optional)] node_ref: NodeRef<html::Input>,
) -> impl IntoView {
    let merged_class = field_class(&class);

    let handle_input = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let value = input.value();
        bind_value.set(value.clone());
        if let Some(cb) = on_input {
            cb.run(value);
        }
    };

    view! {
        <input
            data-name="Input"
            type=r#type
            class=merged_class
            placeholder=placeholder
            name=name
            id=id
            required=required
            autocomplete=if autocomplete_off { "off" } else { "on" }
            aria-invalid=move || if invalid.get() { "true" } else { "false" }
            data-busy=move || busy.get().to_string()
            prop:value=move || bind_value.get()
            on:input=handle_input
            on:focus=move |ev: web_sys::FocusEvent| {
                if let Some(cb) = on_focus {
                    cb.run(ev);
                }
            }
            on:blur=move |ev: web_sys::FocusEvent| {
                if let Some(cb) = on_blur {
                    cb.run(ev);
                }
            }
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if let Some(cb) = on_keydown {
                    cb.run(ev);
                }
            }
            on:paste=move |ev: web_sys::ClipboardEvent| {
                if let Some(cb) = on_paste {
                    cb.run(ev);
                }
            }
            node_ref=node_ref
        />
    }
}
