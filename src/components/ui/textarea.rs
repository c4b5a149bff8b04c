use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::input::field_class;

#[component]
pub fn Textarea(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] name: String,
    #[prop(into, optional)] id: String,
    #[prop(optional)] required: bool,
    #[prop(default = 2)] rows: u32,

    #[prop(into)] bind_value: RwSignal<String>,

    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_focus: Option<Callback<web_sys::FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<web_sys::FocusEvent>>,
) -> impl IntoView {
    let merged_class = field_class(&format!("h-auto min-h-16 py-2 {class}"));

    let handle_input = move |ev: web_sys::Event| {
        let Some(el) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        else {
            return;
        };
        let value = el.value();
        bind_value.set(value.clone());
        if let Some(cb) = on_input {
            cb.run(value);
        }
    };

    view! {
        <textarea
            data-name="Textarea"
            class=merged_class
            placeholder=placeholder
            name=name
            id=id
            rows=rows.to_string()
            required=required
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
        ></textarea>
    }
}
