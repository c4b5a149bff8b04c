use crate::autocomplete::{AutocompleteEngine, KeyOutcome};
use crate::categories::CategoryList;
use crate::components::hooks::use_field_id::use_field_id;
use crate::components::ui::{Button, ButtonSize, ButtonVariant, FieldHint, Input, Label, Spinner};
use crate::state::{AppContext, SubmitHooks};
use crate::util::utf16_offset_to_byte;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

const SUGGESTION_INDEX_ATTR: &str = "data-suggestion-index";

/// Index of the suggestion row that is receiving focus, if any.
fn suggestion_index(ev: &web_sys::FocusEvent) -> Option<usize> {
    ev.related_target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(&format!("[{SUGGESTION_INDEX_ATTR}]")).ok().flatten())
        .and_then(|row| row.get_attribute(SUGGESTION_INDEX_ATTR))
        .and_then(|i| i.parse().ok())
}

/// Multi-value category input with server-side suggestions.
///
/// Committed names live in a [`CategoryList`]; the form submits them as one
/// newline-separated value through a hidden textarea named `name`.
#[component]
pub(crate) fn CategoryPicker(
    #[prop(into)] id: String,
    #[prop(into)] name: String,
    #[prop(into, optional)] initial: String,
) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let api_client = StoredValue::new(app_state.0.api_client.clone());
    let submit_hooks = expect_context::<SubmitHooks>();

    let list = RwSignal::new(CategoryList::from_serialized(&initial));
    let engine = RwSignal::new(AutocompleteEngine::new());
    let entry = RwSignal::new(String::new());
    let hidden_ref: NodeRef<html::Textarea> = NodeRef::new();
    let listbox_id = use_field_id("suggestions");

    let open_session = move |query: String| {
        let mut ticket = None;
        engine.update(|e| ticket = e.open(&query));
        let Some(ticket) = ticket else {
            return;
        };

        let api_client = api_client.get_value();
        spawn_local(async move {
            let response = api_client.lookup_categories(&ticket.query).await;
            engine.update(|e| {
                e.apply_suggestions(&ticket, response);
            });
        });
    };

    // Whatever is still typed counts as one more category. Signals reach the
    // DOM asynchronously, so the hidden field is written directly.
    submit_hooks.register(Callback::new(move |()| {
        let pending = entry.get_untracked();
        let mut value = String::new();
        list.update(|l| value = l.commit_pending(&pending));
        entry.set(String::new());
        engine.update(|e| e.close());
        if let Some(el) = hidden_ref.get_untracked() {
            el.set_value(&value);
        }
    }));

    let on_input = Callback::new(move |text: String| open_session(text));

    let on_focus = Callback::new(move |_: web_sys::FocusEvent| {
        open_session(entry.get_untracked());
    });

    let on_blur = Callback::new(move |ev: web_sys::FocusEvent| match suggestion_index(&ev) {
        Some(index) => {
            let mut committed = None;
            list.update(|l| engine.update(|e| committed = e.commit_suggestion(index, l)));
            log::debug!("committed suggestion {index} ({committed:?})");
            entry.set(String::new());
        }
        None => engine.update(|e| e.close()),
    });

    let on_keydown = Callback::new(move |ev: web_sys::KeyboardEvent| {
        if !engine.with_untracked(|e| e.is_open()) {
            return;
        }

        let key = ev.key();
        let mut outcome = KeyOutcome::Ignored;
        list.update_untracked(|l| engine.update(|e| outcome = e.handle_key(&key, l)));

        match outcome {
            KeyOutcome::Ignored => {}
            KeyOutcome::Navigated | KeyOutcome::Closed => ev.prevent_default(),
            KeyOutcome::Committed(_) => {
                ev.prevent_default();
                list.notify();
                entry.set(String::new());
            }
        }
    });

    let on_paste = Callback::new(move |ev: web_sys::ClipboardEvent| {
        let Some(pasted) = ev
            .clipboard_data()
            .and_then(|data| data.get_data("text/plain").ok())
        else {
            return;
        };

        // Caret positions count UTF-16 units; no selection means the end.
        let current = entry.get_untracked();
        let selection = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| {
                let start = input.selection_start().ok().flatten()?;
                let end = input.selection_end().ok().flatten()?;
                Some(
                    utf16_offset_to_byte(&current, start as usize)
                        ..utf16_offset_to_byte(&current, end as usize),
                )
            })
            .unwrap_or(current.len()..current.len());

        let mut rest = None;
        list.update_untracked(|l| rest = l.paste(&current, selection, &pasted));
        let Some(rest) = rest else {
            return;
        };

        ev.prevent_default();
        list.notify();
        entry.set(rest);
        engine.update(|e| e.close());
    });

    let busy = Signal::derive(move || engine.with(|e| e.is_loading()));

    let suggestions_view = move || {
        let (query, items, focused) = engine.with(|e| {
            e.session()
                .filter(|s| !s.suggestions().is_empty())
                .map(|s| (s.query().to_string(), s.suggestions().to_vec(), s.focused()))
        })?;

        let rows = items
            .into_iter()
            .enumerate()
            .map(|(i, suggestion)| {
                view! {
                    <li
                        tabindex="-1"
                        role="option"
                        data-suggestion-index=i.to_string()
                        aria-selected=(focused == Some(i)).to_string()
                        class="cursor-pointer rounded-sm px-2 py-1.5 text-sm outline-none hover:bg-muted aria-selected:bg-accent aria-selected:text-accent-foreground"
                    >
                        {suggestion}
                    </li>
                }
            })
            .collect_view();

        Some(view! {
            <ul
                id=listbox_id.clone()
                role="listbox"
                aria-label=format!("Categories matching {query}")
                class="absolute z-10 mt-1 max-h-64 w-full overflow-y-auto rounded-md border bg-popover p-1 shadow-md"
            >
                {rows}
            </ul>
        })
    };

    let categories_view = move || {
        list.with(|l| l.entries().to_vec())
            .into_iter()
            .map(|category| {
                let id = category.id;
                view! {
                    <li class="inline-flex items-center gap-1 rounded-md border bg-muted/40 py-0.5 pl-2 pr-1 text-sm">
                        <span>{category.name.clone()}</span>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Icon
                            attr:r#type="button"
                            attr:aria-label=format!("Remove {}", category.name)
                            on:click=move |_| {
                                list.update(|l| {
                                    l.remove(id);
                                });
                            }
                        >
                            "×"
                        </Button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="flex flex-col gap-2">
            <Label html_for=id.clone()>"Categories"</Label>
            <ul class="flex flex-wrap gap-2">{categories_view}</ul>
            <div class="relative">
                <Input
                    id=id
                    placeholder="Start typing to find a category"
                    autocomplete_off=true
                    bind_value=entry
                    busy=busy
                    on_input=on_input
                    on_focus=on_focus
                    on_blur=on_blur
                    on_keydown=on_keydown
                    on_paste=on_paste
                />
                <Show when=move || busy.get() fallback=|| ().into_view()>
                    <span class="pointer-events-none absolute right-3 top-2.5">
                        <Spinner />
                    </span>
                </Show>
                {suggestions_view}
            </div>
            <FieldHint>"Pick a suggestion, or paste several categories, one per line."</FieldHint>
            <textarea
                name=name
                hidden=true
                node_ref=hidden_ref
                prop:value=move || list.with(|l| l.serialized())
            ></textarea>
        </div>
    }
}
