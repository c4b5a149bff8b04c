use crate::api::EnvConfig;
use crate::components::ui::input::field_class;
use crate::components::ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Label,
};
use crate::fields::{CaptionField, CategoryPicker, TitleField};
use crate::models::PhotoInfo;
use crate::state::{AppContext, SubmitHooks};
use leptos::prelude::*;

/// Form field names as the upload endpoint expects them: `photo_<id>-<field>`.
pub(crate) fn photo_field_name(photo_id: &str, field: &str) -> String {
    format!("photo_{photo_id}-{field}")
}

/// `(value, label)` pairs for the caption language select.
const CAPTION_LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("de", "Deutsch")];

/// Hidden inputs posted once per form, next to the per-photo fields.
pub(crate) fn hidden_fields(config: &EnvConfig) -> Vec<(&'static str, String)> {
    if config.csrf_token.is_none() {
        log::warn!("ENV.CSRF_TOKEN is missing; the upload will be rejected");
    }

    vec![
        ("csrf_token", config.csrf_token.clone().unwrap_or_default()),
        (
            "cached_api_response_id",
            config.cached_api_response_id.clone().unwrap_or_default(),
        ),
    ]
}

#[component]
fn CaptionLanguage() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2">
            <Label html_for="language">"Caption language"</Label>
            <select id="language" name="language" class=field_class("w-fit")>
                {CAPTION_LANGUAGES
                    .iter()
                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn PhotoFields(photo: PhotoInfo) -> impl IntoView {
    let title_name = photo_field_name(&photo.id, "title");
    let caption_name = photo_field_name(&photo.id, "short_caption");
    let categories_name = photo_field_name(&photo.id, "categories");

    let heading = if photo.title.trim().is_empty() {
        format!("Photo {}", photo.id)
    } else {
        photo.title.clone()
    };
    let description = format!("Original format: {}", photo.original_format);

    view! {
        <Card>
            <CardHeader>
                <CardTitle>{heading}</CardTitle>
                <CardDescription>{description}</CardDescription>
            </CardHeader>
            <CardContent>
                {photo.thumbnail_url.clone().map(|src| view! {
                    <img src=src alt="" loading="lazy" class="max-h-48 w-fit rounded-md object-contain" />
                })}
                <TitleField
                    id=title_name.clone()
                    name=title_name
                    original_format=photo.original_format.clone()
                    initial=photo.title.clone()
                />
                <CaptionField id=caption_name.clone() name=caption_name />
                <CategoryPicker id=categories_name.clone() name=categories_name />
            </CardContent>
        </Card>
    }
}

/// Per-photo metadata form. Submission is a native POST back to the page.
#[component]
pub fn PrepareInfoPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let photos = app_state.0.config.photos.clone();
    let hidden = hidden_fields(&app_state.0.config);

    let submit_hooks = SubmitHooks::new();
    provide_context(submit_hooks);

    let submitting: RwSignal<bool> = RwSignal::new(false);

    let on_submit = move |_ev: web_sys::SubmitEvent| {
        // Runs before the browser collects the form data.
        submit_hooks.run_all();
        submitting.set(true);
        log::debug!("submitting photo metadata");
    };

    let count = photos.len();

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto w-full max-w-3xl px-4 py-8">
                <div class="mb-6 space-y-1">
                    <h1 class="text-xl font-semibold">"Describe your photos"</h1>
                    <p class="text-xs text-muted-foreground">
                        {match count {
                            1 => "1 photo selected".to_string(),
                            n => format!("{n} photos selected"),
                        }}
                    </p>
                </div>

                {if photos.is_empty() {
                    view! {
                        <div class="text-xs text-muted-foreground">"No photos to describe."</div>
                    }
                    .into_any()
                } else {
                    view! {
                        <form method="post" class="flex flex-col gap-6" on:submit=on_submit>
                            {hidden
                                .into_iter()
                                .map(|(name, value)| view! { <input type="hidden" name=name value=value /> })
                                .collect_view()}
                            <CaptionLanguage />
                            {photos
                                .into_iter()
                                .map(|photo| view! { <PhotoFields photo=photo /> })
                                .collect_view()}
                            <CardFooter>
                                <Button attr:name="upload" attr:disabled=move || submitting.get()>
                                    {move || if submitting.get() { "Uploading..." } else { "Upload" }}
                                </Button>
                            </CardFooter>
                        </form>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_field_name_matches_server_form() {
        assert_eq!(photo_field_name("53404417215", "title"), "photo_53404417215-title");
        assert_eq!(
            photo_field_name("53404417215", "short_caption"),
            "photo_53404417215-short_caption"
        );
    }

    #[test]
    fn test_hidden_fields_carry_form_tokens() {
        let config = EnvConfig {
            csrf_token: Some("IjVkYjM1".to_string()),
            cached_api_response_id: Some("cache-123".to_string()),
            ..EnvConfig::default()
        };
        assert_eq!(
            hidden_fields(&config),
            vec![
                ("csrf_token", "IjVkYjM1".to_string()),
                ("cached_api_response_id", "cache-123".to_string()),
            ]
        );
    }

    #[test]
    fn test_hidden_fields_are_posted_even_when_unset() {
        let names: Vec<_> = hidden_fields(&EnvConfig::default())
            .into_iter()
            .map(|(name, value)| {
                assert!(value.is_empty());
                name
            })
            .collect();
        assert_eq!(names, vec!["csrf_token", "cached_api_response_id"]);
    }

    #[test]
    fn test_caption_languages_match_upload_form() {
        let values: Vec<_> = CAPTION_LANGUAGES.iter().map(|(v, _)| *v).collect();
        assert_eq!(values, vec!["en", "de"]);
    }
}
