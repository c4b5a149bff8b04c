use crate::models::{PhotoInfo, TitleValidation};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Network,
    Http,
    Parse,
}

#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {body}"),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

const FALLBACK_API_URL: &str = "http://localhost:5000";

/// Page configuration injected by the server as `window.ENV`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub(crate) struct EnvConfig {
    pub api_url: String,
    pub photos: Vec<PhotoInfo>,
    pub cached_api_response_id: Option<String>,
    /// Echoed back as `csrf_token`; the upload endpoint rejects posts without it.
    pub csrf_token: Option<String>,
}

impl EnvConfig {
    pub fn new() -> Self {
        let Some(window) = web_sys::window() else {
            return Self {
                api_url: FALLBACK_API_URL.to_string(),
                ..Self::default()
            };
        };

        // The API lives on the same origin as the page unless told otherwise.
        let origin = window
            .location()
            .origin()
            .ok()
            .filter(|o| !o.is_empty() && o != "null")
            .unwrap_or_else(|| FALLBACK_API_URL.to_string());

        let Some(env) = window.get("ENV").filter(|e| !e.is_undefined() && e.is_object()) else {
            return Self {
                api_url: origin,
                ..Self::default()
            };
        };

        // Both `API_URL` and `api_url` are accepted; upper-case wins.
        let read_string = |keys: &[&str]| {
            keys.iter().find_map(|k| {
                js_sys::Reflect::get(&env, &(*k).into())
                    .ok()
                    .and_then(|v| v.as_string())
            })
        };

        let api_url = read_string(&["API_URL", "api_url"]).unwrap_or(origin);
        let cached_api_response_id =
            read_string(&["CACHED_API_RESPONSE_ID", "cached_api_response_id"]);
        let csrf_token = read_string(&["CSRF_TOKEN", "csrf_token"]);

        let photos = ["PHOTOS", "photos"]
            .iter()
            .find_map(|k| {
                let v = js_sys::Reflect::get(&env, &(*k).into()).ok()?;
                if v.is_undefined() || v.is_null() {
                    return None;
                }
                let json: String = js_sys::JSON::stringify(&v).ok()?.into();
                Some(parse_photos(&json))
            })
            .unwrap_or_default();

        Self {
            api_url,
            photos,
            cached_api_response_id,
            csrf_token,
        }
    }
}

pub(crate) fn parse_photos(json: &str) -> Vec<PhotoInfo> {
    match serde_json::from_str::<Vec<PhotoInfo>>(json) {
        Ok(photos) => photos,
        Err(e) => {
            log::warn!("ignoring malformed ENV.PHOTOS: {e}");
            vec![]
        }
    }
}

/// Client for the two lookup endpoints used while filling in the form.
///
/// Both calls are stateless; ordering between overlapping calls is the
/// caller's problem.
#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env(config: &EnvConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub(crate) fn validate_title_url(&self, title: &str) -> String {
        format!(
            "{}/api/validate_title?title={}",
            self.base_url,
            urlencoding::encode(title)
        )
    }

    pub(crate) fn lookup_categories_url(&self, query: &str) -> String {
        format!(
            "{}/api/lookup_categories?query={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: String, ctx: &str) -> ApiResult<T> {
        let client = reqwest::Client::new();
        let res = client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(ApiError::network)?;

        if res.status().is_success() {
            let body = res.text().await.map_err(ApiError::network)?;
            serde_json::from_str(&body).map_err(ApiError::parse)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, ctx))
        }
    }

    /// `title` must be the full proposed filename, e.g. `File:Bridge.jpg`.
    pub async fn validate_title(&self, title: &str) -> ApiResult<TitleValidation> {
        self.get_json(self.validate_title_url(title), "Title validation failed")
            .await
    }

    pub async fn lookup_categories(&self, query: &str) -> ApiResult<Vec<String>> {
        self.get_json(self.lookup_categories_url(query), "Category lookup failed")
            .await
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn set_env(value: &wasm_bindgen::JsValue) {
        let window = web_sys::window().expect("window");
        js_sys::Reflect::set(&window, &"ENV".into(), value).expect("set ENV");
    }

    #[wasm_bindgen_test]
    fn test_env_config_defaults_to_page_origin() {
        set_env(&wasm_bindgen::JsValue::UNDEFINED);
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();

        let config = EnvConfig::new();
        assert_eq!(config.api_url, origin);
        assert!(config.photos.is_empty());
        assert!(config.csrf_token.is_none());
    }

    #[wasm_bindgen_test]
    fn test_env_config_reads_form_tokens() {
        let env = js_sys::JSON::parse(
            r#"{"CSRF_TOKEN": "IjVkYjM1", "cached_api_response_id": "cache-123"}"#,
        )
        .expect("valid json");
        set_env(&env);

        let config = EnvConfig::new();
        assert_eq!(config.csrf_token.as_deref(), Some("IjVkYjM1"));
        assert_eq!(config.cached_api_response_id.as_deref(), Some("cache-123"));

        set_env(&wasm_bindgen::JsValue::UNDEFINED);
    }

    #[wasm_bindgen_test]
    fn test_env_config_reads_api_url_and_photos() {
        let env = js_sys::JSON::parse(
            r#"{"API_URL": "https://flickypedia.example", "PHOTOS": [{"id": "1", "original_format": "png"}]}"#,
        )
        .expect("valid json");
        set_env(&env);

        let config = EnvConfig::new();
        assert_eq!(config.api_url, "https://flickypedia.example");
        assert_eq!(config.photos.len(), 1);
        assert_eq!(config.photos[0].original_format, "png");

        set_env(&wasm_bindgen::JsValue::UNDEFINED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_new_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:5000/".to_string());
        assert_eq!(client.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_validate_title_url_encodes_title() {
        let client = ApiClient::new("http://localhost:5000".to_string());
        assert_eq!(
            client.validate_title_url("File:Tower Bridge & co.jpg"),
            "http://localhost:5000/api/validate_title?title=File%3ATower%20Bridge%20%26%20co.jpg"
        );
    }

    #[test]
    fn test_lookup_categories_url_encodes_query() {
        let client = ApiClient::new("https://example.org".to_string());
        assert_eq!(
            client.lookup_categories_url("Aircraft in Mali?"),
            "https://example.org/api/lookup_categories?query=Aircraft%20in%20Mali%3F"
        );
    }

    #[test]
    fn test_parse_photos_accepts_server_shape() {
        let photos = parse_photos(
            r#"[{"id": "53404417215", "title": "Bridge", "original_format": "jpg", "thumbnail_url": "https://live.staticflickr.com/x.jpg"}]"#,
        );
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].title, "Bridge");
    }

    #[test]
    fn test_parse_photos_malformed_is_empty() {
        assert!(parse_photos(r#"{"not": "a list"}"#).is_empty());
    }

    #[test]
    fn test_api_error_displays_message() {
        let e = ApiError::parse("expected value at line 1 column 1");
        assert_eq!(e.kind, ApiErrorKind::Parse);
        assert_eq!(e.to_string(), "expected value at line 1 column 1");
    }
}
