use crate::api::ApiResult;
use crate::util::first_sentence;

const TITLE_PREFIX: &str = "File:";

const GENERIC_REJECTION: &str =
    "Please choose a different title. This title cannot be used on Commons.";

/// Per-field metadata for a title input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TitleConfig {
    /// Extension of the original file, without the dot.
    pub original_format: String,
}

impl TitleConfig {
    pub fn new(original_format: impl Into<String>) -> Self {
        Self {
            original_format: original_format.into(),
        }
    }

    /// `File:<value>.<original_format>`, the name the file would get on Commons.
    pub fn proposed_filename(&self, value: &str) -> String {
        format!("{TITLE_PREFIX}{value}.{}", self.original_format)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub(crate) enum TitleState {
    #[default]
    Idle,
    Pending,
    Valid,
    Invalid {
        message: String,
    },
    /// The service could not be reached; the next blur tries again.
    Unavailable {
        reason: String,
    },
}

/// A validation request the view must send. Carries the generation it was
/// issued under so late responses can be recognised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ValidationTicket {
    pub generation: u64,
    pub value: String,
    pub filename: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum BlurOutcome {
    Cleared,
    Validate(ValidationTicket),
}

/// Validity of a title field, driven by loss of focus.
#[derive(Clone, Debug)]
pub(crate) struct TitleValidator {
    config: TitleConfig,
    state: TitleState,
    generation: u64,
}

impl TitleValidator {
    pub fn new(config: TitleConfig) -> Self {
        Self {
            config,
            state: TitleState::Idle,
            generation: 0,
        }
    }

    /// Every blur bumps the generation, so a response to anything issued
    /// earlier is ignored by [`Self::apply`].
    pub fn on_blur(&mut self, value: &str) -> BlurOutcome {
        self.generation = self.generation.saturating_add(1);

        if value.is_empty() {
            self.state = TitleState::Idle;
            return BlurOutcome::Cleared;
        }

        self.state = TitleState::Pending;
        BlurOutcome::Validate(ValidationTicket {
            generation: self.generation,
            value: value.to_string(),
            filename: self.config.proposed_filename(value),
        })
    }

    /// Returns `false` when the response was stale and has been dropped.
    pub fn apply(
        &mut self,
        ticket: &ValidationTicket,
        response: ApiResult<crate::models::TitleValidation>,
    ) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "dropping stale title validation for {:?} (generation {} != {})",
                ticket.filename,
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.state = match response {
            Ok(v) if v.is_ok() => TitleState::Valid,
            Ok(v) => {
                log::debug!("title {:?} rejected: {}", ticket.filename, v.result);
                TitleState::Invalid {
                    message: v
                        .text
                        .filter(|t| !t.trim().is_empty())
                        .unwrap_or_else(|| GENERIC_REJECTION.to_string()),
                }
            }
            Err(e) => {
                log::warn!("title validation unavailable ({:?}): {e}", e.kind);
                TitleState::Unavailable {
                    reason: e.to_string(),
                }
            }
        };
        true
    }

    pub fn state(&self) -> &TitleState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == TitleState::Pending
    }

    /// Message handed to `setCustomValidity`; empty means submittable.
    pub fn custom_validity(&self) -> &str {
        match &self.state {
            TitleState::Invalid { message } => first_sentence(message),
            _ => "",
        }
    }

    /// Server-provided, HTML-safe explanation to show under the field.
    pub fn error_html(&self) -> Option<&str> {
        match &self.state {
            TitleState::Invalid { message } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self.state {
            TitleState::Unavailable { .. } => {
                Some("Couldn't check this title right now. It will be checked again when you leave the field.")
            }
            _ => None,
        }
    }
}
