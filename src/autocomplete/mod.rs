//! Suggestion menu for the category entry field.
//!
//! At most one session is open at a time. Every [`AutocompleteEngine::open`]
//! starts a new generation; lookup responses carry the generation they were
//! issued for and are dropped if the session has moved on.

use crate::api::ApiResult;
use crate::categories::{CategoryList, EntryId};

/// A lookup the view must send for the session it just opened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LookupTicket {
    pub generation: u64,
    pub query: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Session {
    generation: u64,
    query: String,
    suggestions: Vec<String>,
    /// `None` means no row is highlighted.
    focused: Option<usize>,
    loading: bool,
}

impl Session {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum KeyOutcome {
    /// Not ours; let the browser handle it.
    Ignored,
    Navigated,
    Closed,
    Committed(EntryId),
}

#[derive(Clone, Debug, Default)]
pub(crate) struct AutocompleteEngine {
    session: Option<Session>,
    generation: u64,
}

impl AutocompleteEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closes the current session and, for a non-empty query, opens a new
    /// one in the loading state.
    pub fn open(&mut self, query: &str) -> Option<LookupTicket> {
        self.close();

        if query.trim().is_empty() {
            return None;
        }

        self.generation = self.generation.saturating_add(1);
        self.session = Some(Session {
            generation: self.generation,
            query: query.to_string(),
            suggestions: vec![],
            focused: None,
            loading: true,
        });

        Some(LookupTicket {
            generation: self.generation,
            query: query.to_string(),
        })
    }

    /// Returns `false` if the response belongs to a session that is no
    /// longer open.
    pub fn apply_suggestions(
        &mut self,
        ticket: &LookupTicket,
        response: ApiResult<Vec<String>>,
    ) -> bool {
        let Some(session) = self
            .session
            .as_mut()
            .filter(|s| s.generation == ticket.generation)
        else {
            log::debug!(
                "dropping stale category suggestions for {:?} (generation {})",
                ticket.query,
                ticket.generation
            );
            return false;
        };

        session.loading = false;
        session.focused = None;
        session.suggestions = match response {
            Ok(suggestions) => suggestions,
            Err(e) => {
                log::warn!("category lookup for {:?} failed ({:?}): {e}", ticket.query, e.kind);
                vec![]
            }
        };
        true
    }

    pub fn close(&mut self) {
        self.session = None;
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.loading)
    }

    pub fn focused(&self) -> Option<usize> {
        self.session.as_ref().and_then(|s| s.focused)
    }

    /// Cursor stays within `[none, last]`.
    pub fn move_down(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let len = session.suggestions.len();
        if len == 0 {
            return false;
        }
        session.focused = Some(match session.focused {
            None => 0,
            Some(i) => (i + 1).min(len - 1),
        });
        true
    }

    /// Moving up from the first row returns to no highlight.
    pub fn move_up(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.suggestions.is_empty() {
            return false;
        }
        session.focused = match session.focused {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
        true
    }

    /// Adds the suggestion at `index` to `list` and closes the session,
    /// even when `index` does not name a suggestion.
    pub fn commit_suggestion(&mut self, index: usize, list: &mut CategoryList) -> Option<EntryId> {
        let chosen = self
            .session
            .as_ref()
            .and_then(|s| s.suggestions.get(index).cloned());
        self.close();
        list.add(&chosen?)
    }

    pub fn commit_focused(&mut self, list: &mut CategoryList) -> Option<EntryId> {
        let index = self.focused()?;
        self.commit_suggestion(index, list)
    }

    pub fn handle_key(&mut self, key: &str, list: &mut CategoryList) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }

        match key {
            "ArrowDown" => {
                if self.move_down() {
                    KeyOutcome::Navigated
                } else {
                    KeyOutcome::Ignored
                }
            }
            "ArrowUp" => {
                if self.move_up() {
                    KeyOutcome::Navigated
                } else {
                    KeyOutcome::Ignored
                }
            }
            "Escape" => {
                self.close();
                KeyOutcome::Closed
            }
            "Enter" if self.focused().is_some() => match self.commit_focused(list) {
                Some(id) => KeyOutcome::Committed(id),
                None => KeyOutcome::Closed,
            },
            _ => KeyOutcome::Ignored,
        }
    }
}
