use std::sync::atomic::{AtomicUsize, Ordering};

const PREFIX: &str = "upload_form"; // Must NOT contain "-"; ids are joined with it.

static COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Page-unique DOM id, e.g. `suggestions-upload_form_3`.
pub fn use_field_id(element: &str) -> String {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{element}-{PREFIX}_{n}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_field_id_is_unique_and_prefixed() {
        let a = use_field_id("suggestions");
        let b = use_field_id("suggestions");
        assert_ne!(a, b);
        assert!(a.starts_with("suggestions-upload_form_"));
    }
}
