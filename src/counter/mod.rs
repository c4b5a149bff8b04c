use crate::util::utf16_len;

/// Declared acceptable length of a text field, in UTF-16 code units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FieldLimits {
    pub min: usize,
    pub max: usize,
}

impl FieldLimits {
    /// Commons file titles; the real limit is 240 bytes, this is the loose one.
    pub const TITLE: Self = Self { min: 5, max: 240 };

    /// Short captions, matching the Upload Wizard.
    pub const SHORT_CAPTION: Self = Self { min: 5, max: 250 };

    pub fn contains(&self, entered: usize) -> bool {
        self.min <= entered && entered <= self.max
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) enum CounterTone {
    #[default]
    Neutral,
    /// Too short or too long.
    Warning,
}

pub(crate) fn counter_message(entered: usize, limits: FieldLimits) -> String {
    let FieldLimits { min, max } = limits;

    if entered == 0 {
        String::new()
    } else if entered < min {
        match min - entered {
            1 => "1 more character required".to_string(),
            n => format!("{n} more characters required"),
        }
    } else if entered <= max {
        match max - entered {
            0 => "No characters left".to_string(),
            1 => "1 character left".to_string(),
            n => format!("{n} characters left"),
        }
    } else {
        match entered - max {
            1 => "1 character too many".to_string(),
            n => format!("{n} characters too many"),
        }
    }
}

/// Live "characters remaining" status under a text field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CharacterCounter {
    limits: FieldLimits,
    message: String,
    tone: CounterTone,
}

impl CharacterCounter {
    pub fn new(limits: FieldLimits) -> Self {
        Self {
            limits,
            message: String::new(),
            tone: CounterTone::Neutral,
        }
    }

    fn recompute(&mut self, value: &str) {
        let entered = utf16_len(value);
        self.message = counter_message(entered, self.limits);
        self.tone = if entered == 0 || self.limits.contains(entered) {
            CounterTone::Neutral
        } else {
            CounterTone::Warning
        };
    }

    pub fn on_input(&mut self, value: &str) {
        self.recompute(value);
    }

    pub fn on_focus(&mut self, value: &str) {
        self.recompute(value);
    }

    /// Once the field is an acceptable length, stop showing a count.
    pub fn on_blur(&mut self, value: &str) {
        self.recompute(value);
        if self.limits.contains(utf16_len(value)) {
            self.message.clear();
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tone(&self) -> CounterTone {
        self.tone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: FieldLimits = FieldLimits { min: 5, max: 240 };

    #[test]
    fn test_counter_message_empty() {
        assert_eq!(counter_message(0, LIMITS), "");
    }

    #[test]
    fn test_counter_message_below_min() {
        assert_eq!(counter_message(1, LIMITS), "4 more characters required");
        assert_eq!(counter_message(3, LIMITS), "2 more characters required");
        assert_eq!(counter_message(4, LIMITS), "1 more character required");
    }

    #[test]
    fn test_counter_message_within_limits() {
        assert_eq!(counter_message(5, LIMITS), "235 characters left");
        assert_eq!(counter_message(238, LIMITS), "2 characters left");
        assert_eq!(counter_message(239, LIMITS), "1 character left");
        assert_eq!(counter_message(240, LIMITS), "No characters left");
    }

    #[test]
    fn test_counter_message_over_max() {
        assert_eq!(counter_message(241, LIMITS), "1 character too many");
        assert_eq!(counter_message(242, LIMITS), "2 characters too many");
        assert_eq!(counter_message(300, LIMITS), "60 characters too many");
    }

    #[test]
    fn test_counter_blur_clears_when_acceptable() {
        let mut c = CharacterCounter::new(LIMITS);
        c.on_input("Tower Bridge");
        assert_eq!(c.message(), "228 characters left");

        c.on_blur("Tower Bridge");
        assert_eq!(c.message(), "");
        assert_eq!(c.tone(), CounterTone::Neutral);
    }

    #[test]
    fn test_counter_blur_keeps_under_and_over_messages() {
        let mut c = CharacterCounter::new(LIMITS);
        c.on_blur("Foo");
        assert_eq!(c.message(), "2 more characters required");
        assert_eq!(c.tone(), CounterTone::Warning);

        let long = "a".repeat(241);
        c.on_blur(&long);
        assert_eq!(c.message(), "1 character too many");
        assert_eq!(c.tone(), CounterTone::Warning);
    }

    #[test]
    fn test_counter_focus_shows_count_again() {
        let mut c = CharacterCounter::new(FieldLimits::SHORT_CAPTION);
        c.on_blur("A fine caption");
        assert_eq!(c.message(), "");

        c.on_focus("A fine caption");
        assert_eq!(c.message(), "236 characters left");
    }

    #[test]
    fn test_counter_measures_utf16() {
        let mut c = CharacterCounter::new(FieldLimits { min: 1, max: 4 });
        c.on_input("🌉🌉");
        assert_eq!(c.message(), "No characters left");
    }
}
