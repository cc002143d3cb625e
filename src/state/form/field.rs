//! Contact form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    /// Index into the field's option list; `None` until the user picks one
    Select(Option<usize>),
    Checkbox(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Outcome of the last validation run on a field.
///
/// The rendered error text and the error/success styling are both derived
/// from this one flag, so they cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Unvalidated,
    Valid,
    Invalid(&'static str),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Validity::Invalid(_))
    }

    /// Error message to display, if any
    pub fn error(&self) -> Option<&'static str> {
        match self {
            Validity::Invalid(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Represents a single form field with its value and validation state
#[derive(Debug, Clone)]
pub struct ContactField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
    pub validity: Validity,
    pub is_multiline: bool,
}

impl ContactField {
    /// Create a new text field
    pub fn text(name: &'static str, label: &'static str, is_multiline: bool) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Text(String::new()),
            validity: Validity::Unvalidated,
            is_multiline,
        }
    }

    /// Create a new select field with no option chosen
    pub fn select(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Select(None),
            validity: Validity::Unvalidated,
            is_multiline: false,
        }
    }

    /// Create a new checkbox field
    pub fn checkbox(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Checkbox(false),
            validity: Validity::Unvalidated,
            is_multiline: false,
        }
    }

    /// Get the text value (empty string for non-text fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Get the chosen option index (None for non-select fields)
    pub fn selected(&self) -> Option<usize> {
        match self.value {
            FieldValue::Select(idx) => idx,
            _ => None,
        }
    }

    /// Get the checkbox state (false for non-checkbox fields)
    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Checkbox(true))
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Append pasted text; control characters are stripped for
    /// single-line fields, newlines survive in multiline ones.
    pub fn push_str(&mut self, text: &str) {
        let multiline = self.is_multiline;
        if let FieldValue::Text(s) = &mut self.value {
            for c in text.chars() {
                if !c.is_control() || (multiline && c == '\n') {
                    s.push(c);
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Toggle the checkbox state
    pub fn toggle(&mut self) {
        if let FieldValue::Checkbox(checked) = &mut self.value {
            *checked = !*checked;
        }
    }

    /// Move the selection to the next option (wraps around)
    pub fn select_next(&mut self, option_count: usize) {
        if option_count == 0 {
            return;
        }
        if let FieldValue::Select(idx) = &mut self.value {
            *idx = Some(match idx {
                Some(i) => (*i + 1) % option_count,
                None => 0,
            });
        }
    }

    /// Move the selection to the previous option (wraps around)
    pub fn select_prev(&mut self, option_count: usize) {
        if option_count == 0 {
            return;
        }
        if let FieldValue::Select(idx) = &mut self.value {
            *idx = Some(match idx {
                Some(0) | None => option_count - 1,
                Some(i) => *i - 1,
            });
        }
    }

    /// Reset the field to its pristine state
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Select(idx) => *idx = None,
            FieldValue::Checkbox(checked) => *checked = false,
        }
        self.validity = Validity::Unvalidated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod validity {
        use super::*;

        #[test]
        fn test_default_is_unvalidated() {
            let validity = Validity::default();
            assert_eq!(validity, Validity::Unvalidated);
            assert!(!validity.is_valid());
            assert!(!validity.is_invalid());
            assert!(validity.error().is_none());
        }

        #[test]
        fn test_invalid_carries_message() {
            let validity = Validity::Invalid("nope");
            assert!(validity.is_invalid());
            assert_eq!(validity.error(), Some("nope"));
        }

        #[test]
        fn test_valid_has_no_error() {
            let validity = Validity::Valid;
            assert!(validity.is_valid());
            assert!(validity.error().is_none());
        }
    }

    mod text_field {
        use super::*;

        #[test]
        fn test_push_and_pop() {
            let mut field = ContactField::text("fullname", "Full Name", false);
            field.push_char('A');
            field.push_char('l');
            assert_eq!(field.as_text(), "Al");
            field.pop_char();
            assert_eq!(field.as_text(), "A");
        }

        #[test]
        fn test_push_str_strips_control_chars_single_line() {
            let mut field = ContactField::text("email", "Email", false);
            field.push_str("a@\nb.com\t");
            assert_eq!(field.as_text(), "a@b.com");
        }

        #[test]
        fn test_push_str_keeps_newlines_in_multiline() {
            let mut field = ContactField::text("message", "Message", true);
            field.push_str("hello\nworld");
            assert_eq!(field.as_text(), "hello\nworld");
        }

        #[test]
        fn test_clear_resets_value_and_validity() {
            let mut field = ContactField::text("fullname", "Full Name", false);
            field.push_char('x');
            field.validity = Validity::Invalid("bad");
            field.clear();
            assert_eq!(field.as_text(), "");
            assert_eq!(field.validity, Validity::Unvalidated);
        }

        #[test]
        fn test_toggle_is_noop_for_text() {
            let mut field = ContactField::text("fullname", "Full Name", false);
            field.toggle();
            assert_eq!(field.value, FieldValue::Text(String::new()));
        }
    }

    mod select_field {
        use super::*;

        #[test]
        fn test_starts_unselected() {
            let field = ContactField::select("role", "I am a");
            assert_eq!(field.selected(), None);
        }

        #[test]
        fn test_select_next_from_empty_picks_first() {
            let mut field = ContactField::select("role", "I am a");
            field.select_next(4);
            assert_eq!(field.selected(), Some(0));
        }

        #[test]
        fn test_select_next_wraps() {
            let mut field = ContactField::select("role", "I am a");
            field.value = FieldValue::Select(Some(3));
            field.select_next(4);
            assert_eq!(field.selected(), Some(0));
        }

        #[test]
        fn test_select_prev_from_empty_picks_last() {
            let mut field = ContactField::select("role", "I am a");
            field.select_prev(4);
            assert_eq!(field.selected(), Some(3));
        }

        #[test]
        fn test_select_prev_wraps() {
            let mut field = ContactField::select("role", "I am a");
            field.value = FieldValue::Select(Some(0));
            field.select_prev(4);
            assert_eq!(field.selected(), Some(3));
        }

        #[test]
        fn test_select_with_zero_options_is_noop() {
            let mut field = ContactField::select("role", "I am a");
            field.select_next(0);
            assert_eq!(field.selected(), None);
        }

        #[test]
        fn test_push_char_is_noop_for_select() {
            let mut field = ContactField::select("role", "I am a");
            field.push_char('x');
            assert_eq!(field.value, FieldValue::Select(None));
        }
    }

    mod checkbox_field {
        use super::*;

        #[test]
        fn test_starts_unchecked() {
            let field = ContactField::checkbox("consent", "I agree");
            assert!(!field.is_checked());
        }

        #[test]
        fn test_toggle_flips_state() {
            let mut field = ContactField::checkbox("consent", "I agree");
            field.toggle();
            assert!(field.is_checked());
            field.toggle();
            assert!(!field.is_checked());
        }

        #[test]
        fn test_clear_unchecks() {
            let mut field = ContactField::checkbox("consent", "I agree");
            field.toggle();
            field.validity = Validity::Valid;
            field.clear();
            assert!(!field.is_checked());
            assert_eq!(field.validity, Validity::Unvalidated);
        }
    }
}
