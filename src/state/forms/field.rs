//! Form field value objects

/// Identifies one of the validated text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Feedback,
    Name,
    Email,
}

impl FieldKey {
    pub const ALL: [FieldKey; 3] = [FieldKey::Feedback, FieldKey::Name, FieldKey::Email];

    pub fn label(self) -> &'static str {
        match self {
            Self::Feedback => "Feedback",
            Self::Name => "Name",
            Self::Email => "Email",
        }
    }
}

/// Represents a single text field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub key: FieldKey,
    pub label: String,
    pub value: String,
    pub is_multiline: bool,
    /// Set once the user has left the field; gates inline error display
    pub touched: bool,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(key: FieldKey, label: &str, is_multiline: bool) -> Self {
        Self {
            key,
            label: label.to_string(),
            value: String::new(),
            is_multiline,
            touched: false,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Set the text value
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if c == '\n' && !self.is_multiline {
            return;
        }
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn touch(&mut self) {
        self.touched = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop() {
        let mut field = FormField::text(FieldKey::Name, "Name", false);
        field.push_char('a');
        field.push_char('b');
        field.pop_char();
        assert_eq!(field.as_text(), "a");
    }

    #[test]
    fn test_single_line_ignores_newline() {
        let mut field = FormField::text(FieldKey::Email, "Email", false);
        field.push_char('\n');
        assert_eq!(field.as_text(), "");

        let mut multi = FormField::text(FieldKey::Feedback, "Feedback", true);
        multi.push_char('\n');
        assert_eq!(multi.as_text(), "\n");
    }

    #[test]
    fn test_is_blank_uses_trimmed_value() {
        let mut field = FormField::text(FieldKey::Name, "Name", false);
        field.set_text("   ");
        assert!(field.is_blank());
        field.set_text(" Acme ");
        assert_eq!(field.trimmed(), "Acme");
    }
}
