use api::{Note, NoteInput};
use thiserror::Error;

/// Longest title the inputs accept, in characters.
pub const TITLE_MAX_CHARS: usize = 200;

pub const INCOMPLETE_FORM: &str = "Please fill in both title and content";

/// Message for a blocking alert: a rejected or failed mutation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The `{title, content}` pair behind both the create and the edit form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
}

impl NoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }

    /// Store a typed title, dropping anything past [`TITLE_MAX_CHARS`].
    pub fn set_title(&mut self, value: &str) {
        self.title = value.chars().take(TITLE_MAX_CHARS).collect();
    }

    pub fn set_content(&mut self, value: &str) {
        self.content = value.to_string();
    }

    /// Both fields have something other than whitespace.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The request body for this form, or the alert to show instead.
    ///
    /// Values are sent as typed; trimming only decides completeness.
    pub fn to_input(&self) -> Result<NoteInput, Notice> {
        if !self.is_complete() {
            return Err(Notice::new(INCOMPLETE_FORM));
        }
        Ok(NoteInput {
            title: self.title.clone(),
            content: self.content.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_capped_at_limit() {
        let mut form = NoteForm::new();
        form.set_title(&"a".repeat(250));
        assert_eq!(form.title.chars().count(), TITLE_MAX_CHARS);

        form.set_title("short");
        assert_eq!(form.title, "short");
    }

    #[test]
    fn test_title_cap_counts_characters() {
        let mut form = NoteForm::new();
        form.set_title(&"é".repeat(201));
        assert_eq!(form.title.chars().count(), 200);
        assert_eq!(form.title.len(), 400);
    }

    #[test]
    fn test_blank_fields_rejected() {
        let cases = [("", "body"), ("title", ""), ("   ", "body"), ("title", "\n\t "), ("", "")];
        for (title, content) in cases {
            let form = NoteForm {
                title: title.to_string(),
                content: content.to_string(),
            };
            assert!(!form.is_complete(), "{title:?} / {content:?}");
            assert_eq!(form.to_input(), Err(Notice::new(INCOMPLETE_FORM)));
        }
    }

    #[test]
    fn test_input_keeps_untrimmed_values() {
        let form = NoteForm {
            title: "  Hi ".to_string(),
            content: "Body\n".to_string(),
        };
        let input = form.to_input().unwrap();
        assert_eq!(input.title, "  Hi ");
        assert_eq!(input.content, "Body\n");
    }

    #[test]
    fn test_clear_resets_both_fields() {
        let mut form = NoteForm {
            title: "t".to_string(),
            content: "c".to_string(),
        };
        form.clear();
        assert_eq!(form, NoteForm::default());
    }
}
