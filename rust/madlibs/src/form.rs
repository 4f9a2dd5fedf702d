use crate::stories::{Field, FieldKind, Story};
use crate::MadLibsError;

/// Current content of one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub value: String,
    pub is_placeholder: bool,
}

/// Answers being collected for one story.
#[derive(Debug, Clone)]
pub struct Form {
    story: &'static Story,
    entries: Vec<Entry>,
}

impl Form {
    pub fn new(story: &'static Story) -> Self {
        let entries = story.fields.iter().map(initial_entry).collect();
        Self { story, entries }
    }

    pub fn story(&self) -> &'static Story {
        self.story
    }

    pub fn entry(&self, key: &str) -> Option<&Entry> {
        let idx = self.index_of(key).ok()?;
        self.entries.get(idx)
    }

    /// Store an answer. Blank input puts the field back to its placeholder.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), MadLibsError> {
        let idx = self.index_of(key)?;
        let field = &self.story.fields[idx];
        let value = value.trim();

        if value.is_empty() {
            self.entries[idx] = initial_entry(field);
            return Ok(());
        }
        if let FieldKind::Choice { options, .. } = &field.kind {
            if !options.iter().any(|o| *o == value) {
                return Err(MadLibsError::InvalidChoice {
                    field: field.label.to_string(),
                    value: value.to_string(),
                    options: options.join(", "),
                });
            }
        }
        self.entries[idx] = Entry {
            value: value.to_string(),
            is_placeholder: false,
        };
        Ok(())
    }

    /// The answer as the story will use it; placeholders read as empty.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entry(key).map(clean)
    }

    /// Labels of unanswered fields, in form order.
    pub fn missing(&self) -> Vec<String> {
        self.story
            .fields
            .iter()
            .zip(&self.entries)
            .filter(|(_, e)| clean(e).is_empty())
            .map(|(f, _)| f.label.to_string())
            .collect()
    }

    pub fn generate(&self) -> Result<String, MadLibsError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(MadLibsError::Missing(missing));
        }
        Ok(self.story.render(|key| self.value(key)))
    }

    pub fn reset(&mut self) {
        for (entry, field) in self.entries.iter_mut().zip(self.story.fields) {
            *entry = initial_entry(field);
        }
    }

    fn index_of(&self, key: &str) -> Result<usize, MadLibsError> {
        self.story
            .fields
            .iter()
            .position(|f| f.key == key)
            .ok_or_else(|| MadLibsError::UnknownField(key.to_string()))
    }
}

fn initial_entry(field: &Field) -> Entry {
    match &field.kind {
        FieldKind::Text => Entry {
            value: field.hint.to_string(),
            is_placeholder: true,
        },
        FieldKind::Choice { default, .. } => Entry {
            value: default.to_string(),
            is_placeholder: false,
        },
    }
}

fn clean(entry: &Entry) -> &str {
    if entry.is_placeholder {
        ""
    } else {
        entry.value.trim()
    }
}
