use serde::Serialize;

use crate::MadLibsError;

/// What a field accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    /// Free text; starts out showing the placeholder hint.
    Text,
    /// One of a fixed list; starts out at `default`.
    Choice {
        options: &'static [&'static str],
        default: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Name used in the template as `{key}`.
    pub key: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
    pub kind: FieldKind,
}

impl Field {
    const fn text(key: &'static str, label: &'static str, hint: &'static str) -> Self {
        Self {
            key,
            label,
            hint,
            kind: FieldKind::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Story {
    pub id: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub fields: &'static [Field],
    pub template: &'static str,
}

impl Story {
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Substitute every `{key}` with `lookup(key)`. Unknown keys stay as
    /// written.
    pub(crate) fn render<'a>(&self, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
        let mut out = String::with_capacity(self.template.len() + 64);
        let mut rest = self.template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let key = &after[..close];
                    match lookup(key) {
                        Some(v) => out.push_str(v),
                        None => {
                            out.push('{');
                            out.push_str(key);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

const VERBS: &[&str] = &[
    "struggled",
    "worked",
    "learned",
    "failed",
    "improved",
    "paused",
    "restarted",
];

static MEMORABLE_DAY: Story = Story {
    id: "memorable-day",
    title: "A Memorable Day",
    blurb: "A fun story about a match day with your friend and favourite player.",
    fields: &[
        Field::text("name", "Friend's name", "e.g., Riya"),
        Field::text("sport", "Game/Sport", "e.g., Cricket"),
        Field::text("city", "City", "e.g., Hyderabad"),
        Field::text("player", "Favorite player", "e.g., Dhoni"),
        Field::text("drink", "Drink", "e.g., Lemon soda"),
        Field::text("snack", "Snack", "e.g., Popcorn"),
    ],
    template: "One day, me and my friend {name} decided to play a {sport} game in {city}. \
But we were not able to play, so we went to watch the game and our favourite player {player}. \
We drank {drink} and also ate some {snack}. \
We really enjoyed it! We are looking forward to going again and enjoying it!",
};

static AMBITIONS: Story = Story {
    id: "ambitions",
    title: "Ambitions",
    blurb: "A motivational (and slightly dramatic) story about dreams and careers.",
    fields: &[
        Field::text("profession", "Profession", "e.g., Doctor"),
        Field::text("noun", "Noun", "e.g., Music"),
        Field::text("feeling", "Feeling", "e.g., Happy"),
        Field::text("emotion", "Emotion", "e.g., Inspired"),
        Field {
            key: "verb",
            label: "Verb",
            hint: "past tense",
            kind: FieldKind::Choice {
                options: VERBS,
                default: "struggled",
            },
        },
    ],
    template: "When I was a child, I wanted to become a {profession}. \
But as I grew up, I got into {noun} and decided to become an engineer. \
Then I went into a job where I was not {feeling}. \
After feeling {emotion}, I decided to do what I truly love. \
Despite getting lower and {verb} more than I used to in my previous job, \
I feel {feeling} now.",
};

pub fn catalogue() -> [&'static Story; 2] {
    [&MEMORABLE_DAY, &AMBITIONS]
}

pub fn story(id: &str) -> Result<&'static Story, MadLibsError> {
    catalogue()
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| MadLibsError::UnknownStory(id.to_string()))
}
