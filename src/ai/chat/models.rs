//! The core models for a tutoring conversation.
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "tutor")]
    Tutor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Role::User => write!(f, "You"),
            Role::Tutor => write!(f, "Tutor"),
        }
    }
}

/// One message in the transcript. Fields are private so a turn can't
/// be changed after it is created.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Turn {
    role: Role,
    text: String,
    created_at: DateTime<Utc>,
}

impl Turn {
    pub fn new(role: Role, text: &str) -> Self {
        Self {
            role,
            text: text.to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn user(text: &str) -> Self {
        Self::new(Role::User, text)
    }

    pub fn tutor(text: &str) -> Self {
        Self::new(Role::Tutor, text)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Append-only list of turns. There is no way to remove or reorder a
/// turn once it has been pushed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript(Vec<Turn>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, turn: Turn) {
        self.0.push(turn)
    }

    pub fn turns(&self) -> &[Turn] {
        &self.0
    }

    pub fn last(&self) -> Option<&Turn> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.0.iter()
    }

    pub fn view(&self) -> View<'_> {
        View(&self.0)
    }
}

/// Read-only view over a transcript for display. Each call to `iter`
/// starts again from the first turn.
#[derive(Clone, Copy, Debug)]
pub struct View<'a>(&'a [Turn]);

impl<'a> View<'a> {
    pub fn empty() -> Self {
        View(&[])
    }

    pub fn iter(self) -> impl Iterator<Item = (Role, &'a str)> + Clone + 'a {
        self.0.iter().map(|t| (t.role, t.text.as_str()))
    }

    pub fn turns(&self) -> &'a [Turn] {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for View<'a> {
    type Item = (Role, &'a str);
    type IntoIter = std::iter::Map<std::slice::Iter<'a, Turn>, fn(&'a Turn) -> (Role, &'a str)>;

    fn into_iter(self) -> Self::IntoIter {
        fn pair(t: &Turn) -> (Role, &str) {
            (t.role, t.text.as_str())
        }
        self.0.iter().map(pair as fn(&'a Turn) -> (Role, &'a str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Role::Tutor).unwrap(), r#""tutor""#);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::User.to_string(), "You");
        assert_eq!(Role::Tutor.to_string(), "Tutor");
    }

    #[test]
    fn test_transcript_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push(Turn::tutor("hello"));
        transcript.push(Turn::user("hi"));
        transcript.push(Turn::tutor("which topic?"));

        let roles: Vec<Role> = transcript.iter().map(Turn::role).collect();
        assert_eq!(roles, vec![Role::Tutor, Role::User, Role::Tutor]);
        assert_eq!(transcript.last().unwrap().text(), "which topic?");
    }

    #[test]
    fn test_view_is_restartable() {
        let mut transcript = Transcript::new();
        transcript.push(Turn::tutor("hello"));
        transcript.push(Turn::user("hi"));

        let view = transcript.view();
        let first: Vec<_> = view.iter().collect();
        let second: Vec<_> = view.into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![(Role::Tutor, "hello"), (Role::User, "hi")]);
    }

    #[test]
    fn test_empty_view() {
        assert!(View::empty().is_empty());
        assert_eq!(View::empty().iter().count(), 0);
    }
}
