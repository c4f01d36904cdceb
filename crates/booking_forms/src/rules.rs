// --- File: crates/booking_forms/src/rules.rs ---
//! A tiny rule engine: every field owns an ordered list of [`Rule`]s and the
//! first one that fails decides the field's error message.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::luhn::strip_separators;

/// The value of one form field as seen by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
}

/// One validation constraint and the message shown when it fails.
#[derive(Clone)]
pub enum Rule {
    /// Text must be non-empty. Always satisfied by a flag.
    Required { message: &'static str },
    /// Text must match the whole pattern (anchor it with `^...$`).
    Pattern {
        regex: &'static Regex,
        message: &'static str,
    },
    /// Length of the text after removing spaces and dashes, inclusive bounds.
    Range {
        min: usize,
        max: usize,
        message: &'static str,
    },
    /// Arbitrary predicate over the text (e.g. the Luhn checksum).
    Check {
        check: fn(&str) -> bool,
        message: &'static str,
    },
    /// Flag must be set.
    MustAccept { message: &'static str },
}

impl Rule {
    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required { message }
            | Rule::Pattern { message, .. }
            | Rule::Range { message, .. }
            | Rule::Check { message, .. }
            | Rule::MustAccept { message } => *message,
        }
    }

    /// Whether `value` satisfies this rule.
    ///
    /// Text rules fail on a flag and `MustAccept` fails on text.
    pub fn passes(&self, value: FieldValue<'_>) -> bool {
        match (self, value) {
            (Rule::Required { .. }, FieldValue::Text(text)) => !text.is_empty(),
            (Rule::Required { .. }, FieldValue::Flag(_)) => true,
            (Rule::Pattern { regex, .. }, FieldValue::Text(text)) => regex.is_match(text),
            (Rule::Range { min, max, .. }, FieldValue::Text(text)) => {
                let len = strip_separators(text).chars().count();
                (*min..=*max).contains(&len)
            }
            (Rule::Check { check, .. }, FieldValue::Text(text)) => check(text),
            (Rule::MustAccept { .. }, FieldValue::Flag(accepted)) => accepted,
            _ => false,
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required { message } => f.debug_tuple("Required").field(message).finish(),
            Rule::Pattern { regex, message } => f
                .debug_tuple("Pattern")
                .field(&regex.as_str())
                .field(message)
                .finish(),
            Rule::Range { min, max, message } => f
                .debug_tuple("Range")
                .field(min)
                .field(max)
                .field(message)
                .finish(),
            Rule::Check { message, .. } => f.debug_tuple("Check").field(message).finish(),
            Rule::MustAccept { message } => f.debug_tuple("MustAccept").field(message).finish(),
        }
    }
}

/// Runs `rules` in order and returns the message of the first failing one.
pub fn first_failure(value: FieldValue<'_>, rules: &[Rule]) -> Option<&'static str> {
    rules
        .iter()
        .find(|rule| !rule.passes(value))
        .map(Rule::message)
}

/// Error attached to a single field after a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub message: String,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Field errors of one validation pass, ordered like the form's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors<F: Ord> {
    errors: BTreeMap<F, FieldError>,
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: F, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn remove(&mut self, field: F) -> Option<FieldError> {
        self.errors.remove(&field)
    }

    pub fn get(&self, field: F) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn contains(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    pub fn messages(&self) -> Vec<&str> {
        self.errors.values().map(|e| e.message.as_str()).collect()
    }
}

impl<F: Ord + Copy + fmt::Display> fmt::Display for FieldErrors<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, error.message)?;
            first = false;
        }
        Ok(())
    }
}
