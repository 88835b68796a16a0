use crate::error::{RegistryError, Result};

/// A subject name split into its context and base subject
///
/// Context-scoped subjects are encoded as `:<context>:<subject>`. Subjects
/// without a `:` live in the default context and carry no prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextSubject<'a> {
    pub context: Option<&'a str>,
    pub name: &'a str,
}

impl<'a> ContextSubject<'a> {
    /// Parse a raw subject name as returned by `GET /subjects`
    ///
    /// Anything containing `:` must have at least three colon-separated
    /// segments; the second one is the context.
    pub fn parse(raw: &'a str) -> Result<Self> {
        if !raw.contains(':') {
            return Ok(ContextSubject {
                context: None,
                name: raw,
            });
        }

        let mut parts = raw.splitn(3, ':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(_), Some(context), Some(name)) => Ok(ContextSubject {
                context: Some(context),
                name,
            }),
            _ => Err(RegistryError::MalformedSubject {
                subject: raw.to_string(),
            }),
        }
    }

    pub fn in_context(&self, context: &str) -> bool {
        self.context == Some(context)
    }
}

/// Keep the subjects that belong to `context`
///
/// Fails on the first malformed subject without returning any partial result.
/// Only exact context matches are kept; unprefixed subjects never match.
pub fn filter_by_context<S: AsRef<str>>(context: &str, subjects: &[S]) -> Result<Vec<String>> {
    let mut matched = Vec::new();
    for subject in subjects {
        let raw = subject.as_ref();
        if ContextSubject::parse(raw)?.in_context(context) {
            matched.push(raw.to_string());
        }
    }
    Ok(matched)
}

/// Escape a subject for use as a single path segment (`/` becomes `%2F`)
pub fn escape_path_segment(subject: &str) -> String {
    subject.replace('/', "%2F")
}
