use std::borrow::Cow;

/// Content-integrity and output errors of the landing slice.
#[derive(Debug, thiserror::Error)]
pub enum LandingError {
    /// A `href="#…"` points at an id that is not on the page.
    #[error("Dangling anchor{}: #{target} has no matching id", format_context(.context))]
    DanglingAnchor { target: String, context: Option<Cow<'static, str>> },

    /// The same element id is rendered more than once.
    #[error("Duplicate id{}: {id}", format_context(.context))]
    DuplicateId { id: String, context: Option<Cow<'static, str>> },

    /// The content tables break one of their invariants.
    #[error("Content integrity violation{}: {message}", format_context(.context))]
    ContentIntegrity { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A CSS selector used to inspect markup failed to parse.
    #[error("Invalid selector{}: {message}", format_context(.context))]
    Selector { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

impl From<std::io::Error> for LandingError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source, context: None }
    }
}

/// Attaches a human-readable context to a failed I/O operation.
pub trait LandingErrorExt<T> {
    /// # Errors
    /// Returns the wrapped error with the given context attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, LandingError>;
}

impl<T> LandingErrorExt<T> for Result<T, std::io::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, LandingError> {
        self.map_err(|source| LandingError::Io { source, context: Some(context.into()) })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
