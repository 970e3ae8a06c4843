//! Sign-in screen content.
//!
//! The sign-in page is built from markup supplied outside the plugin. The
//! worker reads the file; this module turns whatever arrives into sanitized
//! text lines and tracks where the screen is in that process.

mod sanitize;

pub use sanitize::sanitize_markup;

/// Shown when the sign-in markup cannot be read.
pub const FAILED_MESSAGE: &str = "Failed to load sign-in screen.";

/// Markup used when no `signin_file` is configured.
pub const DEFAULT_SIGN_IN_MARKUP: &str = r#"
<div class="signin">
  <h2>Sign in</h2>
  <p>Use your Recipe Explorer account.</p>
  <form>
    <label>Email</label>
    <input type="email" name="email" placeholder="you@example.com">
    <label>Password</label>
    <input type="password" name="password" placeholder="Password">
    <button type="submit">Sign In</button>
  </form>
  <p>Forgot password? | Create account</p>
</div>
"#;

/// Loading state of the sign-in screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SignInContent {
    #[default]
    NotRequested,
    Loading,
    Ready(Vec<String>),
    Failed,
}

impl SignInContent {
    /// Content for markup that has already been read.
    #[must_use]
    pub fn from_markup(markup: &str) -> Self {
        let lines = sanitize_markup(markup);
        tracing::debug!(line_count = lines.len(), "sign-in markup sanitized");
        Self::Ready(lines)
    }

    /// Built-in sign-in form.
    #[must_use]
    pub fn fallback() -> Self {
        Self::from_markup(DEFAULT_SIGN_IN_MARKUP)
    }

    /// Lines to draw for the current state.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::NotRequested => Vec::new(),
            Self::Loading => vec!["Loading sign-in screen...".to_string()],
            Self::Ready(lines) => lines.clone(),
            Self::Failed => vec![FAILED_MESSAGE.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_form_renders_fields() {
        let lines = SignInContent::fallback().lines();
        assert_eq!(lines[0], "Sign in");
        assert!(lines.contains(&"[ you@example.com ]".to_string()));
        assert!(lines.contains(&"[ Sign In ]".to_string()));
    }

    #[test]
    fn failure_shows_fixed_message() {
        assert_eq!(SignInContent::Failed.lines(), [FAILED_MESSAGE]);
    }
}
