//! Turns command-line tokens into a complete [ResolutionRequest]
//!
//! Anything missing is asked for through a [Prompter], so the resolver itself
//! never blocks on input.

use crate::domain::{BumpKind, Version};
use crate::error::{ReleaseError, Result};
use crate::resolver::ResolutionRequest;
use crate::ui::Prompter;

/// Interpret the first positional argument
///
/// A bump keyword selects that kind; a valid version string means `custom`
/// with that explicit version.
pub fn interpret_kind_token(token: &str) -> Result<(BumpKind, Option<String>)> {
    if let Ok(kind) = token.parse::<BumpKind>() {
        return Ok((kind, None));
    }
    if Version::is_valid(token) {
        return Ok((BumpKind::Custom, Some(token.to_string())));
    }
    Err(ReleaseError::UnknownBumpKind(token.to_string()))
}

/// Build a fully populated request
///
/// # Arguments
/// * `current` - Version currently in the manifest
/// * `kind_token` - First positional argument, if any
/// * `extra_token` - Second positional argument: the prerelease tag for
///   `prerelease`, or the explicit version for `custom`
/// * `prompter` - Asked for the kind, tag or version when not supplied
pub fn complete_request(
    current: Version,
    kind_token: Option<&str>,
    extra_token: Option<&str>,
    prompter: &mut dyn Prompter,
) -> Result<ResolutionRequest> {
    let (kind, explicit) = match kind_token {
        Some(token) => interpret_kind_token(token)?,
        None => (prompter.select_bump_kind(&current)?, None),
    };

    let mut request = ResolutionRequest::new(current, kind);

    match kind {
        BumpKind::PreRelease => {
            let tag = match extra_token {
                Some(tag) => tag.to_string(),
                None => prompter.select_prerelease_tag()?,
            };
            request = request.with_prerelease_tag(tag);
        }
        BumpKind::Custom => {
            let version = match explicit.or_else(|| extra_token.map(str::to_string)) {
                Some(version) => version,
                None => prompter.input_custom_version()?,
            };
            request = request.with_explicit_version(version);
        }
        _ => {}
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Prompter that fails the test if it is consulted
    struct NoPrompts;

    impl Prompter for NoPrompts {
        fn select_bump_kind(&mut self, _current: &Version) -> Result<BumpKind> {
            panic!("unexpected bump kind prompt")
        }
        fn select_prerelease_tag(&mut self) -> Result<String> {
            panic!("unexpected prerelease tag prompt")
        }
        fn input_custom_version(&mut self) -> Result<String> {
            panic!("unexpected custom version prompt")
        }
        fn confirm(&mut self, _prompt: &str) -> Result<bool> {
            panic!("unexpected confirmation prompt")
        }
    }

    #[derive(Default)]
    struct Answers {
        kind: Option<BumpKind>,
        tag: Option<String>,
        version: Option<String>,
        asked: Vec<&'static str>,
    }

    impl Prompter for Answers {
        fn select_bump_kind(&mut self, _current: &Version) -> Result<BumpKind> {
            self.asked.push("kind");
            self.kind.ok_or_else(|| ReleaseError::prompt("no kind"))
        }
        fn select_prerelease_tag(&mut self) -> Result<String> {
            self.asked.push("tag");
            self.tag.clone().ok_or_else(|| ReleaseError::prompt("no tag"))
        }
        fn input_custom_version(&mut self) -> Result<String> {
            self.asked.push("version");
            self.version.clone().ok_or_else(|| ReleaseError::prompt("no version"))
        }
        fn confirm(&mut self, _prompt: &str) -> Result<bool> {
            Ok(false)
        }
    }

    fn current() -> Version {
        Version::parse("1.2.3").unwrap()
    }

    #[test]
    fn test_keyword_token() {
        let request = complete_request(current(), Some("minor"), None, &mut NoPrompts).unwrap();
        assert_eq!(request.kind, BumpKind::Minor);
        assert_eq!(request.prerelease_tag, None);
    }

    #[test]
    fn test_version_token_is_custom() {
        let request =
            complete_request(current(), Some("2.0.0-rc.1"), None, &mut NoPrompts).unwrap();
        assert_eq!(request.kind, BumpKind::Custom);
        assert_eq!(request.explicit_version.as_deref(), Some("2.0.0-rc.1"));
    }

    #[test]
    fn test_unknown_token() {
        let err = complete_request(current(), Some("1.2"), None, &mut NoPrompts).unwrap_err();
        assert!(matches!(err, ReleaseError::UnknownBumpKind(ref t) if t == "1.2"));
    }

    #[test]
    fn test_prerelease_with_tag_argument() {
        let request =
            complete_request(current(), Some("prerelease"), Some("beta"), &mut NoPrompts)
                .unwrap();
        assert_eq!(request.prerelease_tag.as_deref(), Some("beta"));
    }

    #[test]
    fn test_prerelease_prompts_for_tag() {
        let mut answers = Answers {
            tag: Some("rc".to_string()),
            ..Answers::default()
        };
        let request = complete_request(current(), Some("prerelease"), None, &mut answers).unwrap();
        assert_eq!(request.prerelease_tag.as_deref(), Some("rc"));
        assert_eq!(answers.asked, vec!["tag"]);
    }

    #[test]
    fn test_pre_kinds_ignore_tag_argument() {
        let request =
            complete_request(current(), Some("prepatch"), Some("beta"), &mut NoPrompts).unwrap();
        assert_eq!(request.prerelease_tag, None);
    }

    #[test]
    fn test_custom_keyword_with_version_argument() {
        let request =
            complete_request(current(), Some("custom"), Some("4.0.0"), &mut NoPrompts).unwrap();
        assert_eq!(request.explicit_version.as_deref(), Some("4.0.0"));
    }

    #[test]
    fn test_custom_keyword_prompts_for_version() {
        let mut answers = Answers {
            version: Some("9.9.9".to_string()),
            ..Answers::default()
        };
        let request = complete_request(current(), Some("custom"), None, &mut answers).unwrap();
        assert_eq!(request.explicit_version.as_deref(), Some("9.9.9"));
    }

    #[test]
    fn test_no_token_prompts_for_kind_then_tag() {
        let mut answers = Answers {
            kind: Some(BumpKind::PreRelease),
            tag: Some("alpha".to_string()),
            ..Answers::default()
        };
        let request = complete_request(current(), None, None, &mut answers).unwrap();
        assert_eq!(request.kind, BumpKind::PreRelease);
        assert_eq!(answers.asked, vec!["kind", "tag"]);
    }

    #[test]
    fn test_prompt_failure_propagates() {
        let mut answers = Answers::default();
        assert!(complete_request(current(), None, None, &mut answers).is_err());
    }
}
