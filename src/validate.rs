use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ApiError;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Ordered field rules for one request body. Every rule runs and every
/// violation is collected; the caller decides nothing until `finish`.
#[derive(Debug, Default)]
pub struct Rules {
    violations: Vec<String>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    /// The field must be present and non-blank.
    pub fn require(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if value.map(str::trim).unwrap_or("").is_empty() {
            self.violations
                .push(format!("Please provide a value for \"{field}\""));
        }
        self
    }

    /// The field must be a syntactically valid email address. Evaluated on
    /// the raw value even when `require` already failed, so a blank email
    /// reports both rules.
    pub fn email(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if !is_valid_email(value.unwrap_or("")) {
            self.violations
                .push(format!("Please provide a valid email address for \"{field}\""));
        }
        self
    }

    /// Record the outcome of a predicate evaluated at the call site, e.g. a
    /// uniqueness query.
    pub fn fail_if(&mut self, failed: bool, message: &str) -> &mut Self {
        if failed {
            self.violations.push(message.to_string());
        }
        self
    }

    pub fn finish(self) -> Result<(), ApiError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self.violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violations(rules: Rules) -> Vec<String> {
        match rules.finish() {
            Ok(()) => vec![],
            Err(ApiError::Validation(messages)) => messages,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn valid_body_passes() {
        let mut rules = Rules::new();
        rules
            .require("title", Some("Learn Rust"))
            .require("description", Some("Ownership and borrowing"));
        assert!(rules.finish().is_ok());
    }

    #[test]
    fn collects_every_violation_in_declaration_order() {
        let mut rules = Rules::new();
        rules
            .require("firstName", None)
            .require("lastName", Some(""))
            .require("emailAddress", None)
            .email("emailAddress", None)
            .require("password", Some("   "));
        assert_eq!(
            violations(rules),
            vec![
                "Please provide a value for \"firstName\"",
                "Please provide a value for \"lastName\"",
                "Please provide a value for \"emailAddress\"",
                "Please provide a valid email address for \"emailAddress\"",
                "Please provide a value for \"password\"",
            ]
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut rules = Rules::new();
        rules.require("title", Some(" \t "));
        assert_eq!(
            violations(rules),
            vec!["Please provide a value for \"title\""]
        );
    }

    #[test]
    fn malformed_email_fails_format_but_not_presence() {
        let mut rules = Rules::new();
        rules
            .require("emailAddress", Some("not-an-email"))
            .email("emailAddress", Some("not-an-email"));
        assert_eq!(
            violations(rules),
            vec!["Please provide a valid email address for \"emailAddress\""]
        );
    }

    #[test]
    fn fail_if_records_custom_predicates() {
        let mut rules = Rules::new();
        rules.fail_if(true, "email already exists");
        assert_eq!(violations(rules), vec!["email already exists"]);
    }

    #[test]
    fn email_syntax() {
        assert!(is_valid_email("joe@smith.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("joe@smith"));
        assert!(!is_valid_email("joe smith@host.com"));
        assert!(!is_valid_email("@host.com"));
    }
}
