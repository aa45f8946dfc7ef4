use base64::engine::general_purpose;
use base64::Engine as _;

/// Credentials carried by a `Basic` Authorization header. The username is
/// the account's email address.
#[derive(Debug, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Parse an `Authorization` header value of the form
/// `Basic base64(username:password)`.
pub fn parse(header: &str) -> Option<Credentials> {
    let encoded = header
        .strip_prefix("Basic ")
        .or_else(|| header.strip_prefix("basic "))?;
    let decoded = general_purpose::STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(credentials: &str) -> String {
        format!("Basic {}", general_purpose::STANDARD.encode(credentials))
    }

    #[test]
    fn parses_username_and_password() {
        let parsed = parse(&encode("joe@smith.com:joepassword")).expect("should parse");
        assert_eq!(
            parsed,
            Credentials {
                username: "joe@smith.com".into(),
                password: "joepassword".into(),
            }
        );
    }

    #[test]
    fn password_may_contain_colons() {
        let parsed = parse(&encode("joe@smith.com:pa:ss")).expect("should parse");
        assert_eq!(parsed.password, "pa:ss");
    }

    #[test]
    fn accepts_lowercase_scheme() {
        let header = encode("joe@smith.com:joepassword").replacen("Basic", "basic", 1);
        assert!(parse(&header).is_some());
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(parse("Bearer abcdef").is_none());
        assert!(parse("Digest whatever").is_none());
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(parse("Basic not-base64!!!").is_none());
    }

    #[test]
    fn rejects_credentials_without_a_colon() {
        let header = format!(
            "Basic {}",
            general_purpose::STANDARD.encode("no-separator-here")
        );
        assert!(parse(&header).is_none());
    }
}
