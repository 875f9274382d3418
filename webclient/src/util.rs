use url::Url;

use crate::error::*;

pub fn parse_url(url: impl AsRef<str>) -> Result<Url> {
    match Url::parse(url.as_ref()) {
        Ok(url) => Ok(url),
        Err(e) => Err(Error::InvalidSyntaxUrl {
            url: url.as_ref().to_owned(),
            source: e,
        }),
    }
}

/// Parse `base` as the directory every endpoint is resolved against.
/// A missing trailing slash is added, so `http://host/t2g` and
/// `http://host/t2g/` both resolve `token` to `http://host/t2g/token`.
pub fn parse_base_url(base: impl AsRef<str>) -> Result<Url> {
    let base = base.as_ref();
    if base.ends_with('/') {
        self::parse_url(base)
    } else {
        self::parse_url(format!("{}/", base))
    }
}

pub fn join_endpoint(base: &Url, endpoint: &str) -> Result<Url> {
    base.join(endpoint).map_err(|e| Error::InvalidSyntaxUrl {
        url: format!("{}{}", base, endpoint),
        source: e,
    })
}

/// `true` if the `Content-Type` header value announces a JSON body.
pub fn is_json_content_type(content_type: &str) -> bool {
    content_type.contains("application/json")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_base_url() {
        let url = parse_base_url("http://localhost:8080").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/");

        let url = parse_base_url("https://example.com/t2g").unwrap();
        assert_eq!(url.as_str(), "https://example.com/t2g/");

        // Already a directory:
        let url = parse_base_url("https://example.com/t2g/").unwrap();
        assert_eq!(url.as_str(), "https://example.com/t2g/");

        assert!(parse_base_url("not a url").is_err());
    }

    #[test]
    fn test_join_endpoint() {
        let base = parse_base_url("https://example.com/t2g").unwrap();
        let url = join_endpoint(&base, "token").unwrap();
        assert_eq!(url.as_str(), "https://example.com/t2g/token");

        let url = join_endpoint(&base, "swagger-ui/").unwrap();
        assert_eq!(url.as_str(), "https://example.com/t2g/swagger-ui/");
    }

    #[test]
    fn test_is_json_content_type() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(!is_json_content_type("text/plain"));
        assert!(!is_json_content_type(""));
    }
}
