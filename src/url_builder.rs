//! Deterministic construction of fully-qualified API URLs.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::ClientConfig;

/// Characters that `encodeURI` leaves untouched besides ASCII alphanumerics: the mark
/// set and the URI-reserved set. Everything else, and all non-ASCII bytes, gets
/// percent-encoded.
const ENCODE_URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b';')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b',')
    .remove(b'#');

/// Compose `protocol://host:port{version_prefix}{path}` from the configured base and a
/// relative path. Pure function of configuration and input; no failure modes.
pub(crate) fn form_api_url(config: &ClientConfig<'_>, path: &str, encode: bool) -> String {
    let path = if encode {
        utf8_percent_encode(path, ENCODE_URI).to_string()
    } else {
        path.to_owned()
    };
    format!(
        "{}://{}:{}{}{}",
        config.protocol, config.host, config.port, config.version_prefix, path
    )
}

#[cfg(test)]
mod tests {
    use super::form_api_url;
    use crate::ClientConfig;

    #[test]
    fn preserves_valid_uri_syntax_when_encoding() {
        let config = ClientConfig::new();
        assert_eq!(
            form_api_url(&config, "new-alarm-events/?limit=5&offset=0", true),
            "http://localhost:8080/v1/new-alarm-events/?limit=5&offset=0"
        );
    }

    #[test]
    fn encodes_unsafe_characters() {
        let config = ClientConfig::new();
        assert_eq!(
            form_api_url(&config, "search/a b", true),
            "http://localhost:8080/v1/search/a%20b"
        );
        // Non-ASCII is encoded byte-wise, like encodeURI.
        assert_eq!(
            form_api_url(&config, "caf\u{e9}", true),
            "http://localhost:8080/v1/caf%C3%A9"
        );
    }

    #[test]
    fn leaves_path_verbatim_when_encoding_disabled() {
        let config = ClientConfig::new();
        assert_eq!(
            form_api_url(&config, "a b", false),
            "http://localhost:8080/v1/a b"
        );
    }

    #[test]
    fn respects_configured_base() {
        let mut config = ClientConfig::new();
        config
            .protocol("https")
            .host("alarms.example.com")
            .port(443)
            .version_prefix("/v2/");
        assert_eq!(
            form_api_url(&config, "new-alarm-events/", true),
            "https://alarms.example.com:443/v2/new-alarm-events/"
        );
    }
}
