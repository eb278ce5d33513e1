// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Name of the cookie carrying the upstream-issued token
pub const SESSION_COOKIE_NAME: &str = "token";

/// Session lifetime in seconds (7 days)
pub const SESSION_MAX_AGE_SECS: u64 = 7 * 24 * 3600;

/// Bytes left as-is in a cookie value, same set as JavaScript's
/// `encodeURIComponent`. `;`, `,`, `=`, whitespace and quotes are escaped.
const COOKIE_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds the `Set-Cookie` value persisting the issued token.
///
/// The token is percent-encoded so it can never add attributes of its own.
pub fn session_cookie(token: &str) -> String {
    format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/; Secure; Max-Age={}",
        SESSION_COOKIE_NAME,
        utf8_percent_encode(token, COOKIE_VALUE),
        SESSION_MAX_AGE_SECS
    )
}

/// Builds the `Set-Cookie` value that expires the session cookie
pub fn clear_session_cookie() -> String {
    format!(
        "{}=; HttpOnly; SameSite=Lax; Path=/; Secure; Max-Age=0",
        SESSION_COOKIE_NAME
    )
}

/// Finds the non-empty session token in a `Cookie` header value
pub fn parse_session_cookie(cookies: &str) -> Option<String> {
    cookies.split(';').find_map(|cookie| {
        let (name, value) = cookie.trim().split_once('=')?;
        (name == SESSION_COOKIE_NAME && !value.is_empty()).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        assert_eq!(
            session_cookie("abc123"),
            "token=abc123; HttpOnly; SameSite=Lax; Path=/; Secure; Max-Age=604800"
        );
    }

    #[test]
    fn test_session_cookie_escapes_token() {
        assert_eq!(
            session_cookie("abc; Domain=evil.example; Max-Age=99999999"),
            "token=abc%3B%20Domain%3Devil.example%3B%20Max-Age%3D99999999; \
             HttpOnly; SameSite=Lax; Path=/; Secure; Max-Age=604800"
        );
        // JWT characters pass through unchanged
        assert_eq!(
            session_cookie("eyJhbGciOi.eyJzdWIi.c2ln-_"),
            "token=eyJhbGciOi.eyJzdWIi.c2ln-_; HttpOnly; SameSite=Lax; Path=/; Secure; Max-Age=604800"
        );
        assert!(session_cookie("a,b\"c d").starts_with("token=a%2Cb%22c%20d;"));
    }

    #[test]
    fn test_clear_session_cookie() {
        let cookie = clear_session_cookie();
        assert!(cookie.starts_with("token=;"));
        assert!(cookie.ends_with("Max-Age=0"));
    }

    #[test]
    fn test_parse_session_cookie() {
        let cookies = "token=test_token; other=value";
        assert_eq!(parse_session_cookie(cookies), Some("test_token".to_string()));

        let cookies = "theme=dark;token=abc";
        assert_eq!(parse_session_cookie(cookies), Some("abc".to_string()));

        assert_eq!(parse_session_cookie("other=value"), None);
        assert_eq!(parse_session_cookie("token="), None);
        assert_eq!(parse_session_cookie(""), None);
    }
}
