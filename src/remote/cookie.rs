// Cookie jar loading.
// Turns a Netscape-format or header-style cookie file into a Cookie header value.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::Result;

const HTTP_ONLY_PREFIX: &str = "#HttpOnly_";

/// A single cookie name/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl Cookie {
    fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            value: value.trim().to_string(),
        }
    }
}

/// Read the cookie jar at `path` and build a `Cookie` header value.
///
/// Returns `None` when the file does not exist or holds no cookies; the
/// request then goes out unauthenticated and the remote decides.
pub fn load_cookie_header(path: &Path) -> Result<Option<String>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "cookie jar not found, sending no cookies");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let cookies = parse_cookie_jar(&contents);
    tracing::debug!(path = %path.display(), count = cookies.len(), "loaded cookie jar");
    Ok(cookie_header(&cookies))
}

/// Join cookies into `a=1; b=2` form.
pub fn cookie_header(cookies: &[Cookie]) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }

    let header = cookies
        .iter()
        .map(|c| format!("{}={}", c.name, c.value))
        .collect::<Vec<_>>()
        .join("; ");
    Some(header)
}

/// Parse cookie jar contents.
///
/// Accepts Netscape cookie-jar lines (seven tab-separated fields) and
/// header-style lines (`name=value`, optionally prefixed by `Cookie:` or
/// `Set-Cookie:`). Comments and blank lines are skipped.
pub fn parse_cookie_jar(contents: &str) -> Vec<Cookie> {
    let mut cookies = Vec::new();

    for line in contents.lines() {
        let line = line.trim_end_matches('\r');
        let line = line.strip_prefix(HTTP_ONLY_PREFIX).unwrap_or(line);
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() == 7 {
            if !fields[5].is_empty() {
                cookies.push(Cookie::new(fields[5], fields[6]));
            }
            continue;
        }

        cookies.extend(parse_header_line(line.trim()));
    }

    cookies
}

fn parse_header_line(line: &str) -> Vec<Cookie> {
    if let Some(rest) = strip_prefix_ignore_case(line, "set-cookie:") {
        // Everything after the first pair is attributes (Path, Expires, ...).
        return rest
            .split(';')
            .next()
            .and_then(parse_pair)
            .into_iter()
            .collect();
    }

    let line = strip_prefix_ignore_case(line, "cookie:").unwrap_or(line);
    line.split(';').filter_map(parse_pair).collect()
}

fn parse_pair(pair: &str) -> Option<Cookie> {
    let (name, value) = pair.split_once('=')?;
    if name.trim().is_empty() {
        return None;
    }
    Some(Cookie::new(name, value))
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}
