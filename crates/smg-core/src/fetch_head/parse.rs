//! Extract the `Last-Modified` value from raw HTTP response header lines.

/// Scans collected header lines for `Last-Modified`.
///
/// When redirects were followed the collected lines span several responses;
/// the last occurrence wins, matching the headers of the final response.
pub(crate) fn last_modified(lines: &[String]) -> Option<String> {
    let mut found = None;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("last-modified") {
                found = Some(value.trim().to_string());
            }
        }
    }

    found
}
