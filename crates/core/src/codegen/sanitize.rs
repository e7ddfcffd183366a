//! Identifier sanitisation for names derived from asset paths.

/// The last path segment, extension stripped, with every character outside
/// `[A-Za-z0-9_]` replaced by `_`.
pub fn sanitize_asset_name(path: &str) -> String {
    let segment = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let stem = segment.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(segment);
    sanitize_identifier(stem)
}

pub fn sanitize_identifier(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}
