use crate::models::placeholder::PlaceholderMap;

/// Replace every placeholder token in `content` with its mapped value.
///
/// Replacement is literal and runs once per placeholder in declaration
/// order; replaced text is never rescanned for the same token. Tokens
/// without a mapping are left in place.
pub fn render(content: &str, map: &PlaceholderMap) -> String {
    let mut rendered = content.to_string();
    for (placeholder, value) in map.iter() {
        let token = placeholder.token();
        if rendered.contains(token) {
            rendered = rendered.replace(token, value);
        }
    }
    rendered
}
