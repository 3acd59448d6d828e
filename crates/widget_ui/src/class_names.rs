//! Class attribute composition.

/// Joins class lists, dropping blanks and repeated tokens while keeping first-seen order.
pub fn class_names<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens: Vec<String> = Vec::new();
    for part in parts {
        for token in part.as_ref().split_whitespace() {
            if !tokens.iter().any(|seen| seen == token) {
                tokens.push(token.to_string());
            }
        }
    }
    tokens.join(" ")
}

/// Merges a widget's base class with a caller-supplied `class` prop.
pub(crate) fn merge_class(base: &'static str, extra: Option<&str>) -> String {
    class_names([base, extra.unwrap_or_default()])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn drops_blank_parts_and_duplicates() {
        assert_eq!(
            class_names(["ui-button", "", "  wide   ui-button", "wide tall"]),
            "ui-button wide tall"
        );
        assert_eq!(class_names(Vec::<String>::new()), "");
    }

    #[test]
    fn merge_keeps_base_first() {
        assert_eq!(merge_class("ui-modal", None), "ui-modal");
        assert_eq!(merge_class("ui-modal", Some("ui-modal wide")), "ui-modal wide");
    }
}
