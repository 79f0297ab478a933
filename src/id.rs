//! Reference classification for vocabulary terms
//!
//! Decides whether a raw string from a terms file is already a URI
//! reference or a local name that has to become a fragment of the
//! vocabulary's base URI.

/// Classification of a term reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdKind {
    /// Absolute URI: "http://...", "ivo://..."
    Absolute,
    /// Fragment identifier: "#foo"
    Fragment,
    /// Bare local name: "foo"
    Local,
}

/// Classify a reference string
///
/// A string counts as absolute when it starts with ASCII letters followed
/// by `://`. This is a heuristic: a label reading "http://..." is treated
/// as a reference too.
pub fn classify_id(id: &str) -> IdKind {
    if id.starts_with('#') {
        return IdKind::Fragment;
    }
    match id.find("://") {
        Some(pos) if pos > 0 && id[..pos].bytes().all(|b| b.is_ascii_alphabetic()) => {
            IdKind::Absolute
        }
        _ => IdKind::Local,
    }
}

/// Check whether a string should be rendered as a URI reference
pub fn is_uri(id: &str) -> bool {
    classify_id(id) != IdKind::Local
}

/// Turn a local name into a fragment reference; URIs pass through
///
/// "foo" -> "#foo", "#foo" -> "#foo", "http://x.org/a" -> "http://x.org/a"
pub fn normalize_reference(id: &str) -> String {
    match classify_id(id) {
        IdKind::Local => format!("#{}", id),
        IdKind::Absolute | IdKind::Fragment => id.to_string(),
    }
}

/// Local name of a fragment reference, used for HTML anchors
///
/// "#foo" -> Some("foo"); absolute URIs and bare names have none.
pub fn fragment_name(id: &str) -> Option<&str> {
    match classify_id(id) {
        IdKind::Fragment => Some(&id[1..]),
        IdKind::Absolute | IdKind::Local => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_id() {
        assert_eq!(classify_id("http://example.org/ex"), IdKind::Absolute);
        assert_eq!(classify_id("ivo://ivoa.net/std/x"), IdKind::Absolute);
        assert_eq!(classify_id("#foo"), IdKind::Fragment);
        assert_eq!(classify_id("#"), IdKind::Fragment);
        assert_eq!(classify_id("foo"), IdKind::Local);
        assert_eq!(classify_id("://nothing"), IdKind::Local);
        assert_eq!(classify_id("urn:isbn:123"), IdKind::Local);
        assert_eq!(classify_id("see http://x.org"), IdKind::Local);
        assert_eq!(classify_id("x-y://z"), IdKind::Local);
    }

    #[test]
    fn test_label_looking_like_uri_is_uri() {
        // Accepted false positive of the prefix heuristic
        assert!(is_uri("http://not-meant-as-link"));
    }

    #[test]
    fn test_normalize_reference() {
        assert_eq!(normalize_reference("foo"), "#foo");
        assert_eq!(normalize_reference("#foo"), "#foo");
        assert_eq!(
            normalize_reference("http://example.org/other#bar"),
            "http://example.org/other#bar"
        );
    }

    #[test]
    fn test_fragment_name() {
        assert_eq!(fragment_name("#foo"), Some("foo"));
        assert_eq!(fragment_name("foo"), None);
        assert_eq!(fragment_name("http://example.org/#foo"), None);
    }
}
