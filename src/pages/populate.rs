//! Field population
//!
//! Binds profile readouts into a fetched fragment body. Placeholders use
//! `{{key}}` syntax. A binding whose placeholder does not appear in the
//! fragment is skipped silently; unknown placeholders are left untouched.

/// Substitute bindings into a fragment body.
pub fn populate(body: &str, bindings: &[(&str, String)]) -> String {
    let mut out = body.to_string();
    for (key, value) in bindings {
        let token = format!("{{{{{key}}}}}");
        if out.contains(&token) {
            out = out.replace(&token, value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings() -> Vec<(&'static str, String)> {
        vec![("health", "85".to_string()), ("sector", "THALAX".to_string())]
    }

    #[test]
    fn test_replaces_known_placeholders() {
        let out = populate("HP {{health}}% SECTOR {{sector}}", &bindings());
        assert_eq!(out, "HP 85% SECTOR THALAX");
    }

    #[test]
    fn test_replaces_repeated_placeholder() {
        let out = populate("{{health}}/{{health}}", &bindings());
        assert_eq!(out, "85/85");
    }

    #[test]
    fn test_absent_placeholder_is_skipped() {
        // Fragment has no {{sector}} target; population must not fail
        let out = populate("HP {{health}}%", &bindings());
        assert_eq!(out, "HP 85%");
    }

    #[test]
    fn test_unknown_placeholder_left_untouched() {
        let out = populate("{{mystery}}", &bindings());
        assert_eq!(out, "{{mystery}}");
    }
}
