/// Optional case-sensitive substring predicate. An empty pattern means no filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pattern: Option<String>,
}

impl FilterState {
    /// Replaces the previous pattern.
    pub fn set(&mut self, pattern: &str) {
        self.pattern = (!pattern.is_empty()).then(|| pattern.to_string());
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    pub fn matches(&self, text: &str) -> bool {
        match self.pattern.as_deref() {
            Some(p) => text.contains(p),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_filter_matches_everything() {
        let f = FilterState::default();
        assert!(!f.is_active());
        assert!(f.matches(""));
        assert!(f.matches("anything"));
    }

    #[test]
    fn substring_match() {
        let mut f = FilterState::default();
        f.set("ume3");
        assert!(f.matches("volume3"));
        assert!(!f.matches("volume4"));
    }

    #[test]
    fn match_is_case_sensitive() {
        let mut f = FilterState::default();
        f.set("Web");
        assert!(!f.matches("web-1"));
        assert!(f.matches("Web-1"));
    }

    #[test]
    fn set_replaces_and_empty_clears() {
        let mut f = FilterState::default();
        f.set("a");
        f.set("b");
        assert_eq!(f.pattern(), Some("b"));
        f.set("");
        assert_eq!(f.pattern(), None);
    }
}
