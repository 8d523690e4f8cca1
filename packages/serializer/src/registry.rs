/// Read-only view of the styling runtime's global state
///
/// Both accessors are called once per snapshot.
pub trait StyleRegistry {
    /// Every generated class name the runtime knows about, in registration order
    fn hashes(&self) -> Vec<String>;

    /// The full stylesheet currently injected by the runtime
    fn stylesheet(&self) -> String;
}

impl<T: StyleRegistry + ?Sized> StyleRegistry for &T {
    fn hashes(&self) -> Vec<String> {
        (**self).hashes()
    }

    fn stylesheet(&self) -> String {
        (**self).stylesheet()
    }
}

/// In-memory registry for tests and for runtimes that hand over a snapshot
/// of their state
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    hashes: Vec<String>,
    css: String,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.register_hash(hash);
        self
    }

    pub fn with_hashes<I, S>(mut self, hashes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for hash in hashes {
            self.register_hash(hash);
        }
        self
    }

    pub fn with_css(mut self, css: impl AsRef<str>) -> Self {
        self.inject_css(css);
        self
    }

    /// Register a hash; duplicates are ignored
    pub fn register_hash(&mut self, hash: impl Into<String>) {
        let hash = hash.into();
        if !self.hashes.contains(&hash) {
            self.hashes.push(hash);
        }
    }

    /// Append CSS text to the stylesheet
    pub fn inject_css(&mut self, css: impl AsRef<str>) {
        self.css.push_str(css.as_ref());
    }

    pub fn reset(&mut self) {
        self.hashes.clear();
        self.css.clear();
    }
}

impl StyleRegistry for InMemoryRegistry {
    fn hashes(&self) -> Vec<String> {
        self.hashes.clone()
    }

    fn stylesheet(&self) -> String {
        self.css.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order_and_dedup() {
        let registry = InMemoryRegistry::new()
            .with_hashes(["sc-a1", "sc-b2"])
            .with_hash("sc-a1");
        assert_eq!(registry.hashes(), vec!["sc-a1", "sc-b2"]);
    }

    #[test]
    fn test_css_is_appended() {
        let mut registry = InMemoryRegistry::new().with_css(".a{color:red}");
        registry.inject_css(".b{color:blue}");
        assert_eq!(registry.stylesheet(), ".a{color:red}.b{color:blue}");

        registry.reset();
        assert!(registry.hashes().is_empty());
        assert!(registry.stylesheet().is_empty());
    }

    #[test]
    fn test_reference_is_a_registry() {
        fn hashes_of(registry: impl StyleRegistry) -> Vec<String> {
            registry.hashes()
        }
        let registry = InMemoryRegistry::new().with_hash("x");
        assert_eq!(hashes_of(&registry), vec!["x"]);
    }
}
