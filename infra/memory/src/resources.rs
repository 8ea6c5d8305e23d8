use fxhash::FxHashMap;
use parking_lot::RwLock;
use tracing::trace;
use wadm_kernel::PortError;
use wadm_kernel::ports::ResourceLabels;

/// Content type display names keyed by class name.
///
/// Unknown class names resolve to themselves, the way portal resource bundles echo
/// missing keys.
#[derive(Debug, Default)]
pub struct InMemoryResourceLabels {
    labels: RwLock<FxHashMap<String, String>>,
}

impl InMemoryResourceLabels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, class_name: impl Into<String>, label: impl Into<String>) {
        self.labels.write().insert(class_name.into(), label.into());
    }
}

impl FromIterator<(String, String)> for InMemoryResourceLabels {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { labels: RwLock::new(iter.into_iter().collect()) }
    }
}

impl ResourceLabels for InMemoryResourceLabels {
    fn model_resource(&self, locale: &str, class_name: &str) -> Result<String, PortError> {
        Ok(self.labels.read().get(class_name).cloned().unwrap_or_else(|| {
            trace!(locale, class_name, "No resource label, echoing class name");
            class_name.to_owned()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_and_echoes_unknown() {
        let labels = InMemoryResourceLabels::new();
        labels.insert("wiki.page", "Wiki Page");

        assert_eq!(labels.model_resource("en_US", "wiki.page").unwrap(), "Wiki Page");
        assert_eq!(labels.model_resource("en_US", "blogs.entry").unwrap(), "blogs.entry");
    }
}
