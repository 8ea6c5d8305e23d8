use fxhash::FxHashMap;
use parking_lot::RwLock;
use wadm_domain::constants::{NO_WORKFLOW_KEY, VERSION_X_KEY};
use wadm_kernel::PortError;
use wadm_kernel::ports::Language;

/// Built-in messages, overridable per key.
const DEFAULT_MESSAGES: &[(&str, &str)] =
    &[(NO_WORKFLOW_KEY, "No Workflow"), (VERSION_X_KEY, "Version {0}")];

/// Single-bundle message store. Missing keys resolve to the key itself.
#[derive(Debug)]
pub struct InMemoryLanguage {
    messages: RwLock<FxHashMap<String, String>>,
}

impl Default for InMemoryLanguage {
    fn default() -> Self {
        Self::from_iter(
            DEFAULT_MESSAGES.iter().map(|(key, value)| ((*key).to_owned(), (*value).to_owned())),
        )
    }
}

impl InMemoryLanguage {
    /// Bundle with the built-in messages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.write().insert(key.into(), message.into());
    }

    fn lookup(&self, key: &str) -> String {
        self.messages.read().get(key).cloned().unwrap_or_else(|| key.to_owned())
    }
}

impl FromIterator<(String, String)> for InMemoryLanguage {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { messages: RwLock::new(iter.into_iter().collect()) }
    }
}

impl Language for InMemoryLanguage {
    fn get(&self, _locale: &str, key: &str) -> Result<String, PortError> {
        Ok(self.lookup(key))
    }

    fn format(
        &self,
        _locale: &str,
        key: &str,
        arguments: &[String],
        translate_arguments: bool,
    ) -> Result<String, PortError> {
        let mut message = self.lookup(key);
        for (index, argument) in arguments.iter().enumerate() {
            let value =
                if translate_arguments { self.lookup(argument) } else { argument.clone() };
            message = message.replace(&format!("{{{index}}}"), &value);
        }
        Ok(message)
    }
}
