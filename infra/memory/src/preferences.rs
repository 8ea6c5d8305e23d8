use fxhash::FxHashMap;
use parking_lot::RwLock;
use wadm_domain::UserId;
use wadm_kernel::PortError;
use wadm_kernel::ports::PortalPreferences;

type PreferenceKey = (UserId, String, String);

/// Per-user preference store.
#[derive(Debug, Default)]
pub struct InMemoryPreferences {
    values: RwLock<FxHashMap<PreferenceKey, String>>,
}

impl InMemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.read().len()
    }
}

impl PortalPreferences for InMemoryPreferences {
    fn value(
        &self,
        user_id: UserId,
        namespace: &str,
        key: &str,
    ) -> Result<Option<String>, PortError> {
        Ok(self.values.read().get(&(user_id, namespace.to_owned(), key.to_owned())).cloned())
    }

    fn set_value(
        &self,
        user_id: UserId,
        namespace: &str,
        key: &str,
        value: &str,
    ) -> Result<(), PortError> {
        self.values.write().insert((user_id, namespace.to_owned(), key.to_owned()), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_scoped_per_user_and_namespace() {
        let prefs = InMemoryPreferences::new();
        prefs.set_value(UserId(1), "ns", "k", "v1").unwrap();
        prefs.set_value(UserId(2), "ns", "k", "v2").unwrap();
        prefs.set_value(UserId(1), "ns", "k", "v3").unwrap();

        assert_eq!(prefs.value(UserId(1), "ns", "k").unwrap().as_deref(), Some("v3"));
        assert_eq!(prefs.value(UserId(2), "ns", "k").unwrap().as_deref(), Some("v2"));
        assert_eq!(prefs.value(UserId(1), "other", "k").unwrap(), None);
        assert_eq!(prefs.len(), 2);
    }
}
