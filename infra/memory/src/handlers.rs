use parking_lot::RwLock;
use std::sync::Arc;
use wadm_kernel::PortError;
use wadm_kernel::ports::{ContentTypeHandler, HandlerRegistry};

/// Handler registry that keeps registration order.
#[derive(Debug, Default)]
pub struct InMemoryHandlerRegistry {
    handlers: RwLock<Vec<Arc<dyn ContentTypeHandler>>>,
}

impl InMemoryHandlerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler, replacing an earlier one with the same class name in place.
    pub fn register(&self, handler: Arc<dyn ContentTypeHandler>) {
        let mut handlers = self.handlers.write();
        match handlers.iter_mut().find(|h| h.class_name() == handler.class_name()) {
            Some(existing) => *existing = handler,
            None => handlers.push(handler),
        }
    }

    /// Removes the handler for `class_name`, returning `true` if one was registered.
    pub fn unregister(&self, class_name: &str) -> bool {
        let mut handlers = self.handlers.write();
        let before = handlers.len();
        handlers.retain(|h| h.class_name() != class_name);
        handlers.len() != before
    }
}

impl HandlerRegistry for InMemoryHandlerRegistry {
    fn handlers(&self) -> Result<Vec<Arc<dyn ContentTypeHandler>>, PortError> {
        Ok(self.handlers.read().clone())
    }

    fn scopeable_handlers(&self) -> Result<Vec<Arc<dyn ContentTypeHandler>>, PortError> {
        Ok(self.handlers.read().iter().filter(|h| h.is_scopeable()).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wadm_domain::HandlerDescriptor;

    #[test]
    fn register_replaces_in_place() {
        let registry = InMemoryHandlerRegistry::new();
        registry.register(Arc::new(HandlerDescriptor::new("a")));
        registry.register(Arc::new(HandlerDescriptor::new("b").scopeable(true)));
        registry.register(Arc::new(HandlerDescriptor::new("a").visible(false)));

        let handlers = registry.handlers().unwrap();
        assert_eq!(handlers.len(), 2);
        assert_eq!(handlers[0].class_name(), "a");
        assert!(!handlers[0].is_visible());

        let scopeable = registry.scopeable_handlers().unwrap();
        assert_eq!(scopeable.len(), 1);
        assert_eq!(scopeable[0].class_name(), "b");
    }

    #[test]
    fn unregister_reports_removal() {
        let registry = InMemoryHandlerRegistry::new();
        registry.register(Arc::new(HandlerDescriptor::new("a")));
        assert!(registry.unregister("a"));
        assert!(!registry.unregister("a"));
    }
}
