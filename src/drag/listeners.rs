use crate::core::geo::LatLng;
use std::sync::Arc;

/// Observer of symbol drag progress.
///
/// Callbacks run synchronously on the input thread; they must not touch the
/// camera gesture flags or mutate the registry they were delivered from.
pub trait SymbolDragListener {
    fn on_symbol_drag(&self, id: &str, position: LatLng);
    fn on_symbol_drag_end(&self, id: &str, position: LatLng);
}

/// Ordered collection of drag observers, notified in registration order.
///
/// Duplicate registration is permitted and delivers duplicate notifications;
/// callers are expected to avoid double-registering. Fan-out holds `&self`, so
/// the registry cannot be mutated from inside a callback.
#[derive(Default)]
pub struct DragListenerRegistry {
    listeners: Vec<Arc<dyn SymbolDragListener>>,
}

impl DragListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a listener; no deduplication
    pub fn add(&mut self, listener: Arc<dyn SymbolDragListener>) {
        self.listeners.push(listener);
    }

    /// Removes the first registration of `listener`, returning whether one was found
    pub fn remove(&mut self, listener: &Arc<dyn SymbolDragListener>) -> bool {
        match self
            .listeners
            .iter()
            .position(|held| Arc::ptr_eq(held, listener))
        {
            Some(index) => {
                self.listeners.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn notify_drag(&self, id: &str, position: LatLng) {
        for listener in &self.listeners {
            listener.on_symbol_drag(id, position);
        }
    }

    pub fn notify_drag_end(&self, id: &str, position: LatLng) {
        for listener in &self.listeners {
            listener.on_symbol_drag_end(id, position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recorder {
        name: &'static str,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl SymbolDragListener for Recorder {
        fn on_symbol_drag(&self, id: &str, _position: LatLng) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("{}:drag:{}", self.name, id));
        }
        fn on_symbol_drag_end(&self, id: &str, _position: LatLng) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("{}:end:{}", self.name, id));
        }
    }

    #[test]
    fn test_notification_order_is_registration_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut registry = DragListenerRegistry::new();
        registry.add(Arc::new(Recorder {
            name: "l1",
            calls: calls.clone(),
        }));
        registry.add(Arc::new(Recorder {
            name: "l2",
            calls: calls.clone(),
        }));

        registry.notify_drag("sym-1", LatLng::default());
        registry.notify_drag_end("sym-1", LatLng::default());

        let calls = calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec!["l1:drag:sym-1", "l2:drag:sym-1", "l1:end:sym-1", "l2:end:sym-1"]
        );
    }

    #[test]
    fn test_duplicates_permitted() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let listener: Arc<dyn SymbolDragListener> = Arc::new(Recorder {
            name: "dup",
            calls: calls.clone(),
        });

        let mut registry = DragListenerRegistry::new();
        registry.add(listener.clone());
        registry.add(listener.clone());
        assert_eq!(registry.len(), 2);

        registry.notify_drag("sym-1", LatLng::default());
        assert_eq!(calls.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_remove_first_match() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let listener: Arc<dyn SymbolDragListener> = Arc::new(Recorder {
            name: "l",
            calls,
        });

        let mut registry = DragListenerRegistry::new();
        registry.add(listener.clone());
        registry.add(listener.clone());

        assert!(registry.remove(&listener));
        assert_eq!(registry.len(), 1);
        assert!(registry.remove(&listener));
        assert!(!registry.remove(&listener));
        assert!(registry.is_empty());
    }
}
