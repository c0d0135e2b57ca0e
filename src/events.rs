//! Typed event delivery with owned subscription handles.
//!
//! Listeners register through [`EventBus::subscribe`] and receive events
//! synchronously, in registration order, during [`EventBus::emit`]. Each
//! registration returns a [`Subscription`]; dropping it unregisters the
//! listener, so listener lifetime follows ordinary ownership instead of a
//! manual subscribe/unsubscribe pairing.

use std::mem;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

type Callback<T> = Box<dyn FnMut(&T) + Send>;

struct Entry<T> {
    id: u64,
    callback: Callback<T>,
}

struct Registry<T> {
    next_id: u64,
    entries: Vec<Entry<T>>,
    /// True while `emit` has the entries checked out.
    emitting: bool,
    /// Ids cancelled during an in-flight emit; purged when it finishes.
    dead: Vec<u64>,
}

impl<T> Registry<T> {
    fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
            emitting: false,
            dead: Vec::new(),
        }
    }
}

/// A cheaply cloneable handle to a synchronous, typed event channel.
pub struct EventBus<T> {
    registry: Arc<Mutex<Registry<T>>>,
}

impl<T> Clone for EventBus<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<T> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EventBus<T> {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry::new())),
        }
    }

    /// Register a listener. The listener stays active until the returned
    /// [`Subscription`] is dropped (or `detach`ed, which pins it for the
    /// bus's lifetime).
    #[must_use = "dropping the Subscription unregisters the listener"]
    pub fn subscribe(&self, callback: impl FnMut(&T) + Send + 'static) -> Subscription
    where
        T: 'static,
    {
        let id = {
            let mut registry = self.registry.lock();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.entries.push(Entry {
                id,
                callback: Box::new(callback),
            });
            id
        };

        let weak: Weak<Mutex<Registry<T>>> = Arc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = weak.upgrade() {
                let mut registry = registry.lock();
                if registry.emitting {
                    registry.dead.push(id);
                } else {
                    registry.entries.retain(|entry| entry.id != id);
                }
            }
        })
    }

    /// Deliver `event` to every registered listener, in subscription order.
    ///
    /// Listeners may drop their own subscription or add new ones while the
    /// event is being delivered; newly added listeners first hear the next
    /// emit.
    pub fn emit(&self, event: &T) {
        let mut entries = {
            let mut registry = self.registry.lock();
            registry.emitting = true;
            mem::take(&mut registry.entries)
        };

        for entry in &mut entries {
            (entry.callback)(event);
        }

        let mut registry = self.registry.lock();
        registry.emitting = false;
        // Listeners added during the emit live in registry.entries; keep the
        // original ordering of survivors ahead of them.
        let added = mem::take(&mut registry.entries);
        entries.extend(added);
        if !registry.dead.is_empty() {
            let dead = mem::take(&mut registry.dead);
            entries.retain(|entry| !dead.contains(&entry.id));
        }
        registry.entries = entries;
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.registry.lock().entries.len()
    }
}

/// Owned handle to a single bus registration.
///
/// Dropping the handle unregisters the listener. Type-erased so components
/// can hold subscriptions to buses of different event types in one `Vec`.
#[must_use = "dropping the Subscription unregisters the listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Keep the listener registered for the lifetime of its bus.
    pub fn detach(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

// ============================================================================
// Game Event Buses
// ============================================================================

use crate::types::{GameplayEvent, GestureEvent, SceneEvent};

/// The set of buses the camera fragment is wired through.
///
/// The host game owns delivery on `scene` and `gameplay`; the gesture
/// classifier publishes on `gestures`.
#[derive(Clone, Default)]
pub struct GameEvents {
    pub gestures: EventBus<GestureEvent>,
    pub scene: EventBus<SceneEvent>,
    pub gameplay: EventBus<GameplayEvent>,
}

impl GameEvents {
    pub fn new() -> Self {
        Self::default()
    }
}
