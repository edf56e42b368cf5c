use crate::domain::ports::{NotificationChannel, NotificationChannelBox};
use crate::domain::registry::Registry;
use std::cmp::Reverse;
use tracing::{debug, info};

/// Broadcasts a message over every registered channel, highest priority first.
pub struct NotificationManager {
    channels: Registry<NotificationChannelBox>,
}

impl NotificationManager {
    /// Creates an empty manager with the default registry capacity.
    pub fn new() -> Self {
        Self {
            channels: Registry::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: Registry::with_capacity(capacity),
        }
    }

    pub fn add_channel(&mut self, channel: NotificationChannelBox) {
        debug!(
            kind = channel.kind(),
            priority = %channel.priority(),
            position = self.channels.len(),
            "Registering notification channel"
        );
        self.channels.push(channel);
    }

    /// Sends `message` to `recipient` on every channel.
    ///
    /// Channels are visited by descending priority; channels sharing a
    /// priority keep their registration order. Only a copy of the order is
    /// sorted, the registry itself is left as registered.
    pub fn broadcast(&self, recipient: &str, message: &str) {
        let ordered = self.dispatch_order();
        for channel in &ordered {
            channel.send(recipient, message);
        }
        info!(recipient, channels = ordered.len(), "Broadcast complete");
    }

    /// The channels in the order `broadcast` will visit them.
    pub fn dispatch_order(&self) -> Vec<&dyn NotificationChannel> {
        let mut ordered: Vec<&dyn NotificationChannel> =
            self.channels.iter().map(|channel| &**channel).collect();
        // `sort_by_key` is stable.
        ordered.sort_by_key(|channel| Reverse(channel.priority()));
        ordered
    }

    /// The channels in registration order.
    pub fn channels(&self) -> impl Iterator<Item = &dyn NotificationChannel> {
        self.channels.iter().map(|channel| &**channel)
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.channels.capacity()
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}
