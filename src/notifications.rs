//! Fire-and-forget user-facing messages with a limited lifetime.
//!
//! These are separate from game state - they're pushed, aged out, and
//! dropped without affecting logic.

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
}

/// A single on-screen toast.
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
    pub timer: f32,    // Time remaining
    pub lifetime: f32, // Total duration (for fade calculation)
}

impl Notification {
    fn new(kind: NotificationKind, text: String) -> Self {
        Self {
            kind,
            text,
            timer: NOTIFICATION_LIFETIME,
            lifetime: NOTIFICATION_LIFETIME,
        }
    }

    /// Opacity factor, fading out over the tail of the lifetime.
    pub fn opacity(&self) -> f32 {
        let fade_window = self.lifetime * NOTIFICATION_FADE_FRACTION;
        (self.timer / fade_window).clamp(0.0, 1.0)
    }

    pub fn is_expired(&self) -> bool {
        self.timer <= 0.0
    }
}

/// Holds active toasts, oldest first.
#[derive(Default)]
pub struct NotificationCenter {
    entries: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NotificationKind, text: impl Into<String>) {
        self.entries.push(Notification::new(kind, text.into()));
        if self.entries.len() > NOTIFICATION_MAX_VISIBLE {
            self.entries.remove(0);
        }
    }

    /// Age entries and drop the expired ones.
    pub fn update(&mut self, dt: f32) {
        for entry in &mut self.entries {
            entry.timer -= dt;
        }
        self.entries.retain(|entry| !entry.is_expired());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_expire_after_their_lifetime() {
        let mut center = NotificationCenter::new();
        center.push(NotificationKind::Info, "Bem-vindo");

        center.update(NOTIFICATION_LIFETIME - 0.1);
        assert!(!center.is_empty());

        center.update(0.2);
        assert!(center.is_empty());
    }

    #[test]
    fn oldest_entry_is_dropped_beyond_the_cap() {
        let mut center = NotificationCenter::new();
        for i in 0..=NOTIFICATION_MAX_VISIBLE {
            center.push(NotificationKind::Info, format!("msg {i}"));
        }

        let texts: Vec<_> = center.iter().map(|n| n.text.clone()).collect();
        assert_eq!(texts.len(), NOTIFICATION_MAX_VISIBLE);
        assert_eq!(texts[0], "msg 1");
    }

    #[test]
    fn opacity_fades_near_expiry() {
        let mut center = NotificationCenter::new();
        center.push(NotificationKind::Success, "XP");

        let fresh = center.iter().next().unwrap().opacity();
        assert_eq!(fresh, 1.0);

        center.update(NOTIFICATION_LIFETIME * (1.0 - NOTIFICATION_FADE_FRACTION / 2.0));
        let fading = center.iter().next().unwrap().opacity();
        assert!(fading < 1.0 && fading > 0.0);
    }
}
