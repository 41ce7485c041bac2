//! Autoplay timer driver
//!
//! The driver is polled from the host's frame loop. Its timer is the
//! `deadline` field: armed relative to the moment the navigator last changed,
//! cancelled outright while disabled or paused, and gone for good after
//! [`AutoplayDriver::cancel`].

use crate::navigation::{NavigationSource, SlideNavigator};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Interval used when none is configured
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(3000);

/// Autoplay configuration for one widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplaySettings {
    pub enabled: bool,
    pub interval: Duration,
    pub pause_on_hover: bool,
    /// Stop autoplay for good once the user navigates by hand
    pub disable_on_interaction: bool,
}

impl Default for AutoplaySettings {
    fn default() -> Self {
        Self {
            enabled: false,
            interval: DEFAULT_AUTOPLAY_INTERVAL,
            pause_on_hover: true,
            disable_on_interaction: false,
        }
    }
}

/// Inputs the timer was armed for; any change re-arms it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ArmKey {
    active_index: usize,
    visible_count: usize,
    revision: u64,
    enabled: bool,
    paused: bool,
}

/// Drives `advance()` on a navigator at a fixed interval
#[derive(Debug)]
pub struct AutoplayDriver {
    settings: AutoplaySettings,
    deadline: Option<Instant>,
    armed_for: Option<ArmKey>,
    /// Navigator interaction count when autoplay was (re)enabled
    interaction_baseline: Option<u64>,
    /// Whether the navigator's pause came from our own hover handling
    hover_paused: bool,
    torn_down: bool,
}

impl AutoplayDriver {
    pub fn new(settings: AutoplaySettings) -> Self {
        Self {
            settings,
            deadline: None,
            armed_for: None,
            interaction_baseline: None,
            hover_paused: false,
            torn_down: false,
        }
    }

    pub fn settings(&self) -> &AutoplaySettings {
        &self.settings
    }

    /// Replace the settings; the next poll re-arms if anything relevant changed
    pub fn set_settings(&mut self, settings: AutoplaySettings) {
        if self.settings != settings {
            self.settings = settings;
            self.armed_for = None;
            self.deadline = None;
            self.interaction_baseline = None;
        }
    }

    /// Whether a firing is currently scheduled
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn is_cancelled(&self) -> bool {
        self.torn_down
    }

    /// Pointer entered the widget's hit area
    pub fn pointer_entered(&mut self, navigator: &SlideNavigator) {
        if self.settings.pause_on_hover {
            navigator.set_paused(true);
            self.hover_paused = true;
        }
    }

    /// Pointer left the widget's hit area.
    ///
    /// Releases a hover pause even if `pause_on_hover` was switched off in
    /// the meantime.
    pub fn pointer_left(&mut self, navigator: &SlideNavigator) {
        self.release_hover_pause(navigator);
    }

    fn release_hover_pause(&mut self, navigator: &SlideNavigator) {
        if std::mem::take(&mut self.hover_paused) {
            navigator.set_paused(false);
        }
    }

    /// Advance the navigator if the timer has elapsed.
    ///
    /// Returns how long until the next firing, or `None` when nothing is
    /// scheduled.
    pub fn poll(&mut self, navigator: &SlideNavigator, now: Instant) -> Option<Duration> {
        if self.torn_down {
            return None;
        }

        if self.hover_paused && !self.settings.pause_on_hover {
            self.release_hover_pause(navigator);
        }

        let context = navigator.context();
        if self.settings.enabled && self.settings.disable_on_interaction {
            // Only interactions after autoplay was enabled count
            let baseline = *self.interaction_baseline.get_or_insert(context.interactions);
            if context.interactions > baseline {
                info!("autoplay disabled after user interaction");
                self.settings.enabled = false;
            }
        }

        let key = ArmKey {
            active_index: context.active_index,
            visible_count: context.config.visible_count,
            revision: context.revision,
            enabled: self.settings.enabled,
            paused: context.is_paused,
        };

        if !key.enabled || key.paused {
            if self.deadline.take().is_some() {
                debug!(paused = key.paused, "autoplay timer cancelled");
            }
            self.armed_for = Some(key);
            return None;
        }

        if self.armed_for != Some(key) {
            self.arm(key, now);
        }

        let deadline = self.deadline?;
        if now < deadline {
            return Some(deadline - now);
        }

        navigator.advance(NavigationSource::Autoplay);

        let context = navigator.context();
        let key = ArmKey {
            active_index: context.active_index,
            visible_count: context.config.visible_count,
            revision: context.revision,
            ..key
        };
        self.arm(key, now);
        Some(self.settings.interval)
    }

    fn arm(&mut self, key: ArmKey, now: Instant) {
        self.armed_for = Some(key);
        self.deadline = Some(now + self.settings.interval);
    }

    /// Tear the timer down. No further advances happen after this.
    pub fn cancel(&mut self) {
        if !self.torn_down {
            debug!("autoplay driver torn down");
        }
        self.torn_down = true;
        self.deadline = None;
        self.armed_for = None;
    }
}

impl Drop for AutoplayDriver {
    fn drop(&mut self) {
        self.cancel();
    }
}
