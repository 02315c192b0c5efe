//! Auto-advancing carousel with a fade-out / swap / fade-in transition.
//!
//! The machine never touches a clock. Every operation returns the timer
//! [`Effect`]s the host must apply, and the host reports expirations back
//! through [`Action::Elapsed`]. Arming a timer replaces any pending timer of
//! the same kind, so at most one autoplay timer is ever live.

use std::time::Duration;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timer {
    Autoplay,
    Fade,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Start `timer`, replacing a pending one of the same kind.
    Arm { timer: Timer, after: Duration },
    Cancel(Timer),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Showing,
    /// Content is fading out; `target` becomes current at the midpoint.
    FadingOut { target: usize },
    FadingIn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Start,
    Next,
    Prev,
    GoTo(usize),
    PointerInside(bool),
    FocusInside(bool),
    Elapsed(Timer),
    Teardown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselTiming {
    pub autoplay: Duration,
    pub fade: Duration,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            autoplay: Duration::from_millis(u64::from(config::AUTOPLAY_INTERVAL_MS)),
            fade: Duration::from_millis(u64::from(config::CAROUSEL_FADE_MS)),
        }
    }
}

/// Render-facing copy of the carousel state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselView {
    pub index: usize,
    pub len: usize,
    pub phase: Phase,
    pub paused: bool,
}

impl CarouselView {
    pub fn is_visible(&self) -> bool {
        !matches!(self.phase, Phase::FadingOut { .. })
    }
}

pub struct Carousel<T> {
    items: Vec<T>,
    current: usize,
    phase: Phase,
    timing: CarouselTiming,
    pointer_inside: bool,
    focus_inside: bool,
    autoplay_armed: bool,
    fade_armed: bool,
    started: bool,
    torn_down: bool,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>, timing: CarouselTiming) -> Self {
        Self {
            items,
            current: 0,
            phase: Phase::Showing,
            timing,
            pointer_inside: false,
            focus_inside: false,
            autoplay_armed: false,
            fade_armed: false,
            started: false,
            torn_down: false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Item on display, `None` for an empty carousel.
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.current)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.pointer_inside || self.focus_inside
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self.phase, Phase::FadingOut { .. })
    }

    pub fn view(&self) -> CarouselView {
        CarouselView {
            index: self.current,
            len: self.items.len(),
            phase: self.phase,
            paused: self.is_paused(),
        }
    }

    pub fn handle(&mut self, action: Action) -> Vec<Effect> {
        if self.torn_down {
            return Vec::new();
        }
        match action {
            Action::Start => self.start(),
            Action::Next => self.next(),
            Action::Prev => self.prev(),
            Action::GoTo(index) => self.go_to(index),
            Action::PointerInside(inside) => self.set_pointer_inside(inside),
            Action::FocusInside(inside) => self.set_focus_inside(inside),
            Action::Elapsed(timer) => self.elapsed(timer),
            Action::Teardown => self.teardown(),
        }
    }

    /// Arms the first autoplay tick. Called once on mount.
    pub fn start(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.torn_down || self.started {
            return effects;
        }
        self.started = true;
        self.restart_autoplay(&mut effects);
        effects
    }

    pub fn next(&mut self) -> Vec<Effect> {
        self.navigate(|from, len| (from + 1) % len)
    }

    pub fn prev(&mut self) -> Vec<Effect> {
        self.navigate(|from, len| (from + len - 1) % len)
    }

    /// Jump to `index`. Targeting the current index replays the transition.
    pub fn go_to(&mut self, index: usize) -> Vec<Effect> {
        if index >= self.items.len() {
            return Vec::new();
        }
        self.navigate(|_, _| index)
    }

    pub fn set_pointer_inside(&mut self, inside: bool) -> Vec<Effect> {
        let was_paused = self.is_paused();
        self.pointer_inside = inside;
        self.pause_changed(was_paused)
    }

    pub fn set_focus_inside(&mut self, inside: bool) -> Vec<Effect> {
        let was_paused = self.is_paused();
        self.focus_inside = inside;
        self.pause_changed(was_paused)
    }

    pub fn elapsed(&mut self, timer: Timer) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.torn_down {
            return effects;
        }
        match timer {
            Timer::Autoplay => {
                if !self.autoplay_armed {
                    return effects;
                }
                self.autoplay_armed = false;
                if self.is_paused() {
                    return effects;
                }
                effects = self.next();
            }
            Timer::Fade => {
                if !self.fade_armed {
                    return effects;
                }
                self.fade_armed = false;
                match self.phase {
                    Phase::FadingOut { target } => {
                        self.current = target;
                        self.phase = Phase::FadingIn;
                        self.arm_fade(&mut effects);
                        self.restart_autoplay(&mut effects);
                    }
                    Phase::FadingIn => self.phase = Phase::Showing,
                    Phase::Showing => {}
                }
            }
        }
        effects
    }

    /// Cancel every pending timer. Later actions are ignored.
    pub fn teardown(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.torn_down {
            return effects;
        }
        self.torn_down = true;
        if std::mem::take(&mut self.autoplay_armed) {
            effects.push(Effect::Cancel(Timer::Autoplay));
        }
        if std::mem::take(&mut self.fade_armed) {
            effects.push(Effect::Cancel(Timer::Fade));
        }
        effects
    }

    fn navigate(&mut self, pick: impl FnOnce(usize, usize) -> usize) -> Vec<Effect> {
        let mut effects = Vec::new();
        let len = self.items.len();
        if self.torn_down || len == 0 {
            return effects;
        }
        // A fade already in flight moves relative to where it is headed.
        let from = match self.phase {
            Phase::FadingOut { target } => target,
            Phase::Showing | Phase::FadingIn => self.current,
        };
        self.phase = Phase::FadingOut { target: pick(from, len) };
        self.cancel_autoplay(&mut effects);
        self.arm_fade(&mut effects);
        effects
    }

    fn pause_changed(&mut self, was_paused: bool) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.torn_down || was_paused == self.is_paused() {
            return effects;
        }
        if self.is_paused() {
            self.cancel_autoplay(&mut effects);
        } else if !matches!(self.phase, Phase::FadingOut { .. }) {
            // Mid-fade the swap re-arms autoplay itself.
            self.restart_autoplay(&mut effects);
        }
        effects
    }

    fn restart_autoplay(&mut self, effects: &mut Vec<Effect>) {
        if self.items.is_empty() || !self.started {
            return;
        }
        if self.is_paused() {
            self.cancel_autoplay(effects);
            return;
        }
        self.autoplay_armed = true;
        effects.push(Effect::Arm {
            timer: Timer::Autoplay,
            after: self.timing.autoplay,
        });
    }

    fn cancel_autoplay(&mut self, effects: &mut Vec<Effect>) {
        if std::mem::take(&mut self.autoplay_armed) {
            effects.push(Effect::Cancel(Timer::Autoplay));
        }
    }

    fn arm_fade(&mut self, effects: &mut Vec<Effect>) {
        self.fade_armed = true;
        effects.push(Effect::Arm {
            timer: Timer::Fade,
            after: self.timing.fade,
        });
    }
}
