//! Presentation lifecycle of a bubble.
//!
//! A [`Presentation`] walks through [`Phase::Hidden`] → [`Phase::Showing`] →
//! [`Phase::Visible`] → [`Phase::Dismissing`] → [`Phase::Dismissed`]. It never
//! animates anything itself: [`Presentation::show`] and
//! [`Presentation::dismiss`] return an [`AnimationRequest`] for the host's
//! animation driver, and the host reports back through
//! [`Presentation::complete_show`] and [`Presentation::complete_dismiss`].
//!
//! A [`VisibilityObserver`] is told when a bubble is shown and when its
//! dismissal starts, exactly once each per presentation.
//!
//! ```
//! # use std::rc::Rc;
//! # use callout::lifecycle::{Phase, Presentation, VisibleCounter};
//! # use callout_core::appearance::Appearance;
//! let counter = Rc::new(VisibleCounter::default());
//! let mut presentation = Presentation::new(Appearance::default(), counter.clone());
//!
//! assert!(presentation.show(true).is_some());
//! assert_eq!(counter.count(), 1);
//! presentation.complete_show();
//!
//! presentation.dismiss();
//! assert_eq!(counter.count(), 0);
//! presentation.complete_dismiss();
//! assert_eq!(presentation.phase(), Phase::Dismissed);
//! assert_eq!(counter.count(), 0);
//! ```

use std::{cell::Cell, fmt, rc::Rc, time::Duration};

use log::{debug, info, trace, warn};

use callout_core::{appearance::Appearance, geometry::Transform};

/// Receives show and dismiss notifications.
pub trait VisibilityObserver {
    fn tooltip_shown(&self);
    fn tooltip_dismissed(&self);
}

/// Counts the bubbles currently on screen.
///
/// Share one counter between presentations to know whether any bubble is
/// visible.
#[derive(Debug, Default)]
pub struct VisibleCounter {
    count: Cell<usize>,
}

impl VisibleCounter {
    pub fn count(&self) -> usize {
        self.count.get()
    }
}

impl VisibilityObserver for VisibleCounter {
    fn tooltip_shown(&self) {
        self.count.set(self.count.get() + 1);
    }

    fn tooltip_dismissed(&self) {
        self.count.set(self.count.get().saturating_sub(1));
    }
}

/// Where a presentation is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Showing,
    Visible,
    Dismissing,
    Dismissed,
}

/// Timing curve of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    EaseIn,
    EaseOut,
}

/// A spring animation the host should run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRequest {
    /// Transform to start from; `None` means the bubble's current transform.
    pub from_transform: Option<Transform>,
    pub to_transform: Transform,
    pub from_opacity: f32,
    pub to_opacity: f32,
    pub duration: Duration,
    pub delay: Duration,
    pub damping: f32,
    pub velocity: f32,
    pub curve: Curve,
}

/// Show and dismiss state machine for one bubble.
pub struct Presentation {
    appearance: Appearance,
    observer: Rc<dyn VisibilityObserver>,
    phase: Phase,
    transform: Transform,
    opacity: f32,
    /// Whether the observer was told about the current show.
    announced: bool,
    header_pinned: bool,
    completions: Vec<Box<dyn FnOnce()>>,
    on_dismiss: Option<Box<dyn FnOnce()>>,
}

impl fmt::Debug for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Presentation")
            .field("phase", &self.phase)
            .field("transform", &self.transform)
            .field("opacity", &self.opacity)
            .field("announced", &self.announced)
            .field("header_pinned", &self.header_pinned)
            .finish_non_exhaustive()
    }
}

impl Presentation {
    pub fn new(appearance: Appearance, observer: Rc<dyn VisibilityObserver>) -> Self {
        Self {
            appearance: appearance.sanitized(),
            observer,
            phase: Phase::Hidden,
            transform: Transform::IDENTITY,
            opacity: 0.0,
            announced: false,
            header_pinned: false,
            completions: Vec::new(),
            on_dismiss: None,
        }
    }

    /// Sets a callback that runs once when dismissal completes.
    pub fn on_dismiss(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_dismiss = Some(Box::new(callback));
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The transform the bubble should currently be drawn with.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Whether the header stays pinned above the bubble. It is pinned from
    /// [`Presentation::show`] until the exit starts.
    pub fn header_pinned(&self) -> bool {
        self.header_pinned
    }

    /// Starts showing the bubble.
    ///
    /// When animated, the bubble jumps to the initial transform at zero
    /// opacity and the returned request animates it to the final transform
    /// after the configured delay. Otherwise it snaps straight to
    /// [`Phase::Visible`] and no request is returned. Does nothing unless the
    /// presentation is [`Phase::Hidden`].
    pub fn show(&mut self, animated: bool) -> Option<AnimationRequest> {
        if self.phase != Phase::Hidden {
            debug!(phase:? = self.phase; "Ignoring show");
            return None;
        }

        self.announced = true;
        self.header_pinned = true;
        self.observer.tooltip_shown();
        let animation = &self.appearance.animation;

        if !animated {
            self.transform = animation.final_transform;
            self.opacity = 1.0;
            self.phase = Phase::Visible;
            info!("Bubble shown");
            return None;
        }

        self.transform = animation.initial_transform;
        self.opacity = 0.0;
        self.phase = Phase::Showing;
        info!(duration = animation.duration, delay = animation.delay; "Bubble showing");

        Some(AnimationRequest {
            from_transform: Some(animation.initial_transform),
            to_transform: animation.final_transform,
            from_opacity: 0.0,
            to_opacity: 1.0,
            duration: seconds(animation.duration),
            delay: seconds(animation.delay),
            damping: animation.damping,
            velocity: animation.velocity,
            curve: Curve::EaseIn,
        })
    }

    /// Reports that the entrance animation finished.
    pub fn complete_show(&mut self) {
        if self.phase != Phase::Showing {
            trace!(phase:? = self.phase; "Stale show completion");
            return;
        }
        self.transform = self.appearance.animation.final_transform;
        self.opacity = 1.0;
        self.phase = Phase::Visible;
        info!("Bubble visible");
    }

    /// Starts dismissing the bubble.
    ///
    /// The observer is told right away, when the exit starts, and the header
    /// is unpinned. From [`Phase::Showing`] the entrance is abandoned and the
    /// exit starts from the current transform. From [`Phase::Hidden`] the
    /// bubble goes straight to [`Phase::Dismissed`] without notifying the
    /// observer, since it was never shown. Calling it again while dismissing
    /// or after dismissal is a no-op.
    pub fn dismiss(&mut self) -> Option<AnimationRequest> {
        match self.phase {
            Phase::Dismissing | Phase::Dismissed => {
                debug!(phase:? = self.phase; "Ignoring repeated dismiss");
                None
            }
            Phase::Hidden => {
                self.finish_dismiss();
                None
            }
            Phase::Showing | Phase::Visible => {
                self.phase = Phase::Dismissing;
                self.header_pinned = false;
                if std::mem::take(&mut self.announced) {
                    self.observer.tooltip_dismissed();
                }
                let animation = &self.appearance.animation;
                info!(duration = animation.dismiss_duration; "Bubble dismissing");

                Some(AnimationRequest {
                    from_transform: None,
                    to_transform: animation.dismiss_transform,
                    from_opacity: self.opacity,
                    to_opacity: 0.0,
                    duration: seconds(animation.dismiss_duration),
                    delay: Duration::ZERO,
                    damping: animation.damping,
                    velocity: animation.velocity,
                    curve: Curve::EaseOut,
                })
            }
        }
    }

    /// Like [`Presentation::dismiss`], running `completion` once the exit
    /// finishes and before the [`Presentation::on_dismiss`] callback.
    ///
    /// A completion passed while already dismissing joins the running exit;
    /// one passed after dismissal runs immediately.
    pub fn dismiss_then(&mut self, completion: impl FnOnce() + 'static) -> Option<AnimationRequest> {
        if self.phase == Phase::Dismissed {
            completion();
            return None;
        }
        self.completions.push(Box::new(completion));
        self.dismiss()
    }

    /// Reports that the exit animation finished.
    pub fn complete_dismiss(&mut self) {
        if self.phase != Phase::Dismissing {
            trace!(phase:? = self.phase; "Stale dismiss completion");
            return;
        }
        self.finish_dismiss();
    }

    /// Dismisses the bubble if it is configured to dismiss on tap.
    pub fn handle_tap(&mut self) -> Option<AnimationRequest> {
        if !self.appearance.dismiss_on_tap {
            trace!("Tap ignored");
            return None;
        }
        self.dismiss()
    }

    fn finish_dismiss(&mut self) {
        self.header_pinned = false;
        for completion in std::mem::take(&mut self.completions) {
            completion();
        }
        self.transform = Transform::IDENTITY;
        self.opacity = 0.0;
        self.phase = Phase::Dismissed;
        if let Some(callback) = self.on_dismiss.take() {
            callback();
        }
        info!("Bubble dismissed");
    }
}

/// Converts sanitized seconds into a [`Duration`], falling back to zero for
/// values a [`Duration`] cannot hold.
fn seconds(secs: f32) -> Duration {
    Duration::try_from_secs_f32(secs).unwrap_or_else(|err| {
        warn!(secs = secs, err:% = err; "Unrepresentable animation time, using zero");
        Duration::ZERO
    })
}
