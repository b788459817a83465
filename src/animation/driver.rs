use std::time::Duration;

use crate::animation::clock::{Clock, FrameScheduler, FrameTicket, QueuedScheduler};
use crate::animation::ease::ease_out;

/// Playback settings for an [`Animator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatorOpts {
    /// Wall-clock length of one run.
    pub duration: Duration,
}

impl Default for AnimatorOpts {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(2000),
        }
    }
}

type FrameFn<'a> = Box<dyn FnMut(f64) + 'a>;
type CompleteFn<'a> = Box<dyn FnOnce() + 'a>;

struct Run<'a> {
    ticket: FrameTicket,
    started: Duration,
    last_progress: Option<f64>,
    on_frame: FrameFn<'a>,
    on_complete: Option<CompleteFn<'a>>,
}

/// Time-driven progress source for live playback.
///
/// Each run converts elapsed clock time into eased progress and hands it to `on_frame`, one
/// delivery per fired frame ticket. At most one run is active: [`Animator::animate`] cancels
/// any run in flight, and after [`Animator::stop`] returns no further `on_frame` call from the
/// stopped run can happen.
///
/// Within a run, delivered progress values are strictly increasing and `1.0` is delivered
/// exactly once, as the final frame, right before `on_complete`.
pub struct Animator<'a, C: Clock, S: FrameScheduler> {
    clock: C,
    scheduler: S,
    opts: AnimatorOpts,
    run: Option<Run<'a>>,
}

impl<'a, C: Clock, S: FrameScheduler> Animator<'a, C, S> {
    pub fn new(clock: C, scheduler: S, opts: AnimatorOpts) -> Self {
        Self {
            clock,
            scheduler,
            opts,
            run: None,
        }
    }

    pub fn opts(&self) -> AnimatorOpts {
        self.opts
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Start a run, cancelling the previous one if it is still in flight.
    pub fn animate(
        &mut self,
        on_frame: impl FnMut(f64) + 'a,
        on_complete: Option<Box<dyn FnOnce() + 'a>>,
    ) {
        self.stop();
        let started = self.clock.now();
        let ticket = self.scheduler.request_frame();
        tracing::debug!(ticket = ticket.0, "animation run started");
        self.run = Some(Run {
            ticket,
            started,
            last_progress: None,
            on_frame: Box::new(on_frame),
            on_complete,
        });
    }

    /// Cancel the active run. No-op when idle.
    pub fn stop(&mut self) {
        if let Some(run) = self.run.take() {
            self.scheduler.cancel_frame(run.ticket);
            tracing::debug!(ticket = run.ticket.0, "animation run cancelled");
        }
    }

    /// Frame callback entry point for the host.
    ///
    /// Returns `true` when `ticket` belonged to the active run. Stale tickets (from a
    /// cancelled or finished run) are ignored.
    pub fn fire(&mut self, ticket: FrameTicket) -> bool {
        let Some(run) = self.run.as_mut() else {
            return false;
        };
        if run.ticket != ticket {
            tracing::trace!(ticket = ticket.0, "ignoring stale frame ticket");
            return false;
        }

        let elapsed = self.clock.now().saturating_sub(run.started);
        let raw = linear_fraction(elapsed, self.opts.duration);
        let progress = ease_out(raw);

        if raw < 1.0 {
            let advanced = run.last_progress.is_none_or(|last| progress > last);
            if advanced && progress < 1.0 {
                run.last_progress = Some(progress);
                (run.on_frame)(progress);
            }
            run.ticket = self.scheduler.request_frame();
            return true;
        }

        if let Some(mut run) = self.run.take() {
            (run.on_frame)(1.0);
            tracing::debug!("animation run complete");
            if let Some(done) = run.on_complete.take() {
                done();
            }
        }
        true
    }
}

impl<C: Clock> Animator<'_, C, QueuedScheduler> {
    /// Pump queued frame tickets until the scheduler is empty, sleeping `interval` before each
    /// frame. Returns the number of tickets that drove the active run.
    pub fn run_until_idle(&mut self, interval: Option<Duration>) -> u64 {
        let mut fired = 0;
        while let Some(ticket) = self.scheduler.next_due() {
            if let Some(interval) = interval {
                std::thread::sleep(interval);
            }
            if self.fire(ticket) {
                fired += 1;
            }
        }
        fired
    }
}

fn linear_fraction(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
