//! Teleprompter auto-scroll session
//!
//! Owns the scroll offset, the step delay, and the running flag for the
//! full-screen reader. The hosting view calls [`ScrollSession::tick`] every
//! frame and issues a non-animated scroll-to with the returned offset; while
//! paused it reports manual drag positions back through
//! [`ScrollSession::sync_manual_offset`]. The session lives exactly as long
//! as the prompter screen: dropping it is the cancellation.

use std::time::{Duration, Instant};

/// Offset advance per step, in display points.
const SCROLL_STEP: f32 = 1.0;

/// Step-delay adjustment per speed action, in milliseconds.
const SPEED_STEP_MS: u64 = 5;

/// Bounds for the step delay. Smaller delay = faster scroll.
const MIN_SPEED_MS: u64 = 5;
const MAX_SPEED_MS: u64 = 100;

/// Default step delay for a fresh session.
const DEFAULT_SPEED_MS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ScrollSession {
    offset: f32,
    speed_ms: u64,
    running: bool,
    /// Deadline for the next step while running; `None` while paused, which
    /// is what makes a stale tick a no-op.
    next_step: Option<Instant>,
}

impl Default for ScrollSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSession {
    /// Fresh session: paused at offset 0 with the default speed.
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            speed_ms: DEFAULT_SPEED_MS,
            running: false,
            next_step: None,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Current step delay in milliseconds.
    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Paused → running; the first step lands one delay after `now`.
    pub fn play(&mut self, now: Instant) {
        if self.running {
            return;
        }
        self.running = true;
        self.next_step = Some(now + Duration::from_millis(self.speed_ms));
    }

    /// Running → paused; the pending step is cancelled. The offset stays
    /// where it is so a later `play` resumes from here.
    pub fn pause(&mut self) {
        self.running = false;
        self.next_step = None;
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.running {
            self.pause();
        } else {
            self.play(now);
        }
    }

    /// Advance the offset by one step for every elapsed delay interval.
    ///
    /// Returns the number of steps taken so the caller knows whether a
    /// scroll-to is due. A paused session never advances, regardless of how
    /// late the call arrives.
    pub fn tick(&mut self, now: Instant) -> u32 {
        if !self.running {
            return 0;
        }

        let mut steps = 0;
        while let Some(deadline) = self.next_step {
            if deadline > now {
                break;
            }
            self.offset += SCROLL_STEP;
            steps += 1;
            // Speed changes apply here, on the next scheduled step
            self.next_step = Some(deadline + Duration::from_millis(self.speed_ms));
        }
        steps
    }

    /// Adopt a display-reported scroll position while paused, so a resume
    /// continues from where the user dragged to. Ignored while running.
    pub fn sync_manual_offset(&mut self, reported: f32) {
        if !self.running {
            self.offset = reported.max(0.0);
        }
    }

    /// Increase the step delay (scroll slower), clamped.
    pub fn slower(&mut self) {
        self.speed_ms = (self.speed_ms + SPEED_STEP_MS).min(MAX_SPEED_MS);
    }

    /// Decrease the step delay (scroll faster), clamped.
    pub fn faster(&mut self) {
        self.speed_ms = self.speed_ms.saturating_sub(SPEED_STEP_MS).max(MIN_SPEED_MS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_ticks(session: &mut ScrollSession, start: Instant, n: u64) -> u32 {
        // One late tick covering n intervals catches up n steps
        session.tick(start + Duration::from_millis(session.speed_ms() * n))
    }

    #[test]
    fn test_fresh_session_is_paused_at_zero() {
        let session = ScrollSession::new();
        assert!(!session.is_running());
        assert_eq!(session.offset(), 0.0);
        assert_eq!(session.speed_ms(), 30);
    }

    #[test]
    fn test_n_ticks_advance_offset_by_n() {
        let start = Instant::now();
        let mut session = ScrollSession::new();
        session.play(start);

        let steps = run_ticks(&mut session, start, 10);
        assert_eq!(steps, 10);
        assert_eq!(session.offset(), 10.0);
    }

    #[test]
    fn test_tick_before_deadline_does_nothing() {
        let start = Instant::now();
        let mut session = ScrollSession::new();
        session.play(start);

        assert_eq!(session.tick(start + Duration::from_millis(29)), 0);
        assert_eq!(session.offset(), 0.0);
    }

    #[test]
    fn test_paused_session_never_advances() {
        let start = Instant::now();
        let mut session = ScrollSession::new();

        // Stale tick long after "teardown" must be a no-op
        assert_eq!(session.tick(start + Duration::from_secs(60)), 0);
        assert_eq!(session.offset(), 0.0);
    }

    #[test]
    fn test_pause_resume_preserves_offset_continuity() {
        let start = Instant::now();
        let mut session = ScrollSession::new();
        session.play(start);
        run_ticks(&mut session, start, 7);
        assert_eq!(session.offset(), 7.0);

        session.pause();
        let at_pause = session.offset();

        let resume = start + Duration::from_secs(5);
        session.play(resume);
        session.tick(resume + Duration::from_millis(session.speed_ms()));
        assert_eq!(session.offset(), at_pause + 1.0);
    }

    #[test]
    fn test_manual_offset_adopted_only_while_paused() {
        let start = Instant::now();
        let mut session = ScrollSession::new();

        session.sync_manual_offset(120.0);
        assert_eq!(session.offset(), 120.0);

        session.play(start);
        session.sync_manual_offset(5.0);
        assert_eq!(session.offset(), 120.0, "running session ignores drags");
    }

    #[test]
    fn test_resume_continues_from_manual_offset() {
        let start = Instant::now();
        let mut session = ScrollSession::new();
        session.sync_manual_offset(50.0);

        session.play(start);
        session.tick(start + Duration::from_millis(30));
        assert_eq!(session.offset(), 51.0);
    }

    #[test]
    fn test_manual_offset_clamped_non_negative() {
        let mut session = ScrollSession::new();
        session.sync_manual_offset(-3.0);
        assert_eq!(session.offset(), 0.0);
    }

    #[test]
    fn test_speed_clamps() {
        let mut session = ScrollSession::new();

        for _ in 0..100 {
            session.slower();
        }
        assert_eq!(session.speed_ms(), 100);

        for _ in 0..100 {
            session.faster();
        }
        assert_eq!(session.speed_ms(), 5);
    }

    #[test]
    fn test_speed_change_takes_effect_on_next_step() {
        let start = Instant::now();
        let mut session = ScrollSession::new();
        session.play(start);

        // First step still lands on the old 30ms schedule
        session.faster(); // 25ms
        assert_eq!(session.tick(start + Duration::from_millis(30)), 1);

        // Next step is 25ms later, not 30
        assert_eq!(session.tick(start + Duration::from_millis(55)), 1);
        assert_eq!(session.offset(), 2.0);
    }

    #[test]
    fn test_toggle() {
        let now = Instant::now();
        let mut session = ScrollSession::new();
        session.toggle(now);
        assert!(session.is_running());
        session.toggle(now);
        assert!(!session.is_running());
    }
}
