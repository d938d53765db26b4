/// Collapses a burst of events into a single handled invocation per `delay_ms` window.
///
/// The throttle is clock-agnostic: the host passes `now_ms` from whatever monotonic clock it has.
/// The first event of a burst arms it; further events are ignored until [`Throttle::poll`] sees
/// the delay elapse, which fires once and re-arms the throttle for the next burst. An armed burst
/// cannot be cancelled, only fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Throttle {
    delay_ms: u64,
    armed_at_ms: Option<u64>,
}

impl Throttle {
    pub const DEFAULT_DELAY_MS: u64 = 200;

    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            armed_at_ms: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Changes the delay. An armed throttle keeps its arm time and fires against the new delay.
    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    pub fn is_armed(&self) -> bool {
        self.armed_at_ms.is_some()
    }

    /// Records an event. Returns `true` if this event armed the throttle.
    pub fn trigger(&mut self, now_ms: u64) -> bool {
        if self.armed_at_ms.is_some() {
            return false;
        }
        self.armed_at_ms = Some(now_ms);
        true
    }

    /// Instant at which the armed throttle will fire, if armed.
    pub fn deadline_ms(&self) -> Option<u64> {
        self.armed_at_ms
            .map(|armed| armed.saturating_add(self.delay_ms))
    }

    /// Returns `true` exactly once per armed burst, when the delay has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms() {
            Some(deadline) if now_ms >= deadline => {
                self.armed_at_ms = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY_MS)
    }
}
