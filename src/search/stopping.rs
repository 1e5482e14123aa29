use std::time::Instant;

/** decides when a search has to stop */
pub trait StoppingCriterion {
    /// true if the search should stop now
    fn is_finished(&self) -> bool;
}

/** stops once the time limit (in seconds) is reached */
#[derive(Debug, Clone)]
pub struct TimeStoppingCriterion {
    /// creation time
    t_start: Instant,
    /// time limit (seconds)
    time_limit: f32,
}

impl TimeStoppingCriterion {
    /// starts the clock now
    pub fn new(time_limit:f32) -> Self {
        Self { t_start: Instant::now(), time_limit }
    }

    /// seconds since the creation
    pub fn elapsed(&self) -> f32 { self.t_start.elapsed().as_secs_f32() }
}

impl StoppingCriterion for TimeStoppingCriterion {
    fn is_finished(&self) -> bool { self.elapsed() >= self.time_limit }
}

/** never stops */
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverStoppingCriterion;

impl StoppingCriterion for NeverStoppingCriterion {
    fn is_finished(&self) -> bool { false }
}

/// optional time limit
impl StoppingCriterion for Option<TimeStoppingCriterion> {
    fn is_finished(&self) -> bool {
        self.as_ref().map_or(false, |c| c.is_finished())
    }
}
