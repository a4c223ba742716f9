/// Visual weight of a status badge. Views map this onto a badge style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTone {
    /// Good or finished.
    Positive,
    /// In progress or informational.
    #[default]
    Neutral,
    /// Needs attention.
    Critical,
    /// Waiting, not yet acted on.
    Muted,
}

/// A record status with a display label and a badge tone.
pub trait Status {
    fn label(&self) -> &'static str;
    fn tone(&self) -> StatusTone;
}

/// Completed-out-of-total with a rounded percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub done: u32,
    pub total: u32,
}

impl Progress {
    pub fn new(done: u32, total: u32) -> Self {
        Self { done, total }
    }

    /// Rounded percentage; an empty total counts as 0%.
    pub fn percent(&self) -> u8 {
        percentage(self.done, self.total)
    }
}

/// `round(part / total * 100)`, clamped to 0..=100. Zero total yields 0.
pub fn percentage(part: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (f64::from(part) / f64::from(total) * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}
