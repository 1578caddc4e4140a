use super::error::SymmetryError;

#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,
    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;
pub type CancellationCheck<'a> = Box<dyn Fn() -> bool + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
    cancellation: Option<CancellationCheck<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
            cancellation: None,
        }
    }

    /// Attaches a predicate polled between stages; once it returns `true`
    /// the running workflow stops at the next [`checkpoint`](Self::checkpoint).
    pub fn with_cancellation(mut self, cancellation: CancellationCheck<'a>) -> Self {
        self.cancellation = Some(cancellation);
        self
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.as_ref().is_some_and(|check| check())
    }

    /// Stage boundary: fails with `Cancelled` naming the phase about to start.
    pub fn checkpoint(&self, phase: &'static str) -> Result<(), SymmetryError> {
        if self.is_cancelled() {
            return Err(SymmetryError::Cancelled { phase });
        }
        Ok(())
    }
}
