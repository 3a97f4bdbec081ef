//! Retry bound for the safety loop

/// Default number of re-synthesis loops after a safety rejection
pub const MAX_SAFETY_RETRIES: u32 = 2;

/// What happens after a validation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassVerdict {
    Approve,
    Retry,
    Exhausted,
}

/// Decides between approval, another pass and termination.
///
/// With a bound of `n` a run performs at most `n + 1` validation passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn max_passes(&self) -> u32 {
        self.max_retries + 1
    }

    pub fn decide(&self, is_safe: bool, retry_count: u32) -> PassVerdict {
        if is_safe {
            PassVerdict::Approve
        } else if retry_count >= self.max_retries {
            PassVerdict::Exhausted
        } else {
            PassVerdict::Retry
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(MAX_SAFETY_RETRIES)
    }
}
