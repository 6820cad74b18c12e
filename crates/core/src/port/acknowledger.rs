// Acknowledger Port
// Blocks until the user confirms they have read the output

use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Acknowledger: Send + Sync {
    /// Wait for one acknowledgment (a key press / line of input).
    ///
    /// End of input counts as an acknowledgment.
    async fn wait_for_acknowledgment(&self) -> Result<()>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Counts acknowledgments instead of reading input
    #[derive(Default)]
    pub struct MockAcknowledger {
        call_count: Arc<Mutex<usize>>,
    }

    impl MockAcknowledger {
        pub fn new() -> Self {
            Self::default()
        }
        pub fn call_count(&self) -> usize {
            *self.call_count.lock().unwrap()
        }
    }

    #[async_trait]
    impl Acknowledger for MockAcknowledger {
        async fn wait_for_acknowledgment(&self) -> Result<()> {
            *self.call_count.lock().unwrap() += 1;
            Ok(())
        }
    }
}
