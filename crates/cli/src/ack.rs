//! Timed copy acknowledgment
//!
//! After a copy the control label switches to the "copied" text and reverts
//! after a delay. Every acknowledgment bumps a generation counter and the
//! scheduled reset carries the generation it was issued for, so a reset left
//! over from an earlier copy never cuts a later acknowledgment short.

use apkforge_core::config::ClipboardConfig;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// A reset waiting to be delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReset {
    generation: u64,
    delay: Duration,
}

impl PendingReset {
    /// Delay before the reset is due
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Label state of the copy control
#[derive(Debug, Clone)]
pub struct CopyAcknowledgment {
    idle_label: String,
    copied_label: String,
    delay: Duration,
    generation: u64,
    acknowledged: bool,
}

impl CopyAcknowledgment {
    /// Create an idle acknowledgment
    pub fn new(idle_label: impl Into<String>, copied_label: impl Into<String>, delay: Duration) -> Self {
        Self {
            idle_label: idle_label.into(),
            copied_label: copied_label.into(),
            delay,
            generation: 0,
            acknowledged: false,
        }
    }

    /// Create from the `[clipboard]` config table
    pub fn from_config(config: &ClipboardConfig) -> Self {
        Self::new(
            config.idle_label.clone(),
            config.copied_label.clone(),
            Duration::from_millis(config.ack_delay_ms),
        )
    }

    /// Label to display right now
    #[must_use]
    pub fn label(&self) -> &str {
        if self.acknowledged {
            &self.copied_label
        } else {
            &self.idle_label
        }
    }

    /// Whether the copied label is showing
    #[must_use]
    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }

    /// Record a successful copy; the returned reset must be delivered later
    pub fn acknowledge(&mut self) -> PendingReset {
        self.generation += 1;
        self.acknowledged = true;
        PendingReset {
            generation: self.generation,
            delay: self.delay,
        }
    }

    /// Deliver a reset. Returns whether the label reverted.
    ///
    /// Resets issued before the latest acknowledgment are ignored.
    pub fn reset(&mut self, pending: PendingReset) -> bool {
        if pending.generation != self.generation || !self.acknowledged {
            tracing::trace!(
                stale = pending.generation,
                current = self.generation,
                "Ignoring stale acknowledgment reset"
            );
            return false;
        }
        self.acknowledged = false;
        true
    }
}

/// Send `pending` on `tx` once its delay has elapsed
///
/// Must be called from within a tokio runtime. A closed channel drops the
/// reset silently.
pub fn schedule_reset(pending: PendingReset, tx: UnboundedSender<PendingReset>) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(pending.delay).await;
        let _ = tx.send(pending);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::time::Instant;

    fn ack() -> CopyAcknowledgment {
        CopyAcknowledgment::new("Copy", "Copied!", Duration::from_millis(2000))
    }

    #[test]
    fn test_label_cycle() {
        let mut ack = ack();
        assert_eq!(ack.label(), "Copy");

        let pending = ack.acknowledge();
        assert_eq!(ack.label(), "Copied!");
        assert_eq!(pending.delay(), Duration::from_millis(2000));

        assert!(ack.reset(pending));
        assert_eq!(ack.label(), "Copy");
        assert!(!ack.reset(pending));
    }

    #[test]
    fn test_stale_reset_is_ignored() {
        let mut ack = ack();
        let first = ack.acknowledge();
        let second = ack.acknowledge();

        assert!(!ack.reset(first));
        assert!(ack.is_acknowledged());
        assert!(ack.reset(second));
        assert!(!ack.is_acknowledged());
    }

    #[test]
    fn test_from_config() {
        let config = ClipboardConfig {
            ack_delay_ms: 500,
            idle_label: "Copy file".into(),
            copied_label: "Done".into(),
        };
        let mut ack = CopyAcknowledgment::from_config(&config);
        assert_eq!(ack.label(), "Copy file");
        assert_eq!(ack.acknowledge().delay(), Duration::from_millis(500));
        assert_eq!(ack.label(), "Done");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_arrives_after_delay() {
        let mut ack = ack();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let start = Instant::now();

        schedule_reset(ack.acknowledge(), tx);
        let pending = rx.recv().await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(2000));
        assert!(ack.reset(pending));
        assert_eq!(ack.label(), "Copy");
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_copy_extends_acknowledgment() {
        let mut ack = ack();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let start = Instant::now();

        schedule_reset(ack.acknowledge(), tx.clone());
        tokio::time::sleep(Duration::from_millis(1500)).await;
        schedule_reset(ack.acknowledge(), tx);

        let first = rx.recv().await.unwrap();
        assert!(!ack.reset(first));
        assert_eq!(ack.label(), "Copied!");

        let second = rx.recv().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(3500));
        assert!(ack.reset(second));
        assert_eq!(ack.label(), "Copy");
    }
}
