//! Debate observer port
//!
//! Defines how a running debate reports snapshots and progress to its
//! single consumer.

use debate_domain::DebatePhase;
use tokio::sync::mpsc;

/// Callback for updates during a debate run
///
/// Snapshots are last-write-wins: each one is the whole transcript so far
/// plus any reply still streaming, so a consumer only needs the latest.
/// Implementations live in the presentation layer.
pub trait DebateObserver: Send + Sync {
    /// Called on every sequencer state transition.
    fn on_phase(&self, _phase: &DebatePhase) {}

    /// Called with the full transcript each time it grows.
    fn on_snapshot(&self, snapshot: &str);

    /// Called after both participants finished `round` (1-indexed).
    fn on_round_complete(&self, _round: u32, _rounds: u32) {}
}

/// No-op observer for when nobody is watching
pub struct NoProgress;

impl DebateObserver for NoProgress {
    fn on_snapshot(&self, _snapshot: &str) {}
}

/// One item on a debate's update channel.
#[derive(Debug, Clone, PartialEq)]
pub enum DebateUpdate {
    Phase(DebatePhase),
    Snapshot(String),
    RoundComplete { round: u32, rounds: u32 },
}

impl DebateUpdate {
    /// Fraction of rounds finished, for `RoundComplete` updates.
    pub fn progress(&self) -> Option<f64> {
        match self {
            DebateUpdate::RoundComplete { round, rounds } if *rounds > 0 => {
                Some(f64::from(*round) / f64::from(*rounds))
            }
            _ => None,
        }
    }

    /// Replay this update into an observer on the receiving side.
    pub fn deliver(&self, observer: &dyn DebateObserver) {
        match self {
            DebateUpdate::Phase(phase) => observer.on_phase(phase),
            DebateUpdate::Snapshot(snapshot) => observer.on_snapshot(snapshot),
            DebateUpdate::RoundComplete { round, rounds } => {
                observer.on_round_complete(*round, *rounds)
            }
        }
    }
}

/// Adapter: `DebateObserver` → ordered mpsc channel
///
/// Sends are best-effort; once the receiver is dropped the debate keeps
/// running and updates are discarded.
pub struct ChannelObserver {
    sender: mpsc::UnboundedSender<DebateUpdate>,
}

impl ChannelObserver {
    pub fn new(sender: mpsc::UnboundedSender<DebateUpdate>) -> Self {
        Self { sender }
    }

    /// Create an observer together with the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<DebateUpdate>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }

    fn send(&self, update: DebateUpdate) {
        let _ = self.sender.send(update);
    }
}

impl DebateObserver for ChannelObserver {
    fn on_phase(&self, phase: &DebatePhase) {
        self.send(DebateUpdate::Phase(*phase));
    }

    fn on_snapshot(&self, snapshot: &str) {
        self.send(DebateUpdate::Snapshot(snapshot.to_string()));
    }

    fn on_round_complete(&self, round: u32, rounds: u32) {
        self.send(DebateUpdate::RoundComplete { round, rounds });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_preserves_order() {
        let (observer, mut rx) = ChannelObserver::channel();
        observer.on_phase(&DebatePhase::Announcing);
        observer.on_snapshot("a");
        observer.on_snapshot("ab");
        observer.on_round_complete(1, 2);

        assert_eq!(rx.try_recv().unwrap(), DebateUpdate::Phase(DebatePhase::Announcing));
        assert_eq!(rx.try_recv().unwrap(), DebateUpdate::Snapshot("a".to_string()));
        assert_eq!(rx.try_recv().unwrap(), DebateUpdate::Snapshot("ab".to_string()));
        assert_eq!(rx.try_recv().unwrap().progress(), Some(0.5));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_send_after_receiver_dropped_is_ignored() {
        let (observer, rx) = ChannelObserver::channel();
        drop(rx);
        observer.on_snapshot("nobody listening");
    }

    #[test]
    fn test_deliver_replays_into_observer() {
        let (observer, mut rx) = ChannelObserver::channel();
        let (relay, mut relayed) = ChannelObserver::channel();
        observer.on_phase(&DebatePhase::Complete);
        observer.on_snapshot("done");
        observer.on_round_complete(2, 2);
        drop(observer);

        while let Some(update) = rx.blocking_recv() {
            update.deliver(&relay);
        }
        assert_eq!(relayed.try_recv().unwrap(), DebateUpdate::Phase(DebatePhase::Complete));
        assert_eq!(relayed.try_recv().unwrap(), DebateUpdate::Snapshot("done".to_string()));
        assert_eq!(
            relayed.try_recv().unwrap(),
            DebateUpdate::RoundComplete { round: 2, rounds: 2 }
        );
    }

    #[test]
    fn test_progress_only_for_round_updates() {
        assert_eq!(DebateUpdate::Snapshot("x".to_string()).progress(), None);
        assert_eq!(
            DebateUpdate::RoundComplete { round: 3, rounds: 3 }.progress(),
            Some(1.0)
        );
    }
}
