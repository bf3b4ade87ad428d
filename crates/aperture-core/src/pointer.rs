//! In-process pointer listener registry
//!
//! Hosts own one hub, feed it nothing but subscriptions, and consult it to
//! decide which controllers receive a global move/release event.

use uuid::Uuid;

use crate::capability::{PointerEventSource, PointerPhase, SubscriptionId};

#[derive(Debug, Default, Clone)]
pub struct PointerHub {
    listeners: Vec<(SubscriptionId, Vec<PointerPhase>)>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Whether anybody listens for `phase` right now
    pub fn is_listening(&self, phase: PointerPhase) -> bool {
        self.listeners
            .iter()
            .any(|(_, phases)| phases.contains(&phase))
    }

    /// Subscriptions interested in `phase`, in registration order
    pub fn listeners(&self, phase: PointerPhase) -> impl Iterator<Item = SubscriptionId> + '_ {
        self.listeners
            .iter()
            .filter(move |(_, phases)| phases.contains(&phase))
            .map(|(id, _)| *id)
    }
}

impl PointerEventSource for PointerHub {
    fn subscribe(&mut self, phases: &[PointerPhase]) -> SubscriptionId {
        let id = Uuid::new_v4();
        self.listeners.push((id, phases.to_vec()));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(live, _)| *live != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_and_filter_by_phase() {
        let mut hub = PointerHub::new();
        let drag = hub.subscribe(&[PointerPhase::Move, PointerPhase::Release]);
        let press = hub.subscribe(&[PointerPhase::Press]);

        assert_eq!(hub.listener_count(), 2);
        assert_eq!(hub.listeners(PointerPhase::Move).collect::<Vec<_>>(), vec![drag]);
        assert_eq!(hub.listeners(PointerPhase::Press).collect::<Vec<_>>(), vec![press]);

        hub.unsubscribe(drag);
        assert!(!hub.is_listening(PointerPhase::Release));
        // Unknown handles are ignored
        hub.unsubscribe(drag);
        assert_eq!(hub.listener_count(), 1);
    }
}
