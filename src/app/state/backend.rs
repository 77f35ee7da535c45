use crate::backend::{BackendCall, BackendRequest};
use std::collections::HashMap;

/// Ausgangswarteschlange für Backend-Aufrufe.
///
/// Use-Cases legen Aufrufe hier ab, der Host reicht sie an den
/// `BackendWorker` weiter. Antworten kommen als `AppIntent::BackendReplied` zurück.
#[derive(Debug, Default)]
pub struct BackendQueue {
    next_id: u64,
    outbox: Vec<BackendRequest>,
    in_flight: HashMap<u64, BackendCall>,
}

impl BackendQueue {
    /// Erstellt eine leere Warteschlange.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reiht einen Aufruf ein und gibt die Request-ID zurück.
    pub fn enqueue(&mut self, call: BackendCall) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        log::debug!("Backend-Request #{} eingereiht: {:?}", id, call);
        self.in_flight.insert(id, call.clone());
        self.outbox.push(BackendRequest { id, call });
        id
    }

    /// Entnimmt alle noch nicht versendeten Requests.
    pub fn take_outbox(&mut self) -> Vec<BackendRequest> {
        std::mem::take(&mut self.outbox)
    }

    /// Noch nicht versendete Requests.
    pub fn outbox(&self) -> &[BackendRequest] {
        &self.outbox
    }

    /// Markiert einen Request als beantwortet.
    ///
    /// `false`, wenn die ID unbekannt oder bereits abgeschlossen ist.
    pub fn complete(&mut self, request_id: u64) -> bool {
        self.in_flight.remove(&request_id).is_some()
    }

    /// `true`, wenn ein offener Request die Bedingung erfüllt.
    pub fn has_pending(&self, predicate: impl Fn(&BackendCall) -> bool) -> bool {
        self.in_flight.values().any(predicate)
    }

    /// Anzahl offener Requests (eingereiht oder unterwegs).
    pub fn pending_count(&self) -> usize {
        self.in_flight.len()
    }
}

#[cfg(test)]
mod tests {
    use super::BackendQueue;
    use crate::backend::BackendCall;

    #[test]
    fn test_enqueue_take_complete() {
        let mut queue = BackendQueue::new();
        let a = queue.enqueue(BackendCall::ListZones);
        let b = queue.enqueue(BackendCall::DeleteZone {
            zone_id: "z1".into(),
        });
        assert_ne!(a, b);
        assert_eq!(queue.pending_count(), 2);

        let sent = queue.take_outbox();
        assert_eq!(sent.len(), 2);
        assert!(queue.outbox().is_empty());
        assert_eq!(queue.pending_count(), 2);

        assert!(queue.complete(a));
        assert!(!queue.complete(a));
        assert_eq!(queue.pending_count(), 1);
    }

    #[test]
    fn test_has_pending_tracks_open_calls() {
        let mut queue = BackendQueue::new();
        let id = queue.enqueue(BackendCall::DeleteZone {
            zone_id: "z1".into(),
        });
        let is_delete_z1 =
            |call: &BackendCall| matches!(call, BackendCall::DeleteZone { zone_id } if zone_id == "z1");

        queue.take_outbox();
        assert!(queue.has_pending(is_delete_z1));
        assert!(!queue.has_pending(|call| matches!(call, BackendCall::ListZones)));

        queue.complete(id);
        assert!(!queue.has_pending(is_delete_z1));
    }
}
