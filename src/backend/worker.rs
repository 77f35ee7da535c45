//! Hintergrund-Thread für Backend-Aufrufe.

use super::{execute, BackendReply, BackendRequest, ZoneBackend};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::JoinHandle;

/// Führt Backend-Requests nacheinander in einem eigenen Thread aus.
///
/// Der UI-Thread reicht Requests per `submit` ein und holt Antworten mit
/// `drain_replies` ab; der State wird nur im UI-Thread verändert.
pub struct BackendWorker {
    requests: Option<Sender<BackendRequest>>,
    replies: Receiver<BackendReply>,
    handle: Option<JoinHandle<()>>,
}

impl BackendWorker {
    /// Startet den Worker-Thread mit dem gegebenen Backend.
    pub fn spawn(backend: Box<dyn ZoneBackend>) -> anyhow::Result<Self> {
        let (request_tx, request_rx) = mpsc::channel::<BackendRequest>();
        let (reply_tx, reply_rx) = mpsc::channel::<BackendReply>();

        let handle = std::thread::Builder::new()
            .name("zone-backend".into())
            .spawn(move || {
                for request in request_rx {
                    let reply = execute(backend.as_ref(), request);
                    if reply_tx.send(reply).is_err() {
                        break;
                    }
                }
                log::debug!("Backend-Worker beendet");
            })?;

        Ok(Self {
            requests: Some(request_tx),
            replies: reply_rx,
            handle: Some(handle),
        })
    }

    /// Reicht Requests an den Worker weiter.
    pub fn submit(&self, requests: Vec<BackendRequest>) -> anyhow::Result<()> {
        let Some(tx) = &self.requests else {
            anyhow::bail!("Backend-Worker ist bereits beendet");
        };
        for request in requests {
            tx.send(request)
                .map_err(|_| anyhow::anyhow!("Backend-Worker nicht mehr erreichbar"))?;
        }
        Ok(())
    }

    /// Holt alle bisher eingetroffenen Antworten ohne zu blockieren.
    pub fn drain_replies(&self) -> Vec<BackendReply> {
        let mut replies = Vec::new();
        loop {
            match self.replies.try_recv() {
                Ok(reply) => replies.push(reply),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Backend-Worker hat den Antwortkanal geschlossen");
                    break;
                }
            }
        }
        replies
    }
}

impl Drop for BackendWorker {
    fn drop(&mut self) {
        // Sender schließen beendet die Empfangsschleife des Threads
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("Backend-Worker ist abgestürzt");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendCall, BackendOutcome, CreateZoneRequest};
    use crate::core::{ZoneRecord, ZoneType};
    use std::time::{Duration, Instant};

    struct EmptyBackend;

    impl ZoneBackend for EmptyBackend {
        fn list_zones(&self) -> anyhow::Result<Vec<ZoneRecord>> {
            Ok(Vec::new())
        }
        fn create_zone(&self, _: &CreateZoneRequest) -> anyhow::Result<ZoneRecord> {
            anyhow::bail!("nicht unterstützt")
        }
        fn edit_zone(&self, _: &str, _: &str, _: ZoneType) -> anyhow::Result<ZoneRecord> {
            anyhow::bail!("nicht unterstützt")
        }
        fn delete_zone(&self, _: &str) -> anyhow::Result<()> {
            Ok(())
        }
        fn refresh_zone(&self, _: &str) -> anyhow::Result<ZoneRecord> {
            anyhow::bail!("nicht unterstützt")
        }
    }

    #[test]
    fn test_worker_delivers_replies_in_order() {
        let worker = BackendWorker::spawn(Box::new(EmptyBackend)).expect("Thread startet");
        worker
            .submit(vec![
                BackendRequest {
                    id: 1,
                    call: BackendCall::ListZones,
                },
                BackendRequest {
                    id: 2,
                    call: BackendCall::DeleteZone {
                        zone_id: "z1".into(),
                    },
                },
            ])
            .expect("Submit klappt");

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut replies = Vec::new();
        while replies.len() < 2 && Instant::now() < deadline {
            replies.extend(worker.drain_replies());
            std::thread::sleep(Duration::from_millis(5));
        }

        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0].request_id, 1);
        assert_eq!(replies[0].result, Ok(BackendOutcome::Zones(Vec::new())));
        assert_eq!(replies[1].result, Ok(BackendOutcome::Deleted));
    }
}
