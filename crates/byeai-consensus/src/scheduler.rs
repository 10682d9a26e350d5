//! Background revision scheduler.
//!
//! A bounded queue feeding one worker task. Passes run one at a time, each in
//! its own transaction on the writer connection, after the vote that
//! triggered them has already been answered. Failed passes are logged and
//! reported through their handle; nothing is retried.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use byeai_core::config::RevisionConfig;
use byeai_core::errors::{ByeaiError, ByeaiResult};
use byeai_core::models::RevisionReport;
use byeai_observability::tracing_setup::events;
use byeai_storage::StorageEngine;

use crate::revision;

struct RevisionJob {
    item_id: String,
    reply: oneshot::Sender<ByeaiResult<RevisionReport>>,
}

/// Completion handle for one scheduled pass. Dropping it does not cancel the pass.
#[derive(Debug)]
pub struct RevisionHandle {
    item_id: String,
    rx: oneshot::Receiver<ByeaiResult<RevisionReport>>,
}

impl RevisionHandle {
    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    /// Wait for the pass to finish and return its outcome.
    pub async fn wait(self) -> ByeaiResult<RevisionReport> {
        self.rx.await.map_err(|_| {
            ByeaiError::SchedulerClosed(format!("revision of {} was dropped", self.item_id))
        })?
    }
}

/// Serializes reputation revision passes behind a single worker.
pub struct RevisionScheduler {
    sender: Mutex<Option<mpsc::Sender<RevisionJob>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl RevisionScheduler {
    /// Spawn the worker. Must be called from within a tokio runtime.
    pub fn start(storage: Arc<StorageEngine>, config: &RevisionConfig) -> Self {
        let (tx, rx) = mpsc::channel(config.queue_size.max(1));
        let worker = tokio::spawn(run_worker(storage, rx));
        Self {
            sender: Mutex::new(Some(tx)),
            worker: Mutex::new(Some(worker)),
        }
    }

    /// Queue a pass over `item_id`. Waits for room when the queue is full.
    pub async fn schedule(&self, item_id: &str) -> ByeaiResult<RevisionHandle> {
        let sender = self.sender()?;
        let (job, handle) = job_for(item_id);
        sender
            .send(job)
            .await
            .map_err(|_| ByeaiError::SchedulerClosed("revision worker stopped".to_string()))?;
        debug!(item_id, "revision scheduled");
        Ok(handle)
    }

    /// Queue a pass over `item_id` without waiting. When the queue is full
    /// the job is handed to a short-lived task that waits for room, so the
    /// caller returns at once either way. Overflowed passes may run after
    /// passes queued later. Must be called from within a tokio runtime.
    pub fn schedule_nowait(&self, item_id: &str) -> ByeaiResult<RevisionHandle> {
        let sender = self.sender()?;
        let (job, handle) = job_for(item_id);
        match sender.try_send(job) {
            Ok(()) => debug!(item_id, "revision scheduled"),
            Err(TrySendError::Full(job)) => {
                debug!(item_id, "revision queue full, enqueueing in background");
                // If the worker is gone by then the job is dropped and the
                // handle reports the scheduler as closed.
                tokio::spawn(async move {
                    let _ = sender.send(job).await;
                });
            }
            Err(TrySendError::Closed(_)) => {
                return Err(ByeaiError::SchedulerClosed(
                    "revision worker stopped".to_string(),
                ));
            }
        }
        Ok(handle)
    }

    fn sender(&self) -> ByeaiResult<mpsc::Sender<RevisionJob>> {
        self.sender
            .lock()
            .map_err(|e| ByeaiError::SchedulerClosed(format!("sender lock poisoned: {e}")))?
            .clone()
            .ok_or_else(|| ByeaiError::SchedulerClosed("scheduler shut down".to_string()))
    }

    /// Stop accepting work, let the worker drain what is queued (including
    /// overflow still waiting for room), and join it.
    pub async fn shutdown(&self) {
        let sender = self.sender.lock().ok().and_then(|mut s| s.take());
        drop(sender);

        let worker = self.worker.lock().ok().and_then(|mut w| w.take());
        if let Some(worker) = worker {
            if let Err(e) = worker.await {
                tracing::warn!(error = %e, "revision worker ended abnormally");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.sender.lock().map(|s| s.is_some()).unwrap_or(false)
    }
}

fn job_for(item_id: &str) -> (RevisionJob, RevisionHandle) {
    let (reply, rx) = oneshot::channel();
    let job = RevisionJob {
        item_id: item_id.to_string(),
        reply,
    };
    let handle = RevisionHandle {
        item_id: item_id.to_string(),
        rx,
    };
    (job, handle)
}

async fn run_worker(storage: Arc<StorageEngine>, mut rx: mpsc::Receiver<RevisionJob>) {
    info!("revision worker started");
    while let Some(job) = rx.recv().await {
        let result = storage
            .write(|conn| revision::revise_reputations(conn, &job.item_id))
            .await;
        if let Err(e) = &result {
            events::revision_failed(&job.item_id, &e.to_string());
        }
        // The submitter may have dropped its handle.
        let _ = job.reply.send(result);
    }
    info!("revision worker stopped");
}
