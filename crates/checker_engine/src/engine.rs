use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use checker_logging::check_info;

use crate::resolve::{Resolver, ResolverSettings, SimulatedResolver};
use crate::{EngineEvent, EntryId};

enum EngineCommand {
    RunBatch { entries: Vec<(EntryId, String)> },
}

/// Cloneable submit-side handle, so callers can keep submitting while
/// another thread owns the event side.
#[derive(Clone)]
pub struct BatchSubmitter {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl BatchSubmitter {
    pub fn submit(&self, entries: Vec<(EntryId, String)>) {
        let _ = self.cmd_tx.send(EngineCommand::RunBatch { entries });
    }
}

pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ResolverSettings) -> Self {
        Self::with_resolver(Arc::new(SimulatedResolver::new(settings)))
    }

    pub fn with_resolver(resolver: Arc<dyn Resolver>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                // block_on, not spawn: one batch at a time, and within a
                // batch entries resolve strictly in input order. Sequencing
                // is a semantic contract here (it paces the progress
                // display), so entry resolution must never be parallelized.
                runtime.block_on(run_command(resolver.as_ref(), command, &event_tx));
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submitter(&self) -> BatchSubmitter {
        BatchSubmitter {
            cmd_tx: self.cmd_tx.clone(),
        }
    }

    pub fn submit(&self, entries: Vec<(EntryId, String)>) {
        let _ = self.cmd_tx.send(EngineCommand::RunBatch { entries });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn run_command(
    resolver: &dyn Resolver,
    command: EngineCommand,
    event_tx: &mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::RunBatch { entries } => {
            let total = entries.len();
            check_info!("batch started, {} entries", total);
            for (entry_id, url) in entries {
                let verdict = resolver.resolve(entry_id, &url).await;
                let _ = event_tx.send(EngineEvent::EntryResolved { entry_id, verdict });
            }
            check_info!("batch completed, {} entries", total);
            let _ = event_tx.send(EngineEvent::BatchCompleted { total });
        }
    }
}
