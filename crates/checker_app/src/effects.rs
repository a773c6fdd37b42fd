use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use checker_core::{Effect, Msg, Notice, Outcome};
use checker_engine::{BatchSubmitter, EngineEvent, EngineHandle, ResolverSettings, VerdictStatus};
use checker_logging::{check_info, check_warn};

pub struct EffectRunner {
    submitter: BatchSubmitter,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, settings: ResolverSettings) -> Self {
        let engine = EngineHandle::new(settings);
        let submitter = engine.submitter();
        spawn_event_pump(engine, msg_tx);
        Self { submitter }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RunBatch { entries } => {
                    check_info!("RunBatch with {} entries", entries.len());
                    self.submitter.submit(entries);
                }
                Effect::Notify(notice) => notify(notice),
            }
        }
    }
}

fn spawn_event_pump(engine: EngineHandle, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || loop {
        if let Some(event) = engine.try_recv() {
            let msg = match event {
                EngineEvent::EntryResolved { entry_id, verdict } => Msg::EntryResolved {
                    entry_id,
                    outcome: map_verdict(verdict.status),
                    title: verdict.title,
                },
                EngineEvent::BatchCompleted { .. } => Msg::BatchCompleted,
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        } else {
            thread::sleep(Duration::from_millis(20));
        }
    });
}

fn notify(notice: Notice) {
    match notice {
        Notice::EmptyInput => {
            check_warn!("submission rejected: no URLs to check");
        }
        Notice::TooManyEntries { submitted } => {
            check_warn!("submission rejected: {} URLs exceeds the limit", submitted);
        }
        Notice::CheckCompleted { stats } => {
            check_info!(
                "check completed: {} indexed, {} not indexed, {} errors",
                stats.indexed,
                stats.not_indexed,
                stats.errors
            );
        }
    }
}

fn map_verdict(status: VerdictStatus) -> Outcome {
    match status {
        VerdictStatus::Indexed => Outcome::Indexed,
        VerdictStatus::NotIndexed => Outcome::NotIndexed,
        VerdictStatus::Error => Outcome::Error,
    }
}
