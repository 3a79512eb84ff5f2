use std::sync::{mpsc, Arc};
use std::thread;

use board_logging::{board_debug, board_error, board_info};
use jobboard_client::{ClientCommand, ClientEvent, ClientHandle, KeyValueStore};
use jobboard_core::{Effect, Msg};

use super::notify::Notifier;
use super::persistence::{save_bookmarks, save_profile};
use super::share::{Clipboard, ShareTarget};

/// Collaborators the effect runner talks to.
pub struct Surfaces {
    pub store: Arc<dyn KeyValueStore>,
    pub notifier: Arc<dyn Notifier>,
    pub share: Arc<dyn ShareTarget>,
    pub clipboard: Arc<dyn Clipboard>,
}

/// Executes effects produced by `update` and turns their outcomes back
/// into messages.
pub struct EffectRunner {
    client: ClientHandle,
    surfaces: Surfaces,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(client: ClientHandle, surfaces: Surfaces, msg_tx: mpsc::Sender<Msg>) -> Self {
        Self {
            client,
            surfaces,
            msg_tx,
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchJobs => self.client.submit(ClientCommand::FetchJobs),
                Effect::LikeJob { job_id } => {
                    board_info!("LikeJob job_id={}", job_id);
                    self.client.submit(ClientCommand::Like { job_id });
                }
                Effect::AddComment { job_id, comment } => {
                    board_info!("AddComment job_id={} text_len={}", job_id, comment.text.len());
                    self.client
                        .submit(ClientCommand::AddComment { job_id, comment });
                }
                Effect::ScheduleAnimationEnd { job_id, delay } => {
                    let msg_tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(delay);
                        let _ = msg_tx.send(Msg::LikeAnimationFinished { job_id });
                    });
                }
                Effect::PersistBookmarks(ids) => {
                    save_bookmarks(self.surfaces.store.as_ref(), &ids);
                }
                Effect::PersistProfile(profile) => {
                    save_profile(self.surfaces.store.as_ref(), &profile);
                }
                Effect::Notify(toast) => self.surfaces.notifier.notify(&toast),
                Effect::Share { job_id, payload } => {
                    if let Err(err) = self.surfaces.share.share(&payload) {
                        board_debug!("Share failed for job {}: {}", job_id, err);
                        let _ = self.msg_tx.send(Msg::ShareUnavailable {
                            job_id,
                            url: payload.url,
                        });
                    }
                }
                Effect::CopyToClipboard { text } => {
                    if let Err(err) = self.surfaces.clipboard.copy(&text) {
                        board_error!("Failed to copy to clipboard: {}", err);
                    }
                }
            }
        }
    }

    /// Drains finished client requests as messages, without blocking.
    pub fn poll_client(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.client.try_recv())
            .map(event_to_msg)
            .collect()
    }
}

pub(crate) fn event_to_msg(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::JobsFetched(Ok(jobs)) => Msg::JobsLoaded(jobs),
        ClientEvent::JobsFetched(Err(err)) => Msg::JobsLoadFailed {
            message: err.message,
        },
        ClientEvent::Liked {
            job_id,
            result: Ok(job),
        } => Msg::LikeSucceeded { job_id, job },
        ClientEvent::Liked {
            job_id,
            result: Err(err),
        } => Msg::LikeFailed {
            job_id,
            message: err.message,
        },
        ClientEvent::Commented {
            job_id,
            result: Ok(job),
        } => Msg::CommentPosted { job_id, job },
        ClientEvent::Commented {
            job_id,
            result: Err(err),
        } => Msg::CommentFailed {
            job_id,
            message: err.message,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use jobboard_client::{InMemoryJobService, MemoryStore};
    use jobboard_core::{SharePayload, Toast, LIKE_ANIMATION};

    use super::super::notify::RecordingNotifier;
    use super::super::persistence::{load_bookmarks, BOOKMARKS_KEY};
    use super::super::share::{NoShareTarget, StoreClipboard};
    use super::*;

    struct Harness {
        runner: EffectRunner,
        msg_rx: mpsc::Receiver<Msg>,
        store: Arc<MemoryStore>,
        notifier: Arc<RecordingNotifier>,
    }

    fn harness() -> Harness {
        let (msg_tx, msg_rx) = mpsc::channel();
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let client = ClientHandle::new(Arc::new(InMemoryJobService::with_sample_jobs())).unwrap();
        let surfaces = Surfaces {
            store: store.clone(),
            notifier: notifier.clone(),
            share: Arc::new(NoShareTarget),
            clipboard: Arc::new(StoreClipboard::new(store.clone())),
        };
        Harness {
            runner: EffectRunner::new(client, surfaces, msg_tx),
            msg_rx,
            store,
            notifier,
        }
    }

    fn wait_for_client(runner: &EffectRunner) -> Msg {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Some(msg) = runner.poll_client().into_iter().next() {
                return msg;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("client produced no event");
    }

    #[test]
    fn bookmarks_are_persisted_immediately() {
        let h = harness();
        h.runner.run(vec![Effect::PersistBookmarks(vec![2, 5])]);
        assert_eq!(h.store.get(BOOKMARKS_KEY).unwrap().as_deref(), Some("[2,5]"));
        assert_eq!(load_bookmarks(h.store.as_ref()), vec![2, 5]);
    }

    #[test]
    fn notifications_reach_the_notifier() {
        let h = harness();
        let toast = Toast::info("Job bookmarked", "Job has been added to your bookmarks");
        h.runner.run(vec![Effect::Notify(toast.clone())]);
        assert_eq!(h.notifier.take(), vec![toast]);
    }

    #[test]
    fn unsupported_share_reports_back_for_clipboard_fallback() {
        let h = harness();
        h.runner.run(vec![Effect::Share {
            job_id: 1,
            payload: SharePayload {
                title: "Dev at Acme".to_string(),
                text: "Check out this job opportunity: Dev at Acme".to_string(),
                url: "http://localhost:8080/".to_string(),
            },
        }]);

        let msg = h.msg_rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert_eq!(
            msg,
            Msg::ShareUnavailable {
                job_id: 1,
                url: "http://localhost:8080/".to_string()
            }
        );
    }

    #[test]
    fn clipboard_copy_writes_text() {
        let h = harness();
        h.runner.run(vec![Effect::CopyToClipboard {
            text: "http://localhost:8080/".to_string(),
        }]);
        let copied = h.store.get(StoreClipboard::KEY).unwrap().unwrap();
        assert_eq!(copied, "\"http://localhost:8080/\"");
    }

    #[test]
    fn like_effect_round_trips_through_client() {
        let h = harness();
        h.runner.run(vec![Effect::LikeJob { job_id: 2 }]);
        match wait_for_client(&h.runner) {
            Msg::LikeSucceeded { job_id, job } => {
                assert_eq!(job_id, 2);
                assert_eq!(job.id, 2);
            }
            other => panic!("unexpected msg {other:?}"),
        }
    }

    #[test]
    fn failed_comment_becomes_failure_message() {
        let h = harness();
        h.runner.run(vec![Effect::AddComment {
            job_id: 404,
            comment: jobboard_core::NewComment {
                text: "hi".to_string(),
                author: "Current User".to_string(),
                date: 1,
            },
        }]);
        assert_eq!(
            wait_for_client(&h.runner),
            Msg::CommentFailed {
                job_id: 404,
                message: "Job not found".to_string()
            }
        );
    }

    #[test]
    fn animation_end_is_delivered_after_delay() {
        let h = harness();
        let started = Instant::now();
        h.runner.run(vec![Effect::ScheduleAnimationEnd {
            job_id: 3,
            delay: LIKE_ANIMATION,
        }]);
        let msg = h.msg_rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(msg, Msg::LikeAnimationFinished { job_id: 3 });
        assert!(started.elapsed() >= LIKE_ANIMATION);
    }
}
