use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use board_logging::{board_debug, board_error};

use crate::{ClientCommand, ClientError, ClientEvent, FailureKind, JobService};

/// Runs [`JobService`] calls on a background tokio runtime.
///
/// Commands are fire-and-forget; every command eventually yields exactly
/// one [`ClientEvent`]. Requests run concurrently and cannot be cancelled.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_tx: mpsc::Sender<ClientEvent>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(service: Arc<dyn JobService>) -> Result<Self, ClientError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ClientCommand>();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("jobboard-client")
            .enable_all()
            .build()
            .map_err(|err| ClientError::new(FailureKind::Disconnected, err.to_string()))?;

        let worker_tx = event_tx.clone();
        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let service = service.clone();
                let event_tx = worker_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(service.as_ref(), command).await;
                    if event_tx.send(event).is_err() {
                        board_debug!("Client event dropped: receiver closed");
                    }
                });
            }
            board_debug!("Client command channel closed");
        });

        Ok(Self {
            cmd_tx,
            event_tx,
            event_rx,
        })
    }

    /// A command that cannot reach the runtime still resolves, as a
    /// `Disconnected` failure.
    pub fn submit(&self, command: ClientCommand) {
        if let Err(mpsc::SendError(command)) = self.cmd_tx.send(command) {
            board_error!("Client runtime gone, failing {:?}", command);
            let error = ClientError::new(
                FailureKind::Disconnected,
                "The job service is no longer available",
            );
            // The receiver lives in `self`, so this cannot fail.
            let _ = self.event_tx.send(ClientEvent::failed(command, error));
        }
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<ClientEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(service: &dyn JobService, command: ClientCommand) -> ClientEvent {
    match command {
        ClientCommand::FetchJobs => ClientEvent::JobsFetched(service.fetch_jobs().await),
        ClientCommand::Like { job_id } => ClientEvent::Liked {
            job_id,
            result: service.like_job(job_id).await,
        },
        ClientCommand::AddComment { job_id, comment } => ClientEvent::Commented {
            job_id,
            result: service.add_comment(job_id, &comment).await,
        },
    }
}
