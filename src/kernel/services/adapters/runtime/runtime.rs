use crate::kernel::services::ports::{HostReply, HostRequest, HostService};
use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};

/// Runs host requests off the display thread.
///
/// One worker drains a FIFO queue and waits for each request before taking the next,
/// so replies arrive in submission order. A write followed by a read of the same path
/// always sees the write.
///
/// The worker needs a multi-thread runtime. A current-thread runtime only polls tasks
/// inside `block_on`, which nothing here calls, so a build failure is returned.
pub struct AsyncRuntime {
    // Dropping the runtime stops the worker.
    _runtime: tokio::runtime::Runtime,
    queue: UnboundedSender<HostRequest>,
}

impl AsyncRuntime {
    pub fn new(tx: Sender<HostReply>, host: Arc<dyn HostService>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .inspect_err(|e| tracing::error!(error = %e, "failed to create host runtime"))?;

        let (queue, mut rx) = unbounded_channel::<HostRequest>();
        runtime.spawn(async move {
            while let Some(request) = rx.recv().await {
                let op = request.op_name();
                let failure = request.failed("host worker failed");
                let host = host.clone();
                let reply = match tokio::task::spawn_blocking(move || host.execute(request)).await
                {
                    Ok(reply) => reply,
                    Err(e) => {
                        tracing::error!(op, error = %e, "host request panicked");
                        failure
                    }
                };
                if let Some(error) = reply.error() {
                    tracing::debug!(op, error = %error, "host request failed");
                }
                if tx.send(reply).is_err() {
                    tracing::debug!("reply receiver dropped, host worker stopping");
                    break;
                }
            }
        });

        Ok(Self {
            _runtime: runtime,
            queue,
        })
    }

    pub fn submit(&self, request: HostRequest) {
        tracing::trace!(op = request.op_name(), path = %request.path().display(), "host request");
        if let Err(e) = self.queue.send(request) {
            tracing::error!(op = e.0.op_name(), "host worker is gone, request dropped");
        }
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/runtime.rs"]
mod tests;
