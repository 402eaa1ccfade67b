//! Runs the HTTP server and the interactive session side by side.

use std::io;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::error::Error;
use crate::logging::SESSION_TARGET;

/// Waits on both front ends until the server stops.
///
/// The session ending, for any reason, leaves the server running. Without a
/// terminal the prompt fails straight away and the process keeps serving.
pub async fn supervise(
    session_done: oneshot::Receiver<io::Result<()>>,
    mut server_task: JoinHandle<io::Result<()>>,
) -> Result<(), Error> {
    tokio::select! {
        session = session_done => match session {
            Ok(Ok(())) => info!(target: SESSION_TARGET, "Session closed, server keeps running"),
            Ok(Err(e)) => {
                warn!(target: SESSION_TARGET, error = %e, "Session failed, server keeps running")
            }
            Err(_) => warn!(target: SESSION_TARGET, "Session thread exited, server keeps running"),
        },
        server = &mut server_task => {
            server??;
            return Ok(());
        }
    }

    server_task.await??;
    Ok(())
}
