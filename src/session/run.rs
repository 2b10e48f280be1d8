//! Single-task dispatch loop driving a [`Session`].

use super::{Session, TurnState};
use crate::stream::Connector;
use crate::ui::RenderSink;
use std::future::Future;
use tokio::sync::mpsc;
use url::Url;

/// Run the interactive chat loop until input ends or `shutdown` resolves.
///
/// Input lines and stream events are consumed by one loop, so session state
/// is never shared. When input ends mid-turn, the in-flight reply is allowed
/// to finish first. Any live connection is released before returning.
pub async fn run_interactive<C, R, S>(
    endpoint: Url,
    connector: C,
    renderer: R,
    mut lines: mpsc::Receiver<String>,
    shutdown: S,
) where
    C: Connector,
    R: RenderSink,
    S: Future<Output = ()>,
{
    let (mut session, mut events) = Session::new(endpoint, connector, renderer);
    session.renderer().startup_hint();
    session.renderer().prompt();

    tokio::pin!(shutdown);
    let mut input_open = true;
    loop {
        tokio::select! {
            () = &mut shutdown => {
                tracing::info!("interrupt received; shutting down");
                break;
            }
            line = lines.recv(), if input_open => match line {
                Some(line) => {
                    session.submit_line(&line);
                }
                None => {
                    tracing::debug!("input closed");
                    input_open = false;
                }
            },
            Some(event) = events.recv() => session.handle_event(event),
        }
        if !input_open && session.state() == TurnState::Idle {
            break;
        }
    }

    if session.shutdown() {
        tracing::debug!("released in-flight connection on exit");
    }
}
