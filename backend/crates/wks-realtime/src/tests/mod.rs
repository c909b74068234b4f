
use crate::ServerEvent;

use tokio::sync::mpsc;

/// Outbound queue pair for registering a connection in tests
pub(crate) fn test_channel() -> (mpsc::Sender<ServerEvent>, mpsc::Receiver<ServerEvent>) {
    mpsc::channel(16)
}
