use crate::events::AppEvent;
use crate::sys::command::Command;
use async_channel::Sender;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

const SOCKET_NAME: &str = "compass.sock";
const FALLBACK_SOCKET_PATH: &str = "/tmp/compass.sock";

/// `$XDG_RUNTIME_DIR/compass/compass.sock`, or a fixed path under `/tmp`.
pub fn socket_path() -> PathBuf {
    xdg::BaseDirectories::with_prefix("compass")
        .place_runtime_file(SOCKET_NAME)
        .unwrap_or_else(|_| PathBuf::from(FALLBACK_SOCKET_PATH))
}

pub async fn run_server(tx: Sender<AppEvent>) {
    let path = socket_path();

    // Cleanup old socket if it exists
    if fs_err::metadata(&path).is_ok() {
        let _ = fs_err::remove_file(&path);
    }

    let listener = match UnixListener::bind(&path) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket {}: {}", path.display(), e);
            return;
        }
    };
    log::info!("Listening for commands on {}", path.display());

    loop {
        match listener.accept().await {
            Ok((mut stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let reader = BufReader::new(&mut stream);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        match line.parse::<Command>() {
                            Ok(command) => {
                                if tx.send(AppEvent::from(command)).await.is_err() {
                                    break;
                                }
                            }
                            Err(e) => log::warn!("Ignoring command '{}': {}", line.trim(), e),
                        }
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}
