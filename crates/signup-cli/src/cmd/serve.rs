use anyhow::{Context, Result};
use signup_core::{seed, InMemoryStore};
use signup_server::AppState;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub fn run(
    seed_path: Option<&Path>,
    host: &str,
    port: u16,
    static_dir: Option<PathBuf>,
    open_browser: bool,
) -> Result<()> {
    let directory = seed::resolve(seed_path).with_context(|| match seed_path {
        Some(p) => format!("loading seed from {}", p.display()),
        None => "loading built-in seed".to_string(),
    })?;
    tracing::info!(activities = directory.len(), "directory ready");

    let mut state = AppState::new(Arc::new(InMemoryStore::new(directory)));
    if let Some(dir) = static_dir {
        anyhow::ensure!(dir.is_dir(), "static dir {} does not exist", dir.display());
        state = state.with_static_dir(dir);
    }

    let rt = tokio::runtime::Runtime::new()?;
    let addr = format!("{host}:{port}");

    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("binding {addr}"))?;
        let actual_port = listener.local_addr()?.port();

        let pid = std::process::id();
        println!("Activity signups → http://localhost:{actual_port}  (PID {pid})");

        tokio::select! {
            res = signup_server::serve_on(state, listener, open_browser) => res,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                Ok(())
            }
        }
    })
}
