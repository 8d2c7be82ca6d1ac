use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use synapticore_lite::config::{init_tracing, load_env, AppConfig};
use synapticore_lite::docs::{DOCS_PATH, REDOC_PATH};
use synapticore_lite::export::{default_sources, export_openapi_cancellable, ExportError};

const EXIT_FAILURE: u8 = 1;
const EXIT_INTERRUPTED: u8 = 130;

#[tokio::main]
async fn main() -> ExitCode {
    load_env();
    init_tracing();

    tracing::info!("=== SynaptiCore Lite OpenAPI exporter ===");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid configuration");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let cancel = Arc::new(AtomicBool::new(false));
    let signal = {
        let cancel = Arc::clone(&cancel);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("interrupt received, stopping before the next stage");
                cancel.store(true, Ordering::SeqCst);
            }
        })
    };

    let output = config.openapi_output.clone();
    let task = {
        let cancel = Arc::clone(&cancel);
        tokio::task::spawn_blocking(move || export_openapi_cancellable(&default_sources(), &output, &cancel))
    };

    let outcome = task.await;
    signal.abort();

    match outcome {
        Ok(Ok(report)) => {
            tracing::info!(
                path = %report.path.display(),
                bytes = report.bytes,
                paths = report.paths,
                source = report.source,
                "OpenAPI document written"
            );
            if report.paths > 0 {
                tracing::info!("browse the docs at http://localhost:{}{}", config.port, DOCS_PATH);
                tracing::info!("or ReDoc at http://localhost:{}{}", config.port, REDOC_PATH);
            }
            if cancel.load(Ordering::SeqCst) {
                tracing::warn!("interrupt arrived after the document was written");
            }
            ExitCode::SUCCESS
        }
        Ok(Err(ExportError::Cancelled { stage })) => {
            tracing::info!("export cancelled before {}", stage);
            ExitCode::from(EXIT_INTERRUPTED)
        }
        Ok(Err(err)) => {
            tracing::error!(error = %err, "export failed");
            ExitCode::from(EXIT_FAILURE)
        }
        Err(err) => {
            tracing::error!(error = %err, "export task aborted unexpectedly");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
