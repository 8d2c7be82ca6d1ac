use std::process::ExitCode;

use synapticore_lite::app::api_routes;
use synapticore_lite::config::{init_tracing, load_env, ServiceInfo};
use synapticore_lite::smoke::run_smoke_checks;
use synapticore_lite::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    load_env();
    init_tracing();

    let router = api_routes(AppState::new(ServiceInfo::default()));
    let report = run_smoke_checks(router).await;

    for failure in &report.failures {
        println!("FAIL {}: {}", failure.name, failure.reason);
    }
    println!("{} passed, {} failed", report.passed, report.failed);

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
