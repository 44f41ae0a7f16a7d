use sim_gate::{cli, infra::logging};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_tracing();

    // Verdict codes come back as Ok; environment errors are fatal and use the
    // generic failure code, distinct from the verdict codes.
    match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}
