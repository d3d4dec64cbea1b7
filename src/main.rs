//! The reflector server binary.
//!
//! Runs the parsing reflector on the default address with no arguments.
//! Stop it with Ctrl+C.

use log::info;
use reflecho::{HttpServer, Reflector, ServerConfig, ServerError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ServerError> {
    // Initialize the logger
    env_logger::init();

    let config = ServerConfig::default();
    let handler = Reflector::new(config.read_buffer_size);
    let server = HttpServer::new(config, handler);

    server.run().await?;

    info!("Server stopped");
    Ok(())
}
