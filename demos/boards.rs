//! Example listing the boards a local node is subscribed to
//!
//! This example shows:
//! - Installing a logger to see requests being dispatched
//! - Deriving a context with a five second deadline
//! - Calling `get_boards` and printing the raw reply
//!
//! Usage: `cargo run --example boards -- <port>`

use std::time::Duration;

use bbsclient::{catalog, Context, Error};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    let port: u16 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or(7777);

    // Give the node five seconds to answer
    let ctx = Context::background().with_timeout(Duration::from_secs(5));

    match catalog::get_boards().call(&ctx, port).await {
        Ok(body) => {
            println!("Boards:");
            println!("{}", String::from_utf8_lossy(&body));
        }
        Err(Error::Timeout) => println!("The node on port {port} did not answer in time."),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
