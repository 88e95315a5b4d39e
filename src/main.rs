mod domain;
mod frameworks;
mod interface_adapters;

use frameworks::server;

#[tokio::main]
async fn main() {
    server::run().await;
}
