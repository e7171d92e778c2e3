//! Simple example of using proxstore.

use proxstore::{BoxError, ClientFactory, PoolOptions, Protocol, ProxStore};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let factory: ClientFactory<reqwest::Client> =
        Arc::new(|proxy| -> Result<reqwest::Client, BoxError> {
            let mut builder = reqwest::Client::builder().timeout(Duration::from_secs(30));
            if !proxy.is_empty() && !proxy.is_direct() {
                builder = builder.proxy(reqwest::Proxy::all(proxy.to_string())?);
            }
            Ok(builder.build()?)
        });

    let pool: ProxStore<reqwest::Client> = ProxStore::with_options(
        PoolOptions::builder().allow_direct(true).build(),
        Some(factory),
    );

    pool.load_line("socks5://127.0.0.1:1080", None)?;
    pool.load_line("127.0.0.1:8080:user:pass", Some(Protocol::Http))?;

    println!("{} proxies loaded", pool.count());
    for _ in 0..4 {
        if let Some(proxy) = pool.next() {
            println!("next proxy: {proxy}");
        }
    }

    // The direct sentinel gets a plain client from the same factory.
    let direct = pool.direct().expect("direct connections are allowed");
    if let Some(client) = direct.get_client("")? {
        println!("Sending request without a proxy...");
        let response = client.get("https://httpbin.org/ip").send().await?;
        println!("Status: {}", response.status());
        println!("Response: {}", response.text().await?);
    }

    Ok(())
}
