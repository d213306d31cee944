//! Walk through the zone lifecycle against a live PowerDNS server
//!
//! Creates a native zone, manages a few RRsets, creates a TSIG key, changes
//! the zone and deletes everything again.
//!
//! ```bash
//! export PDNS_BASE_URL=http://localhost:8081
//! export PDNS_API_KEY=apipw
//! export PDNS_DEMO_ZONE=demo.example.com
//! cargo run -p demos --bin zone_operations
//! ```
//!
//! Ctrl-C cancels the call in flight.

use anyhow::{Context, Result};
use pdns_client::models::{Comment, MetadataKind, RRType, RRset, Zone};
use pdns_client::{CancellationToken, Client, ClientConfig};
use std::env;
use std::process::ExitCode;
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Copy)]
enum DemoExitCode {
    Success = 0,
    ConfigError = 1,
    RuntimeError = 2,
}

impl From<DemoExitCode> for ExitCode {
    fn from(code: DemoExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

fn main() -> ExitCode {
    let config = match ClientConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return DemoExitCode::ConfigError.into();
        }
    };

    let log_level = match env::var("PDNS_LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return DemoExitCode::ConfigError.into();
    }

    info!("Using {:?}", config);

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return DemoExitCode::RuntimeError.into();
        }
    };

    rt.block_on(async {
        match run(config).await {
            Ok(()) => DemoExitCode::Success,
            Err(e) => {
                error!("Demo failed: {:#}", e);
                DemoExitCode::RuntimeError
            }
        }
    })
    .into()
}

async fn run(config: ClientConfig) -> Result<()> {
    let zone_name = env::var("PDNS_DEMO_ZONE").unwrap_or_else(|_| "demo.example.com".to_string());

    let shutdown = CancellationToken::new();
    let client = Client::from_config(&config)
        .context("failed to create PowerDNS client")?
        .with_cancellation(shutdown.clone());

    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, cancelling");
                shutdown.cancel();
            }
        }
    });

    let server = client.servers().get(client.vhost()).await.context("server is not reachable")?;
    info!(
        "Connected to {} {}",
        server.daemon_type.as_deref().unwrap_or("unknown"),
        server.version.as_deref().unwrap_or("unknown version")
    );

    let zone = client
        .zones()
        .add_native(&zone_name, &["ns1.example.com.", "ns2.example.com."])
        .await
        .with_context(|| format!("failed to create zone {zone_name}"))?;
    info!("Created zone {}", zone.id.as_deref().unwrap_or_default());

    let www = format!("www.{zone_name}");
    let records = client.records();
    records.add(&zone_name, &www, RRType::A, 300, ["192.0.2.10"]).await?;
    records
        .change(&zone_name, &www, RRType::A, 300, ["192.0.2.10", "192.0.2.11"])
        .await?;

    let commented = RRset::replace(&www, RRType::A, 300, ["192.0.2.12"])
        .with_comments(vec![Comment::new("managed by zone_operations", "demo")]);
    records.patch_rrset(&zone_name, commented).await?;

    records
        .add(&zone_name, &zone_name, RRType::MX, 3600, [format!("10 mail.{zone_name}")])
        .await?;
    records
        .add(&zone_name, &zone_name, RRType::TXT, 3600, ["\"v=spf1 mx -all\""])
        .await?;

    for set in records.get(&zone_name, &www, None).await? {
        info!(
            "{} {} -> {} record(s)",
            set.name.as_deref().unwrap_or_default(),
            set.rr_type.as_ref().map(ToString::to_string).unwrap_or_default(),
            set.records.len()
        );
    }

    let tsig = client
        .tsig_keys()
        .create(&format!("{zone_name}-transfer"), "hmac-sha256", "")
        .await?;
    let tsig_id = tsig.id.clone().unwrap_or_default();
    info!("Created TSIG key {}", tsig_id);

    client
        .metadata()
        .set(&zone_name, MetadataKind::TsigAllowAxfr, [tsig_id.as_str()])
        .await?;

    let change = Zone {
        account: Some("demo".to_string()),
        ..Zone::default()
    };
    client.zones().change(&zone_name, &change).await?;

    let zone = client.zones().get(&zone_name).await?;
    info!(
        "Zone {} serial {} with {} RRset(s)",
        zone.name.as_deref().unwrap_or_default(),
        zone.serial.unwrap_or_default(),
        zone.rrsets.len()
    );

    println!("{}", client.zones().export(&zone_name).await?);

    records.delete(&zone_name, &www, RRType::A).await?;
    client.tsig_keys().delete(&tsig_id).await?;
    client.zones().delete(&zone_name).await?;
    info!("Cleaned up {}", zone_name);

    Ok(())
}
