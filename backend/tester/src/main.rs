use std::sync::Arc;

use clap::{Parser, ValueEnum};
use client::{
    Enforcement, GateConfig, HttpStatusSource, MaintenanceCache, MaintenanceGate, Rendered,
};
use shared::{MaintenanceFallbackView, Role, SETTINGS_ROUTE, Session, Settings};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Principal {
    Anonymous,
    User,
    Admin,
}

impl Principal {
    fn session(self) -> Session {
        match self {
            Principal::Anonymous => Session::anonymous(),
            Principal::User => Session::authenticated(Role::User),
            Principal::Admin => Session::authenticated(Role::Admin),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(long, default_value = "http://localhost:1111")]
    url: String,

    #[arg(long, value_enum, default_value = "anonymous")]
    principal: Principal,

    /// Mount the redirecting gate variant instead of the in-place one.
    #[arg(long)]
    redirect: bool,

    #[arg(long)]
    no_admin_bypass: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let http = reqwest::Client::new();

    let cache = MaintenanceCache::new(Arc::new(HttpStatusSource::new(http.clone(), &args.url)));
    let mut gate = MaintenanceGate::new(
        cache.clone(),
        GateConfig {
            admin_bypass: !args.no_admin_bypass,
            enforcement: if args.redirect {
                Enforcement::Redirect
            } else {
                Enforcement::InPlace
            },
        },
    );

    gate.mount().await;

    let entry = cache.snapshot();
    println!("Maintenance mode: {}", entry.is_maintenance_mode);
    if let Some(error) = &entry.error {
        println!("Check failed: {error}");
    }

    let session = args.principal.session();
    println!("Decision: {:?}\n", gate.decision(&session));

    let settings = fetch_settings(&http, &args.url).await.unwrap_or_else(|e| {
        println!("Contact details unavailable: {e}");
        Settings::default()
    });

    let rendered = gate.render(
        &session,
        || "Storefront\n".to_string(),
        || MaintenanceFallbackView::from_settings(&settings).to_string(),
    );

    match rendered {
        Rendered::Pending => println!("Still loading"),
        Rendered::Children(page) | Rendered::Fallback(page) => print!("{page}"),
        Rendered::Redirect(route) => println!("Redirect to {}{route}", args.url),
    }

    Ok(())
}

async fn fetch_settings(http: &reqwest::Client, url: &str) -> Result<Settings, reqwest::Error> {
    http.get(format!("{}{SETTINGS_ROUTE}", url.trim_end_matches('/')))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}
