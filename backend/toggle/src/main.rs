use clap::{Parser, ValueEnum};
use server::database::RedisSettingsStore;
use toggle::{SettingsUpdate, update_settings};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    On,
    Off,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    mode: Mode,

    #[arg(long)]
    contact_email: Option<String>,

    #[arg(long)]
    contact_phone: Option<String>,

    /// Remove stored contact details before applying new ones.
    #[arg(long)]
    clear_contact: bool,

    #[arg(long, default_value = "redis://127.0.0.1:6379")]
    redis_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let store = RedisSettingsStore::connect(&args.redis_url).await?;
    let settings = update_settings(
        &store,
        SettingsUpdate {
            maintenance_mode: matches!(args.mode, Mode::On),
            contact_email: args.contact_email,
            contact_phone: args.contact_phone,
            clear_contact: args.clear_contact,
        },
    )
    .await?;

    println!("{}", serde_json::to_string_pretty(&settings)?);

    Ok(())
}
