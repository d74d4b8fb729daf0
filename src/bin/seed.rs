use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use nowzer::{
    repository::DataStore,
    storage::{FileStorage, StorageKey},
};

/// Writes sample content into a Nowzer data directory.
#[derive(Parser, Debug)]
#[command(name = "seed", about = "Seed the Nowzer data directory with sample content")]
struct Args {
    /// Directory holding the nowzer_*.json files
    #[arg(long, env = "NOWZER__STORAGE__DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Remove existing data files before seeding
    #[arg(long)]
    reset: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    println!("🌱 Seeding {}...", args.data_dir.display());

    let storage = FileStorage::new(&args.data_dir);

    if args.reset {
        println!("🧹 Removing existing data files...");
        for key in StorageKey::ALL {
            let path = storage.path_for(key);
            match tokio::fs::remove_file(&path).await {
                Ok(()) => println!("   removed {}", path.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
    }

    let store = DataStore::open(Arc::new(storage), true).await?;
    let counts = store.counts().await;

    println!("✅ Done:");
    println!("   {} announcements", counts.announcements);
    println!("   {} events", counts.events);
    println!("   {} gallery items", counts.gallery);
    println!("   {} activities", counts.activities);

    Ok(())
}
