//! Initialize .sqlaudit.toml configuration

use anyhow::Result;
use sqlaudit_core::config::{AuditConfig, CONFIG_FILE};
use std::path::Path;

pub fn run(path: Option<&Path>) -> Result<()> {
    let target_path = path.unwrap_or_else(|| Path::new("."));
    let config_path = target_path.join(CONFIG_FILE);

    if config_path.exists() {
        println!("⚠️  {} already exists at {:?}", CONFIG_FILE, config_path);
        return Ok(());
    }

    let config = AuditConfig::default();
    config.save(&config_path)?;

    println!("✅ Created {} at {:?}", CONFIG_FILE, config_path);
    println!("\nYou can now customize the configuration and run:");
    println!("  sqlaudit review queries.sql");

    Ok(())
}
