//! `railjson init` - Write a default railjson.toml

use railjson_gen::core::config::GeneratorConfig;
use railjson_gen::core::error::{ConfigError, InfraError, InfraResult};
use std::path::Path;

/// Run the init command in `root`
pub fn run_init(root: &Path, force: bool) -> InfraResult<()> {
  if let Some(existing) = GeneratorConfig::find_config_path(root)
    && !force
  {
    return Err(InfraError::Config(ConfigError::AlreadyExists { path: existing }));
  }

  let path = GeneratorConfig::default().save(root)?;

  println!("✅ Created {}", path.display());
  println!();
  println!("Next steps:");
  println!("  railjson check <DESCRIPTION>");
  println!("  railjson generate <DESCRIPTION> -o infra.json");
  Ok(())
}
