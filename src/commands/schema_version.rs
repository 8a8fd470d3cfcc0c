//! `railjson schema-version` - Print the RailJson version this build writes

use railjson_gen::core::error::InfraResult;
use railjson_gen::railjson::RAILJSON_VERSION;

pub fn run_schema_version() -> InfraResult<()> {
  println!("{}", RAILJSON_VERSION);
  Ok(())
}
