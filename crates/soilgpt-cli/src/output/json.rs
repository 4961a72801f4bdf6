use serde::Serialize;
use soilgpt_core::error::SoilError;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), SoilError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
