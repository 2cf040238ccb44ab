use crate::domain::error::Result;
use serde::Serialize;
use std::io::Write;

pub const STORE_NOT_FOUND: &str = "Store not found";
pub const PROMOTIONS_LABEL: &str = "Promotions:";
pub const BUNDLES_LABEL: &str = "Bundles:";
pub const PRODUCTS_LABEL: &str = "Products:";

/// Writes `label` on its own line followed by `value` as 2-space indented JSON.
pub fn write_block<W, T>(out: &mut W, label: &str, value: &T) -> Result<()>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    let body = serde_json::to_string_pretty(value)?;
    writeln!(out, "{}", label)?;
    writeln!(out, "{}", body)?;
    Ok(())
}

pub fn write_not_found<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", STORE_NOT_FOUND)?;
    Ok(())
}
