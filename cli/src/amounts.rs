use anyhow::{anyhow, Result};

/// Parses a decimal token string into base units. Whole numbers are tokens,
/// not base units: `"2"` with 18 decimals is `2 * 10^18`.
pub fn parse_amount(value: &str, decimals: u8) -> Result<u128> {
    let sanitized = value.trim().replace('_', "");
    if sanitized.is_empty() || sanitized.starts_with('-') {
        return Err(anyhow!("Invalid amount: {}", value));
    }
    let (whole, fractional) = sanitized
        .split_once('.')
        .unwrap_or((sanitized.as_str(), ""));

    let whole_value: u128 = if whole.is_empty() { 0 } else { whole.parse()? };
    let mut fraction = fractional.to_string();
    if fraction.len() > decimals as usize {
        return Err(anyhow!("Too many decimal places"));
    }
    while fraction.len() < decimals as usize {
        fraction.push('0');
    }
    let fractional_value: u128 = if fraction.is_empty() {
        0
    } else {
        fraction.parse()?
    };

    let scale = 10u128
        .checked_pow(decimals as u32)
        .ok_or_else(|| anyhow!("Decimal overflow"))?;
    whole_value
        .checked_mul(scale)
        .and_then(|value| value.checked_add(fractional_value))
        .ok_or_else(|| anyhow!("Amount overflow"))
}

pub fn format_amount(amount: u128, decimals: u8) -> String {
    if decimals == 0 {
        return amount.to_string();
    }
    let scale = 10u128.pow(decimals as u32);
    let whole = amount / scale;
    let frac = amount % scale;
    format!("{}.{:0width$}", whole, frac, width = decimals as usize)
}

pub fn parse_bps(value: &str) -> Result<u16> {
    let bps: u16 = value
        .trim()
        .parse()
        .map_err(|_| anyhow!("Invalid basis points: {}", value))?;
    Ok(bps)
}
