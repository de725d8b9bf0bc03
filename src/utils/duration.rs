// Hour-budget parsing for SLA targets

use anyhow::Result;

/// Parse an hours budget and return hours.
///
/// Accepts a bare number of hours ("24", "36.5") or unit expressions in
/// days, hours and minutes ("2d", "1d12h", "90m", "4h30m").
pub fn parse_hours(expr: &str) -> Result<f64> {
    let expr = expr.trim();
    if expr.is_empty() {
        anyhow::bail!("Hours expression cannot be empty");
    }

    if let Ok(hours) = expr.parse::<f64>() {
        return finite(hours, expr);
    }

    let mut total_hours = 0.0;
    let mut number = String::new();
    let mut saw_unit = false;

    for c in expr.chars() {
        if c.is_ascii_digit() || c == '.' {
            number.push(c);
            continue;
        }
        let value: f64 = number
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid hours expression: {}", expr))?;
        total_hours += match c {
            'd' => value * 24.0,
            'h' => value,
            'm' => value / 60.0,
            _ => anyhow::bail!("Invalid hours expression: {} (units are d, h, m)", expr),
        };
        number.clear();
        saw_unit = true;
    }

    if !number.is_empty() || !saw_unit {
        anyhow::bail!("Invalid hours expression: {} (missing unit after '{}')", expr, number);
    }

    finite(total_hours, expr)
}

fn finite(hours: f64, expr: &str) -> Result<f64> {
    if hours.is_finite() {
        Ok(hours)
    } else {
        anyhow::bail!("Invalid hours expression: {} (out of range)", expr)
    }
}

/// Format fractional hours compactly (e.g. "3h", "2.5h", "-4h")
pub fn format_hours(hours: f64) -> String {
    if (hours - hours.round()).abs() < 0.05 {
        format!("{}h", hours.round() as i64)
    } else {
        format!("{:.1}h", hours)
    }
}
