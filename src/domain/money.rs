use std::fmt;

/// Ledger money is integer cents so aggregate identities hold exactly.
/// For EUR/USD, 1 unit = 100 cents, so 25.50 = 2550 cents.
pub type Cents = i64;

/// Format signed cents for display.
/// Example: 2550 -> "25.50", -900 -> "-9.00"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Parse an unsigned decimal amount into cents.
/// Example: "25.50" -> 2550, "25.5" -> 2550, "25" -> 2500
///
/// Transaction amounts are entered unsigned; the sign is applied later from
/// the transaction kind. Zero, negative, and explicitly signed inputs are
/// rejected here.
pub fn parse_amount(input: &str) -> Result<Cents, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::InvalidFormat);
    }
    if input.starts_with('-') || input.starts_with('+') {
        return Err(ParseAmountError::NotPositive);
    }

    let (units_str, decimal_str) = match input.split_once('.') {
        Some((units, decimals)) => (units, decimals),
        None => (input, ""),
    };

    // A second dot ("12.34.56") ends up in the decimal part
    if decimal_str.contains('.') {
        return Err(ParseAmountError::InvalidFormat);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str
            .parse()
            .map_err(|_| ParseAmountError::InvalidFormat)?
    };

    let decimal_cents: i64 = match decimal_str.len() {
        0 => 0,
        // Single digit like "5" means 50 cents
        1 => {
            decimal_str
                .parse::<i64>()
                .map_err(|_| ParseAmountError::InvalidFormat)?
                * 10
        }
        // Anything past 2 decimal places is truncated
        _ => decimal_str
            .get(..2)
            .ok_or(ParseAmountError::InvalidFormat)?
            .parse()
            .map_err(|_| ParseAmountError::InvalidFormat)?,
    };

    let cents = units * 100 + decimal_cents;
    if cents <= 0 {
        return Err(ParseAmountError::NotPositive);
    }
    Ok(cents)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    InvalidFormat,
    NotPositive,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::InvalidFormat => write!(f, "invalid amount format"),
            ParseAmountError::NotPositive => write!(f, "amount must be positive"),
        }
    }
}

impl std::error::Error for ParseAmountError {}
