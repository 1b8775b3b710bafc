//! Track 2 Equivalent Data (tag 57) decoding.
//!
//! Layout as hex nibbles: `PAN D YYMM service-code discretionary [F]`.

use super::pan::format_pan;

/// Decoded Track 2. An undecodable input is still a value: `card_number`
/// carries `"Invalid T2: <input>"` and `expiry_date` is `"N/A"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track2 {
    /// Masked PAN for display
    pub card_number: String,
    /// `MM/YY`
    pub expiry_date: String,
    pan: String,
}

impl Track2 {
    fn invalid(input: &str) -> Self {
        Self {
            card_number: format!("Invalid T2: {}", input),
            expiry_date: "N/A".to_string(),
            pan: String::new(),
        }
    }

    /// Unmasked PAN digits; empty for an invalid Track 2.
    pub fn pan(&self) -> &str {
        &self.pan
    }

    /// False for the `Invalid T2: ...` flag
    pub fn is_valid(&self) -> bool {
        !self.card_number.starts_with("Invalid")
    }
}

/// Parse Track 2 Equivalent Data given as hex.
pub fn parse_track2(hex: &str) -> Track2 {
    let stripped = hex.strip_suffix(['F', 'f']).unwrap_or(hex);

    if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
        return Track2::invalid(hex);
    }

    let Some(sep) = stripped.find(['D', 'd']) else {
        return Track2::invalid(hex);
    };

    let yymm = match stripped.get(sep + 1..sep + 5) {
        Some(s) if s.chars().all(|c| c.is_ascii_digit()) => s,
        _ => return Track2::invalid(hex),
    };

    let pan: String = stripped[..sep].chars().filter(char::is_ascii_digit).collect();

    Track2 {
        card_number: format_pan(&pan),
        expiry_date: format!("{}/{}", &yymm[2..4], &yymm[..2]),
        pan,
    }
}
