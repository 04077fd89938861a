use std::collections::HashMap;

use crate::shared::constants::CANONICAL_PALETTE;

/// Provider → color lookup owned by a dashboard session.
///
/// Seeded with the fixed colors of the known providers. Any other provider
/// gets a hue derived from its name the first time it is asked for, and keeps
/// that color for the rest of the session.
#[derive(Debug, Clone)]
pub struct ProviderPalette {
    colors: HashMap<String, String>,
}

impl Default for ProviderPalette {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderPalette {
    pub fn new() -> Self {
        let colors = CANONICAL_PALETTE
            .iter()
            .map(|(provider, color)| (provider.to_string(), color.to_string()))
            .collect();
        Self { colors }
    }

    pub fn color_for(&mut self, provider: &str) -> String {
        if let Some(color) = self.colors.get(provider) {
            return color.clone();
        }
        let color = hash_to_color(provider);
        tracing::debug!(provider, color = %color, "Assigned fallback chart color");
        self.colors.insert(provider.to_string(), color.clone());
        color
    }
}

/// `hsl(h, 65%, 55%)` with `h` taken from a 32-bit shift-and-subtract string
/// hash over UTF-16 code units.
///
/// The shift truncates to 32 bits but the subtraction and addition do not, so
/// the accumulator is carried in an `i64`.
pub fn hash_to_color(input: &str) -> String {
    let mut hash: i64 = 0;
    for unit in input.encode_utf16() {
        let shifted = (hash as i32).wrapping_shl(5) as i64;
        hash = unit as i64 + (shifted - hash);
    }
    let hue = hash.unsigned_abs() % 360;
    format!("hsl({}, 65%, 55%)", hue)
}
