use crate::features::dashboard::analytics::{ProviderCounts, ProviderOrder};
use crate::features::dashboard::chart::ProviderPalette;

/// Fixed donut dimensions, in SVG user units
pub struct DonutLayout;

impl DonutLayout {
    pub const VIEW_BOX: &'static str = "0 0 220 220";
    pub const CENTER: f64 = 110.0;
    pub const RADIUS: f64 = 90.0;
    pub const STROKE_WIDTH: f64 = 26.0;
    pub const TRACK_COLOR: &'static str = "rgba(148, 163, 184, 0.18)";
    pub const START_ANGLE: f64 = -90.0;
    /// Sweeps at or above this are drawn as a circle instead of an arc
    pub const FULL_CIRCLE_THRESHOLD: f64 = 359.999;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    pub provider: String,
    pub count: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub sweep: f64,
    pub color: String,
    pub full_circle: bool,
}

impl ArcSegment {
    /// SVG path data, `None` for full-circle segments
    pub fn path(&self) -> Option<String> {
        if self.full_circle {
            return None;
        }
        Some(describe_arc(
            DonutLayout::CENTER,
            DonutLayout::CENTER,
            DonutLayout::RADIUS,
            self.start_angle,
            self.end_angle,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub provider: String,
    pub count: usize,
    pub percentage: u32,
    pub color: String,
}

impl LegendEntry {
    /// `"2 • 67%"`
    pub fn label(&self) -> String {
        format!("{} • {}%", self.count, self.percentage)
    }
}

/// Clockwise segments starting at -90°, one per provider with a non-zero
/// count, in `order`.
pub fn build_arcs(
    counts: &ProviderCounts,
    order: &ProviderOrder,
    palette: &mut ProviderPalette,
) -> Vec<ArcSegment> {
    let total = counts.total();
    if total == 0 {
        return Vec::new();
    }

    let mut current = DonutLayout::START_ANGLE;
    let mut arcs = Vec::new();
    for provider in order.iter() {
        let count = counts.get(provider);
        if count == 0 {
            continue;
        }
        let sweep = 360.0 * count as f64 / total as f64;
        arcs.push(ArcSegment {
            provider: provider.to_string(),
            count,
            start_angle: current,
            end_angle: current + sweep,
            sweep,
            color: palette.color_for(provider),
            full_circle: sweep >= DonutLayout::FULL_CIRCLE_THRESHOLD,
        });
        current += sweep;
    }
    arcs
}

pub fn build_legend(
    counts: &ProviderCounts,
    order: &ProviderOrder,
    palette: &mut ProviderPalette,
) -> Vec<LegendEntry> {
    order
        .iter()
        .filter_map(|provider| {
            let count = counts.get(provider);
            (count > 0).then(|| LegendEntry {
                provider: provider.to_string(),
                count,
                percentage: counts.percentage(provider),
                color: palette.color_for(provider),
            })
        })
        .collect()
}

/// Point on the circle. Angles are shifted by -90° so that 0° is 12 o'clock.
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle_degrees: f64) -> (f64, f64) {
    let radians = (angle_degrees - 90.0).to_radians();
    (cx + radius * radians.cos(), cy + radius * radians.sin())
}

/// Arc path drawn from the end angle back to the start angle
pub fn describe_arc(cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) -> String {
    let (sx, sy) = polar_to_cartesian(cx, cy, radius, end_angle);
    let (ex, ey) = polar_to_cartesian(cx, cy, radius, start_angle);
    let large_arc = if end_angle - start_angle <= 180.0 { "0" } else { "1" };
    format!(
        "M {} {} A {} {} 0 {} 0 {} {}",
        svg_number(sx),
        svg_number(sy),
        svg_number(radius),
        svg_number(radius),
        large_arc,
        svg_number(ex),
        svg_number(ey)
    )
}

/// Three decimals at most, no trailing zeros, no negative zero
fn svg_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::people::models::{PersonRecord, RawDocument};
    use serde_json::json;

    fn people(providers: &[&str]) -> Vec<PersonRecord> {
        providers
            .iter()
            .map(|p| {
                let mut raw = RawDocument::new();
                raw.insert("provedora".to_string(), json!(p));
                PersonRecord::from_raw(raw)
            })
            .collect()
    }

    fn chart(providers: &[&str]) -> (Vec<ArcSegment>, Vec<LegendEntry>) {
        let records = people(providers);
        let order = ProviderOrder::from_records(&records);
        let counts = ProviderCounts::tally(&records);
        let mut palette = ProviderPalette::new();
        (
            build_arcs(&counts, &order, &mut palette),
            build_legend(&counts, &order, &mut palette),
        )
    }

    #[test]
    fn test_sweeps_sum_to_full_turn() {
        let (arcs, _) = chart(&["Claro", "Oi", "Tim", "Vivo", "Claro", "X", "Y"]);
        let total: f64 = arcs.iter().map(|a| a.sweep).sum();
        assert!((total - 360.0).abs() < 1e-9);

        assert_eq!(arcs[0].start_angle, -90.0);
        for pair in arcs.windows(2) {
            assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-9);
        }
        assert!((arcs.last().unwrap().end_angle - 270.0).abs() < 1e-9);
        assert!(arcs.iter().all(|a| !a.full_circle));
    }

    #[test]
    fn test_single_provider_is_full_circle() {
        let (arcs, legend) = chart(&["Vivo", "Vivo", "Vivo"]);
        assert_eq!(arcs.len(), 1);
        assert!(arcs[0].full_circle);
        assert_eq!(arcs[0].path(), None);
        assert_eq!(arcs[0].color, "#34d399");
        assert_eq!(legend[0].label(), "3 • 100%");
    }

    #[test]
    fn test_arcs_follow_provider_order() {
        let (arcs, legend) = chart(&["zeta", "Oi", "Claro", "Claro"]);
        let providers: Vec<&str> = arcs.iter().map(|a| a.provider.as_str()).collect();
        assert_eq!(providers, vec!["Claro", "Oi", "zeta"]);

        let legend_providers: Vec<&str> = legend.iter().map(|l| l.provider.as_str()).collect();
        assert_eq!(legend_providers, providers);
        assert_eq!(arcs[2].color, hash_color("zeta"));
    }

    fn hash_color(provider: &str) -> String {
        crate::features::dashboard::chart::palette::hash_to_color(provider)
    }

    #[test]
    fn test_legend_percentages() {
        let (_, legend) = chart(&["Claro", "Claro", "Oi"]);
        assert_eq!(legend.len(), 2);
        assert_eq!(legend[0].label(), "2 • 67%");
        assert_eq!(legend[1].label(), "1 • 33%");
        assert_eq!(legend[0].color, "#38bdf8");
        assert_eq!(legend[1].color, "#fb923c");
    }

    #[test]
    fn test_zero_count_providers_omitted() {
        let records = people(&["Claro", "Oi"]);
        let order = ProviderOrder::from_records(&records);
        let only_claro: Vec<&PersonRecord> = records.iter().take(1).collect();
        let counts = ProviderCounts::tally(only_claro);
        let mut palette = ProviderPalette::new();

        let arcs = build_arcs(&counts, &order, &mut palette);
        let legend = build_legend(&counts, &order, &mut palette);
        assert_eq!(arcs.len(), 1);
        assert!(arcs[0].full_circle);
        assert_eq!(legend.len(), 1);
    }

    #[test]
    fn test_empty_counts_yield_no_arcs() {
        let (arcs, legend) = chart(&[]);
        assert!(arcs.is_empty());
        assert!(legend.is_empty());
    }

    #[test]
    fn test_describe_arc() {
        assert_eq!(
            describe_arc(110.0, 110.0, 90.0, -90.0, 0.0),
            "M 110 20 A 90 90 0 0 0 20 110"
        );
        // more than half a turn sets the large-arc flag
        assert_eq!(
            describe_arc(110.0, 110.0, 90.0, -90.0, 150.0),
            "M 155 187.942 A 90 90 0 1 0 20 110"
        );
    }

    #[test]
    fn test_half_split_paths() {
        let (arcs, _) = chart(&["Claro", "Oi"]);
        assert_eq!(
            arcs[0].path().as_deref(),
            Some("M 200 110 A 90 90 0 0 0 20 110")
        );
        assert_eq!(
            arcs[1].path().as_deref(),
            Some("M 20 110 A 90 90 0 0 0 200 110")
        );
    }
}
