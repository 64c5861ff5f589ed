//! Chart model and builders.

use crate::entry::IdentityMap;
use crate::geom::ScreenPoint;
use crate::layout::ChartLayout;
use crate::palette::entry_color;
use crate::render::Color;
use crate::scale::marker_size;
use crate::style::Theme;

/// Chart title text.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Title centered above the plot.
    pub title: String,
    /// Subtitle centered under the title.
    pub subtitle: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Identity Map".to_string(),
            subtitle: "Position and size follow each entry's strength".to_string(),
        }
    }
}

/// A placed data point, resolved from an entry's strength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedPoint {
    /// Index of the entry in the mapping's iteration order.
    pub index: usize,
    /// Marker center.
    pub center: ScreenPoint,
    /// Marker size (the core circle's radius).
    pub size: f32,
    /// Assigned categorical color.
    pub color: Color,
}

/// The identity map chart.
///
/// Holds the input mapping plus presentation configuration. The visual
/// output is produced by [`scene::build_scene`](crate::scene::build_scene),
/// which rebuilds the full scene from scratch on every call; no visual state
/// persists between renders.
#[derive(Debug, Clone, Default)]
pub struct IdentityChart {
    config: ChartConfig,
    theme: Theme,
    layout: ChartLayout,
    entries: Option<IdentityMap>,
}

impl IdentityChart {
    /// Create a chart with no entries.
    ///
    /// A chart without entries renders nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a chart with custom configuration.
    pub fn builder() -> ChartBuilder {
        ChartBuilder::default()
    }

    /// Access the title configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Access the theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Access the canvas layout.
    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    /// Access the current entries, if any.
    pub fn entries(&self) -> Option<&IdentityMap> {
        self.entries.as_ref()
    }

    /// Replace the entries. `None` clears the chart entirely.
    pub fn set_entries(&mut self, entries: Option<IdentityMap>) {
        self.entries = entries;
    }

    /// Resolve every entry to a placed point, in mapping order.
    ///
    /// Entries with a non-finite strength place no point. Returns an empty
    /// vector when no mapping is present.
    pub fn placed_points(&self) -> Vec<PlacedPoint> {
        let Some(entries) = &self.entries else {
            return Vec::new();
        };
        let placement = self.layout.placement();
        entries
            .iter()
            .enumerate()
            .filter_map(|(index, (_, entry))| {
                let center = placement.position(entry.strength)?;
                Some(PlacedPoint {
                    index,
                    center,
                    size: marker_size(entry.strength),
                    color: entry_color(index),
                })
            })
            .collect()
    }
}

/// Builder for configuring a chart before construction.
#[derive(Debug, Default)]
pub struct ChartBuilder {
    config: ChartConfig,
    theme: Theme,
    layout: ChartLayout,
    entries: Option<IdentityMap>,
}

impl ChartBuilder {
    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Set the subtitle.
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.config.subtitle = subtitle.into();
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the canvas layout.
    pub fn layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the initial entries.
    pub fn entries(mut self, entries: IdentityMap) -> Self {
        self.entries = Some(entries);
        self
    }

    /// Build the chart.
    pub fn build(self) -> IdentityChart {
        IdentityChart {
            config: self.config,
            theme: self.theme,
            layout: self.layout,
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;

    #[test]
    fn no_entries_places_nothing() {
        let chart = IdentityChart::new();
        assert!(chart.placed_points().is_empty());
    }

    #[test]
    fn points_are_placed_in_mapping_order() {
        let entries: IdentityMap = [
            ("a", Entry::new(3.0)),
            ("b", Entry::new(10.0)),
            ("c", Entry::new(-4.0)),
        ]
        .into_iter()
        .collect();
        let chart = IdentityChart::builder().entries(entries).build();
        let placed = chart.placed_points();
        assert_eq!(placed.len(), 3);
        assert_eq!(placed[0].index, 0);
        assert_eq!(placed[1].index, 1);
        assert_eq!(placed[0].color, crate::palette::PALETTE[0]);
        assert_eq!(placed[2].color, crate::palette::PALETTE[2]);
    }

    #[test]
    fn non_finite_strength_is_skipped() {
        let entries: IdentityMap = [("a", Entry::new(f64::NAN)), ("b", Entry::new(2.0))]
            .into_iter()
            .collect();
        let chart = IdentityChart::builder().entries(entries).build();
        let placed = chart.placed_points();
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].index, 1);
    }
}
