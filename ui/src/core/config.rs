//! Static dashboard configuration: chart geometry, fade timing and the dataset location.

use once_cell::sync::Lazy;

use super::aggregate::TOP_N;
use super::platform::Platform;
use super::scale::Geometry;
use super::tooltip::ScreenPoint;

/// Environment variable that overrides the dataset path on native targets.
pub const DATA_ENV: &str = "FILMDASH_DATA";

/// Where the dataset lives when nothing overrides it (relative URL on web, path on desktop).
pub const DEFAULT_DATA_SOURCE: &str = "output/data.json";

/// Fill of trend lines, trend marks and distributor bars.
pub const SERIES_COLOR: &str = "#9c27b0";
/// Outline of trend marks.
pub const MARK_STROKE: &str = "#4a148c";

pub static CONFIG: Lazy<DashboardConfig> = Lazy::new(DashboardConfig::from_env);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Outer SVG size plus the margins reserved for axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub outer_width: f64,
    pub outer_height: f64,
    pub margins: Margins,
}

impl ChartFrame {
    /// Plotting area left once the margins are taken out.
    pub fn geometry(&self) -> Geometry {
        Geometry {
            width: (self.outer_width - self.margins.left - self.margins.right).max(0.0),
            height: (self.outer_height - self.margins.top - self.margins.bottom).max(0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_source: String,
    pub trend_frame: ChartFrame,
    pub bar_frame: ChartFrame,
    pub fade_ms: u64,
    pub tooltip_offset: ScreenPoint,
    pub top_n: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            trend_frame: ChartFrame {
                outer_width: 1100.0,
                outer_height: 600.0,
                margins: Margins {
                    top: 50.0,
                    right: 40.0,
                    bottom: 60.0,
                    left: 80.0,
                },
            },
            bar_frame: ChartFrame {
                outer_width: 1300.0,
                outer_height: 800.0,
                margins: Margins {
                    top: 50.0,
                    right: 40.0,
                    bottom: 120.0,
                    left: 100.0,
                },
            },
            fade_ms: 200,
            tooltip_offset: ScreenPoint::new(10.0, -30.0),
            top_n: TOP_N,
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if Platform::current() == Platform::Native {
            if let Ok(path) = std::env::var(DATA_ENV) {
                if !path.trim().is_empty() {
                    config.data_source = path;
                }
            }
        }
        config
    }
}
