//! Axis scales for the trend and distributor charts.
//!
//! Linear scales follow the usual "nice number" tick rules (steps of 1, 2, 5 × 10ⁿ).
//! A collapsed domain (no data, a single point, or all values equal) never divides by
//! zero: the scale maps every value to the middle of its range instead.

use super::aggregate::RankedGroup;
use super::record::{FilmRecord, RankField};

/// Tick count the axes ask for.
pub const DEFAULT_TICKS: usize = 10;

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// One plotted value. `source` indexes the record the point came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
    pub source: usize,
}

/// `(year, field)` points in record order. Records without a year are left out;
/// malformed amounts plot at zero, the bottom of the amount axis.
pub fn series(records: &[FilmRecord], field: RankField) -> Vec<SeriesPoint> {
    records
        .iter()
        .enumerate()
        .filter_map(|(source, record)| {
            let year = record.year?;
            let amount = record.amount(field);
            Some(SeriesPoint {
                x: f64::from(year),
                y: if amount.is_finite() { amount } else { 0.0 },
                source,
            })
        })
        .collect()
}

/// Size of a chart's plotting area in pixels, margins excluded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn is_degenerate(&self) -> bool {
        let (d0, d1) = self.domain;
        !(d0.is_finite() && d1.is_finite()) || d0 == d1
    }

    pub fn map(&self, value: f64) -> f64 {
        let (r0, r1) = self.range;
        if self.is_degenerate() {
            return (r0 + r1) / 2.0;
        }
        let (d0, d1) = self.domain;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if self.is_degenerate() || r0 == r1 {
            return d0;
        }
        d0 + (pixel - r0) / (r1 - r0) * (d1 - d0)
    }

    /// Extends the domain outward to multiples of the tick step.
    pub fn nice(self, count: usize) -> Self {
        if self.is_degenerate() || count == 0 {
            return self;
        }

        let (d0, d1) = self.domain;
        let reversed = d1 < d0;
        let (mut start, mut stop) = if reversed { (d1, d0) } else { (d0, d1) };
        let mut previous: Option<f64> = None;

        for _ in 0..10 {
            let step = tick_increment(start, stop, count as f64);
            if previous == Some(step) {
                let domain = if reversed { (stop, start) } else { (start, stop) };
                return Self { domain, ..self };
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            previous = Some(step);
        }
        self
    }

    /// Roughly `count` evenly spaced round values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if count == 0 || !(d0.is_finite() && d1.is_finite()) {
            return Vec::new();
        }
        if d0 == d1 {
            return vec![d0];
        }

        let reversed = d1 < d0;
        let (start, stop) = if reversed { (d1, d0) } else { (d0, d1) };
        let Some(spec) = tick_spec(start, stop, count as f64) else {
            return Vec::new();
        };
        if spec.last < spec.first {
            return Vec::new();
        }

        let mut ticks: Vec<f64> = (spec.first..=spec.last)
            .map(|i| {
                if spec.increment < 0.0 {
                    i as f64 / -spec.increment
                } else {
                    i as f64 * spec.increment
                }
            })
            .collect();
        if reversed {
            ticks.reverse();
        }
        ticks
    }

    /// Distance between consecutive [`LinearScale::ticks`].
    pub fn tick_step(&self, count: usize) -> f64 {
        let (d0, d1) = self.domain;
        if self.is_degenerate() || count == 0 {
            return 1.0;
        }
        let step = tick_increment(d0.min(d1), d0.max(d1), count as f64);
        if step < 0.0 {
            -1.0 / step
        } else {
            step
        }
    }
}

struct TickSpec {
    first: i64,
    last: i64,
    /// Positive: tick `i` sits at `i * increment`. Negative: at `i / -increment`.
    increment: f64,
}

fn tick_spec(start: f64, stop: f64, count: f64) -> Option<TickSpec> {
    let step = (stop - start) / count.max(0.0);
    if !(step.is_finite() && step > 0.0) {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut first, mut last, increment);
    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        first = (start * inc).round() as i64;
        last = (stop * inc).round() as i64;
        if (first as f64) / inc < start {
            first += 1;
        }
        if (last as f64) / inc > stop {
            last -= 1;
        }
        increment = -inc;
    } else {
        let inc = 10f64.powf(power) * factor;
        first = (start / inc).round() as i64;
        last = (stop / inc).round() as i64;
        if (first as f64) * inc < start {
            first += 1;
        }
        if (last as f64) * inc > stop {
            last -= 1;
        }
        increment = inc;
    }

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some(TickSpec {
        first,
        last,
        increment,
    })
}

fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    tick_spec(start, stop, count)
        .map(|spec| spec.increment)
        .unwrap_or(0.0)
}

/// The scales of one trend chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl ChartScales {
    /// x spans the year extent; y spans `[0, max]`, niced, with 0 at the bottom.
    /// With fewer than two points both domains collapse onto the lone value.
    pub fn for_series(points: &[SeriesPoint], geometry: Geometry) -> Self {
        let x_range = (0.0, geometry.width);
        let y_range = (geometry.height, 0.0);

        if let [] | [_] = points {
            let (x, y) = points.first().map(|p| (p.x, p.y)).unwrap_or((0.0, 0.0));
            return Self {
                x: LinearScale::new((x, x), x_range),
                y: LinearScale::new((y, y), y_range),
            };
        }

        let (mut x_min, mut x_max, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY, 0.0f64);
        for point in points {
            x_min = x_min.min(point.x);
            x_max = x_max.max(point.x);
            y_max = y_max.max(point.y);
        }

        Self {
            x: LinearScale::new((x_min, x_max), x_range),
            y: LinearScale::new((0.0, y_max), y_range).nice(DEFAULT_TICKS),
        }
    }

    pub fn x_map(&self, value: f64) -> f64 {
        self.x.map(value)
    }

    pub fn y_map(&self, value: f64) -> f64 {
        self.y.map(value)
    }

    pub fn y_inverse(&self, pixel: f64) -> f64 {
        self.y.invert(pixel)
    }

    /// Index of the point closest in year to horizontal pixel `pixel_x`.
    /// The earlier point wins a tie.
    pub fn nearest(&self, points: &[SeriesPoint], pixel_x: f64) -> Option<usize> {
        let target = self.x.invert(pixel_x);
        let mut best: Option<(usize, f64)> = None;
        for (idx, point) in points.iter().enumerate() {
            let distance = (point.x - target).abs();
            match best {
                Some((_, closest)) if distance >= closest => {}
                _ => best = Some((idx, distance)),
            }
        }
        best.map(|(idx, _)| idx)
    }
}

/// Evenly spaced bands with padding between and around them.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    keys: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(keys: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let (r0, r1) = range;
        let n = keys.len() as f64;
        let step = (r1 - r0) / (n - padding + padding * 2.0).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        Self {
            keys,
            start,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn position_at(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }

    pub fn position(&self, key: &str) -> Option<f64> {
        self.keys
            .iter()
            .position(|k| k == key)
            .map(|idx| self.position_at(idx))
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

/// The scales of the distributor chart. Counts are not niced.
#[derive(Debug, Clone, PartialEq)]
pub struct BarScales {
    pub x: BandScale,
    pub y: LinearScale,
}

impl BarScales {
    pub const PADDING: f64 = 0.4;

    pub fn for_groups(groups: &[RankedGroup], geometry: Geometry) -> Self {
        let keys = groups.iter().map(|g| g.key.clone()).collect();
        let max = groups.iter().map(|g| g.count).max().unwrap_or(0) as f64;
        Self {
            x: BandScale::new(keys, (0.0, geometry.width), Self::PADDING),
            y: LinearScale::new((0.0, max), (geometry.height, 0.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOMETRY: Geometry = Geometry {
        width: 980.0,
        height: 490.0,
    };

    fn point(x: f64, y: f64, source: usize) -> SeriesPoint {
        SeriesPoint { x, y, source }
    }

    #[test]
    fn linear_maps_and_inverts() {
        let scale = LinearScale::new((2000.0, 2010.0), (0.0, 100.0));
        assert_eq!(scale.map(2000.0), 0.0);
        assert_eq!(scale.map(2005.0), 50.0);
        assert_eq!(scale.invert(100.0), 2010.0);
    }

    #[test]
    fn nice_rounds_outward() {
        let scale = LinearScale::new((0.0, 237_000_000.0), (490.0, 0.0)).nice(10);
        assert_eq!(scale.domain(), (0.0, 240_000_000.0));

        let small = LinearScale::new((0.0, 0.97), (1.0, 0.0)).nice(10);
        assert_eq!(small.domain(), (0.0, 1.0));

        let already = LinearScale::new((0.0, 100.0), (1.0, 0.0)).nice(10);
        assert_eq!(already.domain(), (0.0, 100.0));
    }

    #[test]
    fn ticks_use_round_steps() {
        let decades = LinearScale::new((1990.0, 2040.0), (0.0, 1.0));
        let ticks = decades.ticks(10);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks.first(), Some(&1990.0));
        assert_eq!(ticks.last(), Some(&2040.0));
        assert_eq!(decades.tick_step(10), 5.0);

        let years = LinearScale::new((1990.0, 2020.0), (0.0, 1.0));
        assert_eq!(years.tick_step(10), 2.0);
        assert_eq!(years.ticks(10).len(), 16);

        let counts = LinearScale::new((0.0, 2.0), (1.0, 0.0));
        assert_eq!(counts.ticks(10).len(), 11);
        assert!((counts.tick_step(10) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn y_axis_is_inverted_and_niced() {
        let points = vec![point(2000.0, 100.0, 0), point(2001.0, 190.0, 1)];
        let scales = ChartScales::for_series(&points, GEOMETRY);
        assert_eq!(scales.y.domain(), (0.0, 200.0));
        assert_eq!(scales.y_map(0.0), GEOMETRY.height);
        assert_eq!(scales.y_map(200.0), 0.0);
        assert_eq!(scales.y_inverse(GEOMETRY.height / 2.0), 100.0);
        assert_eq!(scales.x.domain(), (2000.0, 2001.0));
    }

    #[test]
    fn mappings_are_monotonic() {
        let points: Vec<_> = (0..20)
            .map(|i| point(1990.0 + i as f64, (i * i) as f64 * 1_000.0, i))
            .collect();
        let scales = ChartScales::for_series(&points, GEOMETRY);
        for pair in points.windows(2) {
            assert!(scales.x_map(pair[0].x) <= scales.x_map(pair[1].x));
            assert!(scales.y_map(pair[0].y) >= scales.y_map(pair[1].y));
        }
    }

    #[test]
    fn single_point_collapses_to_midpoint() {
        let points = vec![point(2004.0, 75.0, 0)];
        let scales = ChartScales::for_series(&points, GEOMETRY);
        assert_eq!(scales.x_map(2004.0), GEOMETRY.width / 2.0);
        assert_eq!(scales.y_map(75.0), GEOMETRY.height / 2.0);
        assert_eq!(scales.x_map(1900.0), scales.x_map(2004.0));
        assert!(scales.y_inverse(10.0).is_finite());
    }

    #[test]
    fn empty_series_does_not_divide_by_zero() {
        let scales = ChartScales::for_series(&[], GEOMETRY);
        assert_eq!(scales.x_map(0.0), GEOMETRY.width / 2.0);
        assert_eq!(scales.nearest(&[], 10.0), None);
        assert_eq!(scales.y.ticks(10), vec![0.0]);
    }

    #[test]
    fn nearest_prefers_earlier_index_on_ties() {
        let points = vec![
            point(2000.0, 1.0, 0),
            point(2002.0, 2.0, 1),
            point(2002.0, 3.0, 2),
            point(2004.0, 4.0, 3),
        ];
        let scales = ChartScales::for_series(&points, GEOMETRY);

        assert_eq!(scales.nearest(&points, scales.x_map(2002.0)), Some(1));
        assert_eq!(scales.nearest(&points, scales.x_map(2001.0)), Some(0));
        assert_eq!(scales.nearest(&points, scales.x_map(2003.4)), Some(3));
    }

    #[test]
    fn series_keeps_record_order_and_zeroes_malformed() {
        let records = vec![
            FilmRecord {
                year: Some(2001),
                title: "a".into(),
                url: String::new(),
                director: String::new(),
                distributor: String::new(),
                country: String::new(),
                budget: f64::NAN,
                box_office: 10.0,
            },
            FilmRecord {
                year: Some(1999),
                title: "b".into(),
                url: String::new(),
                director: String::new(),
                distributor: String::new(),
                country: String::new(),
                budget: 5.0,
                box_office: 20.0,
            },
        ];
        let budget = series(&records, RankField::Budget);
        assert_eq!(budget, vec![point(2001.0, 0.0, 0), point(1999.0, 5.0, 1)]);
    }

    #[test]
    fn yearless_records_stay_out_of_the_x_extent() {
        let records: Vec<FilmRecord> = serde_json::from_str(
            r#"[
                {"year": "2001.0", "budget": 10},
                {"year": null, "budget": 20},
                {"year": 1999, "budget": 30}
            ]"#,
        )
        .unwrap();

        let points = series(&records, RankField::Budget);
        assert_eq!(points, vec![point(2001.0, 10.0, 0), point(1999.0, 30.0, 2)]);

        let scales = ChartScales::for_series(&points, GEOMETRY);
        assert_eq!(scales.x.domain(), (1999.0, 2001.0));
    }

    #[test]
    fn bands_split_width_with_padding() {
        let keys = vec!["A".to_string(), "B".to_string()];
        let band = BandScale::new(keys, (0.0, 240.0), 0.4);
        // step = 240 / (2 - 0.4 + 0.8) = 100
        assert!((band.bandwidth() - 60.0).abs() < 1e-9);
        assert!((band.position_at(0) - 40.0).abs() < 1e-9);
        assert!((band.position("B").unwrap() - 140.0).abs() < 1e-9);
        assert_eq!(band.position("C"), None);
    }

    #[test]
    fn bar_counts_map_from_bottom() {
        let groups = vec![
            RankedGroup { key: "X".into(), count: 4 },
            RankedGroup { key: "Y".into(), count: 1 },
        ];
        let scales = BarScales::for_groups(&groups, GEOMETRY);
        assert_eq!(scales.y.map(4.0), 0.0);
        assert_eq!(scales.y.map(0.0), GEOMETRY.height);
        assert_eq!(scales.x.keys().len(), 2);
    }
}
