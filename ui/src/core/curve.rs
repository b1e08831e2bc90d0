//! Monotone cubic interpolation along x for the trend lines.
//!
//! Tangents follow Fritsch–Carlson (Steffen's limiter), so a curve through
//! monotone data never overshoots between two points.

/// SVG path data through `points` (pixel coordinates, ordered by x).
pub fn monotone_x_path(points: &[(f64, f64)]) -> String {
    let mut pts: Vec<(f64, f64)> = Vec::with_capacity(points.len());
    for &point in points {
        if pts.last() != Some(&point) {
            pts.push(point);
        }
    }

    let n = pts.len();
    match n {
        0 => return String::new(),
        1 => return format!("M{},{}", num(pts[0].0), num(pts[0].1)),
        2 => {
            return format!(
                "M{},{}L{},{}",
                num(pts[0].0),
                num(pts[0].1),
                num(pts[1].0),
                num(pts[1].1)
            )
        }
        _ => {}
    }

    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        tangents[i] = interior_tangent(pts[i - 1], pts[i], pts[i + 1]);
    }
    tangents[0] = end_tangent(pts[0], pts[1], tangents[1]);
    tangents[n - 1] = end_tangent(pts[n - 2], pts[n - 1], tangents[n - 2]);

    let mut path = format!("M{},{}", num(pts[0].0), num(pts[0].1));
    for i in 0..n - 1 {
        let (x0, y0) = pts[i];
        let (x1, y1) = pts[i + 1];
        let dx = (x1 - x0) / 3.0;
        path.push_str(&format!(
            "C{},{},{},{},{},{}",
            num(x0 + dx),
            num(y0 + dx * tangents[i]),
            num(x1 - dx),
            num(y1 - dx * tangents[i + 1]),
            num(x1),
            num(y1)
        ));
    }
    path
}

fn slope(dy: f64, dx: f64) -> f64 {
    if dx == 0.0 {
        0.0
    } else {
        dy / dx
    }
}

fn sign(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

fn interior_tangent(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    let s0 = slope(p1.1 - p0.1, h0);
    let s1 = slope(p2.1 - p1.1, h1);
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let tangent = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if tangent.is_finite() {
        tangent
    } else {
        0.0
    }
}

fn end_tangent(p0: (f64, f64), p1: (f64, f64), neighbour: f64) -> f64 {
    let h = p1.0 - p0.0;
    if h == 0.0 {
        neighbour
    } else {
        (3.0 * (p1.1 - p0.1) / h - neighbour) / 2.0
    }
}

/// Up to three decimals, trailing zeros dropped.
fn num(value: f64) -> String {
    let text = format!("{value:.3}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control_points(path: &str) -> Vec<Vec<f64>> {
        path.split('C')
            .skip(1)
            .map(|segment| {
                segment
                    .split(',')
                    .map(|n| n.parse::<f64>().unwrap())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn short_inputs_degrade_to_moves_and_lines() {
        assert_eq!(monotone_x_path(&[]), "");
        assert_eq!(monotone_x_path(&[(1.0, 2.0)]), "M1,2");
        assert_eq!(monotone_x_path(&[(0.0, 0.0), (10.5, 4.0)]), "M0,0L10.5,4");
    }

    #[test]
    fn coincident_points_are_skipped() {
        assert_eq!(monotone_x_path(&[(1.0, 2.0), (1.0, 2.0)]), "M1,2");
    }

    #[test]
    fn straight_data_stays_straight() {
        let path = monotone_x_path(&[(0.0, 0.0), (3.0, 3.0), (6.0, 6.0)]);
        assert_eq!(path, "M0,0C1,1,2,2,3,3C4,4,5,5,6,6");
    }

    #[test]
    fn monotone_data_never_overshoots() {
        let points = [(0.0, 100.0), (10.0, 90.0), (20.0, 10.0), (30.0, 0.0)];
        let path = monotone_x_path(&points);
        let segments = control_points(&path);
        assert_eq!(segments.len(), 3);
        for (segment, pair) in segments.iter().zip(points.windows(2)) {
            let (hi, lo) = (pair[0].1, pair[1].1);
            assert!(segment[1] <= hi && segment[1] >= lo);
            assert!(segment[3] <= hi && segment[3] >= lo);
        }
    }

    #[test]
    fn shared_x_values_stay_finite() {
        let path = monotone_x_path(&[(0.0, 0.0), (5.0, 10.0), (5.0, 20.0), (9.0, 5.0)]);
        assert!(!path.contains("NaN") && !path.contains("inf"));
    }
}
