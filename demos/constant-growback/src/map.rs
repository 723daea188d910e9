//! Synthetic two-peak sugar distribution.
//!
//! The classic scenario concentrates sugar in two mounds on opposite
//! quadrants of the grid, capacity 4 at each summit falling off in rings
//! to barren cells between them.  Rendered as the plain-text matrix format
//! `SugarMap` parses, so the demo exercises the same loader a map file
//! would.

/// Render a `width × height` two-peak capacity matrix as map text.
pub fn two_peak_map(width: u32, height: u32) -> String {
    let peaks = [
        (width as f64 * 0.25, height as f64 * 0.75),
        (width as f64 * 0.75, height as f64 * 0.25),
    ];
    // Ring width: each capacity level spans a tenth of the grid.
    let falloff = width.max(height) as f64 / 10.0;

    let mut out = String::new();
    for y in 0..height {
        let row: Vec<String> = (0..width)
            .map(|x| {
                let level = peaks
                    .iter()
                    .map(|&(px, py)| {
                        let d = ((x as f64 - px).powi(2) + (y as f64 - py).powi(2)).sqrt();
                        (4.0 - d / falloff).ceil().clamp(0.0, 4.0) as u32
                    })
                    .max()
                    .unwrap_or(0);
                level.to_string()
            })
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summits_reach_maximum_capacity() {
        let text = two_peak_map(50, 50);
        let rows: Vec<Vec<u32>> = text
            .lines()
            .map(|l| l.split_whitespace().map(|t| t.parse().unwrap()).collect())
            .collect();
        assert_eq!(rows.len(), 50);
        assert!(rows.iter().all(|r| r.len() == 50));
        // Summit cells sit at the peak coordinates (x=12, y=37) and (x=37, y=12).
        assert_eq!(rows[37][12], 4);
        assert_eq!(rows[12][37], 4);
        // Capacity never exceeds the maximum level.
        assert!(rows.iter().flatten().all(|&v| v <= 4));
    }

    #[test]
    fn valley_between_peaks_is_barren() {
        let text = two_peak_map(50, 50);
        let rows: Vec<Vec<u32>> = text
            .lines()
            .map(|l| l.split_whitespace().map(|t| t.parse().unwrap()).collect())
            .collect();
        // Corners far from both peaks hold nothing.
        assert_eq!(rows[0][0], 0);
        assert_eq!(rows[49][49], 0);
    }
}
