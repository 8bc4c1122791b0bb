//! Diagnostic hythergraph renderer — draws one station's monthly
//! temperature (line, left scale) and precipitation (bars, right scale)
//! into a PNG, and prints the classification plus the axis ranges.
//! Not part of the library pipeline; no tests, no clippy target.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use koppen_core::classify_station;
use koppen_core::series::{MONTHS, MONTH_ABBREV};
use koppen_core::{Hemisphere, MonthlySeries};

const W: u32 = 720;
const H: u32 = 440;

// Plot rectangle inside the canvas.
const LEFT: i64 = 70;
const RIGHT: i64 = 680;
const TOP: i64 = 40;
const BOTTOM: i64 = 390;

const TEMP_COLOR: image::Rgb<u8> = image::Rgb([139, 0, 0]); // dark red
const PRECIP_COLOR: image::Rgb<u8> = image::Rgb([167, 216, 167]); // light green
const FRAME_COLOR: image::Rgb<u8> = image::Rgb([60, 60, 60]);
const GRID_COLOR: image::Rgb<u8> = image::Rgb([228, 228, 228]);

#[derive(Deserialize, Debug)]
struct StationRecord {
    #[serde(default)]
    name: Option<String>,
    hemisphere: Hemisphere,
    temperature_c: MonthlySeries,
    precipitation_mm: MonthlySeries,
}

// ── Pixel helpers ─────────────────────────────────────────────────────────────

fn put(img: &mut image::RgbImage, x: i64, y: i64, color: image::Rgb<u8>) {
    if x >= 0 && y >= 0 && x < W as i64 && y < H as i64 {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Bresenham segment between two points.
fn draw_line(
    img: &mut image::RgbImage,
    mut x0: i64,
    mut y0: i64,
    x1: i64,
    y1: i64,
    color: image::Rgb<u8>,
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put(img, x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

fn fill_rect(
    img: &mut image::RgbImage,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    color: image::Rgb<u8>,
) {
    for y in y0.min(y1)..=y0.max(y1) {
        for x in x0.min(x1)..=x0.max(x1) {
            put(img, x, y, color);
        }
    }
}

/// Horizontal pixel position of a month's slot centre.
fn month_center(m: usize) -> i64 {
    let slot = (RIGHT - LEFT) as f64 / MONTHS as f64;
    LEFT + (slot * (m as f64 + 0.5)) as i64
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let mut args = env::args().skip(1);
    let input = args
        .next()
        .expect("usage: visualize <station.json> [output.png]");
    let output = args
        .next()
        .unwrap_or_else(|| "data/debug/hythergraph.png".to_string());

    let text = fs::read_to_string(&input).expect("cannot read station file");
    let station: StationRecord =
        serde_json::from_str(&text).expect("malformed station record");
    let temp = station.temperature_c.values();
    let precip = station.precipitation_mm.values();

    // The chart reads the raw series; the code comes from the library.
    let result = classify_station(temp, precip, station.hemisphere)
        .expect("classification failed");
    let name = station.name.as_deref().unwrap_or("station");
    println!("{name}: {}", result.code);

    // Axis ranges: temperature snapped to 5 °C steps, precipitation to
    // 50 mm steps from zero.
    let t_min = temp.iter().cloned().fold(f64::INFINITY, f64::min);
    let t_max = temp.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let t_lo = (t_min / 5.0).floor() * 5.0;
    let t_hi = ((t_max / 5.0).ceil() * 5.0).max(t_lo + 5.0);
    let p_max = precip.iter().cloned().fold(0.0_f64, f64::max);
    let p_top = ((p_max / 50.0).ceil() * 50.0).max(50.0);

    let temp_y = |t: f64| -> i64 {
        BOTTOM - ((t - t_lo) / (t_hi - t_lo) * (BOTTOM - TOP) as f64) as i64
    };
    let precip_y = |p: f64| -> i64 {
        BOTTOM - (p / p_top * (BOTTOM - TOP) as f64) as i64
    };

    let mut img = image::RgbImage::from_pixel(W, H, image::Rgb([255, 255, 255]));

    // Precipitation gridlines every 50 mm.
    let mut step = 50.0;
    while step < p_top {
        let y = precip_y(step);
        draw_line(&mut img, LEFT, y, RIGHT, y, GRID_COLOR);
        step += 50.0;
    }

    // Precipitation bars.
    let slot = (RIGHT - LEFT) as f64 / MONTHS as f64;
    let half_bar = (slot * 0.3) as i64;
    for (m, &mm) in precip.iter().enumerate() {
        let cx = month_center(m);
        fill_rect(
            &mut img,
            cx - half_bar,
            precip_y(mm),
            cx + half_bar,
            BOTTOM,
            PRECIP_COLOR,
        );
    }

    // Dotted 0 °C reference line when the range crosses it.
    if t_lo < 0.0 && t_hi > 0.0 {
        let y = temp_y(0.0);
        let mut x = LEFT;
        while x < RIGHT {
            put(&mut img, x, y, FRAME_COLOR);
            x += 4;
        }
    }

    // Plot frame.
    draw_line(&mut img, LEFT, TOP, RIGHT, TOP, FRAME_COLOR);
    draw_line(&mut img, LEFT, BOTTOM, RIGHT, BOTTOM, FRAME_COLOR);
    draw_line(&mut img, LEFT, TOP, LEFT, BOTTOM, FRAME_COLOR);
    draw_line(&mut img, RIGHT, TOP, RIGHT, BOTTOM, FRAME_COLOR);

    // Temperature polyline with square markers.
    for m in 1..MONTHS {
        draw_line(
            &mut img,
            month_center(m - 1),
            temp_y(temp[m - 1]),
            month_center(m),
            temp_y(temp[m]),
            TEMP_COLOR,
        );
    }
    for (m, &t) in temp.iter().enumerate() {
        let cx = month_center(m);
        let cy = temp_y(t);
        fill_rect(&mut img, cx - 2, cy - 2, cx + 2, cy + 2, TEMP_COLOR);
    }

    if let Some(dir) = Path::new(&output).parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).expect("cannot create output directory");
        }
    }
    img.save(&output).expect("failed to save hythergraph");
    println!("Wrote {output}");

    println!("temperature axis {t_lo}–{t_hi} °C, precipitation axis 0–{p_top} mm");
    println!("month  temp °C  precip mm");
    for m in 0..MONTHS {
        println!(
            "{:<5} {:>8.1} {:>10.1}",
            MONTH_ABBREV[m], temp[m], precip[m]
        );
    }
}
