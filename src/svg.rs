//! SVG rendering of the wheel
//!
//! The document uses a fixed `0 0 100 100` viewbox. Sectors sit in a group
//! rotated by the wheel's rotation, nested inside the global −90° frame
//! rotation; the pointer and the center ornament are drawn on top and do not
//! turn.

use crate::geometry::{
    CENTER, FRAME_ROTATION, ICON_FLIP, SectorGeometry, fmt_num, layout_label, layout_wheel,
};
use crate::segment::{Segment, SegmentFill};
use crate::ui::styles::{GOLD_STOPS, WheelPalette};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const GOLD_TEXTURE_ID: &str = "gold-texture";
const LABEL_FONT_SIZE: f64 = 3.2;
const ICON_FONT_SIZE: f64 = 9.0;
const DIVIDER_WIDTH: f64 = 0.8;

/// Renders the wheel at `rotation` degrees into an SVG document
pub fn render_svg(segments: &[Segment], rotation: f64, palette: &WheelPalette) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_svg(&mut out, segments, rotation, palette);
    String::from_utf8_lossy(&out).into_owned()
}

/// Writes the wheel to an SVG file at `path`
pub fn export_svg(
    path: &Path,
    segments: &[Segment],
    rotation: f64,
    palette: &WheelPalette,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_svg(&mut out, segments, rotation, palette)
        .and_then(|()| out.flush())
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Writes the wheel as an SVG document to `out`
pub fn write_svg(
    out: &mut impl Write,
    segments: &[Segment],
    rotation: f64,
    palette: &WheelPalette,
) -> io::Result<()> {
    let (cx, cy) = (fmt_num(CENTER.x), fmt_num(CENTER.y));

    writeln!(
        out,
        "<svg viewBox=\"0 0 100 100\" xmlns=\"http://www.w3.org/2000/svg\">"
    )?;

    if segments.iter().any(Segment::is_grand_prize) {
        write_defs(out)?;
    }

    writeln!(
        out,
        "  <g class=\"wheel-rotate\" transform=\"rotate({} {cx} {cy})\">",
        fmt_num(rotation)
    )?;
    writeln!(
        out,
        "    <g transform=\"rotate({} {cx} {cy})\">",
        fmt_num(FRAME_ROTATION)
    )?;
    for (sector, segment) in layout_wheel(segments).iter().zip(segments) {
        write_sector(out, sector, segment, palette)?;
    }
    writeln!(out, "    </g>")?;
    writeln!(out, "  </g>")?;

    write_pointer(out, palette)?;
    write_center(out, palette)?;

    writeln!(out, "</svg>")?;
    Ok(())
}

fn write_defs(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "  <defs>")?;
    writeln!(
        out,
        "    <linearGradient id=\"{GOLD_TEXTURE_ID}\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">"
    )?;
    for (offset, color) in GOLD_STOPS {
        writeln!(
            out,
            "      <stop offset=\"{offset}%\" stop-color=\"{color}\" />"
        )?;
    }
    writeln!(out, "    </linearGradient>")?;
    writeln!(out, "  </defs>")?;
    Ok(())
}

fn write_sector(
    out: &mut impl Write,
    sector: &SectorGeometry,
    segment: &Segment,
    palette: &WheelPalette,
) -> io::Result<()> {
    let fill_kind = SegmentFill::classify(sector.index, segment);
    let fill = match fill_kind {
        SegmentFill::GrandPrize => format!("url(#{GOLD_TEXTURE_ID})"),
        other => palette.fill_hex(other).to_string(),
    };

    writeln!(out, "      <g data-index=\"{}\">", sector.index)?;
    writeln!(
        out,
        "        <path d=\"{}\" fill=\"{fill}\" stroke=\"{}\" stroke-width=\"{}\" />",
        sector.path_data(),
        palette.divider,
        fmt_num(DIVIDER_WIDTH)
    )?;

    // Label
    writeln!(
        out,
        "        <g transform=\"translate({} {}) rotate({})\">",
        fmt_num(sector.label.position.x),
        fmt_num(sector.label.position.y),
        fmt_num(sector.label.rotation)
    )?;
    writeln!(
        out,
        "          <text fill=\"{}\" font-size=\"{}\" font-weight=\"500\" text-anchor=\"middle\" dominant-baseline=\"middle\">",
        palette.text_hex(fill_kind),
        fmt_num(LABEL_FONT_SIZE)
    )?;
    for line in layout_label(&segment.label) {
        writeln!(
            out,
            "            <tspan x=\"0\" dy=\"{}\">{}</tspan>",
            fmt_num(line.dy),
            escape_xml(&line.text)
        )?;
    }
    writeln!(out, "          </text>")?;
    writeln!(out, "        </g>")?;

    // Icon, flipped to face the center
    writeln!(
        out,
        "        <g transform=\"translate({} {}) rotate({})\">",
        fmt_num(sector.icon.position.x),
        fmt_num(sector.icon.position.y),
        fmt_num(sector.icon.rotation)
    )?;
    writeln!(
        out,
        "          <text font-size=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\" transform=\"rotate({})\">{}</text>",
        fmt_num(ICON_FONT_SIZE),
        fmt_num(ICON_FLIP),
        escape_xml(segment.icon())
    )?;
    writeln!(out, "        </g>")?;
    writeln!(out, "      </g>")?;
    Ok(())
}

fn write_pointer(out: &mut impl Write, palette: &WheelPalette) -> io::Result<()> {
    // Points down into the top of the rim.
    writeln!(
        out,
        "  <polygon class=\"wheel-pointer\" points=\"46,0 54,0 50,7\" fill=\"{}\" stroke=\"{}\" stroke-width=\"0.5\" />",
        palette.pointer, palette.divider
    )?;
    Ok(())
}

fn write_center(out: &mut impl Write, palette: &WheelPalette) -> io::Result<()> {
    let (cx, cy) = (fmt_num(CENTER.x), fmt_num(CENTER.y));
    writeln!(out, "  <g class=\"wheel-center\">")?;
    writeln!(
        out,
        "    <circle cx=\"{cx}\" cy=\"{cy}\" r=\"8\" fill=\"{}\" />",
        palette.hub_outer
    )?;
    writeln!(
        out,
        "    <circle cx=\"{cx}\" cy=\"{cy}\" r=\"5.5\" fill=\"{}\" />",
        palette.hub_inner
    )?;
    writeln!(
        out,
        "    <text x=\"{cx}\" y=\"{cy}\" font-size=\"6\" fill=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\">❤</text>",
        palette.heart
    )?;
    writeln!(out, "  </g>")?;
    Ok(())
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}
