//! Single-page PDF report with a bar chart of clicks per day.
//!
//! The document is written directly as PDF 1.4: one page, one content
//! stream, and the built-in Helvetica font in WinAnsi encoding, so no font
//! data is embedded.

use dashboard_core::error::DashboardResult;
use dashboard_core::types::TimeSeriesPoint;
use std::io::Write;
use tracing::debug;

pub const REPORT_TITLE: &str = "Evolução dos Cliques";

// 6.4in x 4.8in
const PAGE_WIDTH: f64 = 460.8;
const PAGE_HEIGHT: f64 = 345.6;

const PLOT_LEFT: f64 = 64.0;
const PLOT_BOTTOM: f64 = 52.0;
const PLOT_RIGHT: f64 = PAGE_WIDTH - 24.0;
const PLOT_TOP: f64 = PAGE_HEIGHT - 44.0;

const BAR_FILL: f64 = 0.8;
const BAR_RGB: (f64, f64, f64) = (0.122, 0.467, 0.706);

/// Render the clicks-per-day bar chart for `series`.
pub fn render_clicks_report(series: &[TimeSeriesPoint]) -> DashboardResult<Vec<u8>> {
    let content = chart_content(series)?;

    let mut doc = PdfDocument::default();
    doc.add_object(b"<< /Type /Catalog /Pages 2 0 R >>".to_vec());
    doc.add_object(b"<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_vec());
    doc.add_object(
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
             /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
        )
        .into_bytes(),
    );

    let mut stream = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
    stream.extend_from_slice(&content);
    stream.extend_from_slice(b"\nendstream");
    doc.add_object(stream);

    doc.add_object(
        b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_vec(),
    );

    let mut info = b"<< /Title ".to_vec();
    info.extend_from_slice(&pdf_string(REPORT_TITLE));
    info.extend_from_slice(b" /Producer (campaign-dashboard) >>");
    doc.add_object(info);

    let bytes = doc.finish(6)?;
    debug!(points = series.len(), bytes = bytes.len(), "PDF report rendered");
    Ok(bytes)
}

fn chart_content(series: &[TimeSeriesPoint]) -> DashboardResult<Vec<u8>> {
    let mut out = Vec::new();
    let plot_width = PLOT_RIGHT - PLOT_LEFT;
    let plot_height = PLOT_TOP - PLOT_BOTTOM;
    let max_clicks = series.iter().map(|p| p.clicks).max().unwrap_or(0);

    // Bars
    if !series.is_empty() {
        let slot = plot_width / series.len() as f64;
        let bar_width = slot * BAR_FILL;
        writeln!(out, "{:.3} {:.3} {:.3} rg", BAR_RGB.0, BAR_RGB.1, BAR_RGB.2)?;
        for (i, point) in series.iter().enumerate() {
            let height = if max_clicks > 0 {
                point.clicks as f64 / max_clicks as f64 * plot_height
            } else {
                0.0
            };
            let x = PLOT_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
            writeln!(out, "{x:.2} {PLOT_BOTTOM:.2} {bar_width:.2} {height:.2} re f")?;
        }
    }

    // Axes
    writeln!(out, "0 g 0 G 0.8 w")?;
    writeln!(
        out,
        "{PLOT_LEFT:.2} {PLOT_TOP:.2} m {PLOT_LEFT:.2} {PLOT_BOTTOM:.2} l {PLOT_RIGHT:.2} {PLOT_BOTTOM:.2} l S"
    )?;

    // Y ticks at zero and at the tallest bar.
    write_text(&mut out, 9.0, PLOT_LEFT - 14.0, PLOT_BOTTOM - 3.0, "0")?;
    if max_clicks > 0 {
        let label = max_clicks.to_string();
        let x = PLOT_LEFT - 8.0 - label.len() as f64 * 5.0;
        write_text(&mut out, 9.0, x, PLOT_TOP - 3.0, &label)?;
        writeln!(
            out,
            "{:.2} {PLOT_TOP:.2} m {PLOT_LEFT:.2} {PLOT_TOP:.2} l S",
            PLOT_LEFT - 4.0
        )?;
    }

    // X tick labels
    if !series.is_empty() {
        let slot = plot_width / series.len() as f64;
        for (i, point) in series.iter().enumerate() {
            let centre = PLOT_LEFT + slot * (i as f64 + 0.5);
            let x = centre - point.day.chars().count() as f64 * 2.2;
            write_text(&mut out, 8.0, x, PLOT_BOTTOM - 14.0, &point.day)?;
        }
    }

    // Axis labels and title
    write_text(&mut out, 10.0, PLOT_LEFT + plot_width / 2.0 - 8.0, 14.0, "Dia")?;
    out.extend_from_slice(b"BT /F1 10 Tf ");
    writeln!(out, "0 1 -1 0 20 {:.2} Tm", PLOT_BOTTOM + plot_height / 2.0 - 16.0)?;
    out.extend_from_slice(&pdf_string("Cliques"));
    out.extend_from_slice(b" Tj ET\n");
    write_text(
        &mut out,
        14.0,
        PAGE_WIDTH / 2.0 - 70.0,
        PAGE_HEIGHT - 28.0,
        REPORT_TITLE,
    )?;

    Ok(out)
}

fn write_text(out: &mut Vec<u8>, size: f64, x: f64, y: f64, text: &str) -> std::io::Result<()> {
    write!(out, "BT /F1 {size} Tf {x:.2} {y:.2} Td ")?;
    out.extend_from_slice(&pdf_string(text));
    out.extend_from_slice(b" Tj ET\n");
    Ok(())
}

/// Encode `text` as a PDF literal string in WinAnsi. Characters outside
/// Latin-1 become `?`.
fn pdf_string(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() + 2);
    out.push(b'(');
    for c in text.chars() {
        let code = c as u32;
        let byte = if (0x20..=0x7E).contains(&code) || (0xA0..=0xFF).contains(&code) {
            code as u8
        } else {
            b'?'
        };
        if matches!(byte, b'(' | b')' | b'\\') {
            out.push(b'\\');
        }
        out.push(byte);
    }
    out.push(b')');
    out
}

/// Objects are numbered from 1 in insertion order.
#[derive(Default)]
struct PdfDocument {
    objects: Vec<Vec<u8>>,
}

impl PdfDocument {
    fn add_object(&mut self, body: Vec<u8>) {
        self.objects.push(body);
    }

    fn finish(self, info_object: usize) -> std::io::Result<Vec<u8>> {
        let mut out = Vec::new();
        out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

        let mut offsets = Vec::with_capacity(self.objects.len());
        for (i, body) in self.objects.iter().enumerate() {
            offsets.push(out.len());
            writeln!(out, "{} 0 obj", i + 1)?;
            out.extend_from_slice(body);
            out.extend_from_slice(b"\nendobj\n");
        }

        let xref_offset = out.len();
        write!(out, "xref\n0 {}\n", self.objects.len() + 1)?;
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &offsets {
            writeln!(out, "{offset:010} 00000 n ")?;
        }
        write!(
            out,
            "trailer\n<< /Size {} /Root 1 0 R /Info {info_object} 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            self.objects.len() + 1
        )?;
        Ok(out)
    }
}
