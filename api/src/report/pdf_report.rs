//! PDF status report
//!
//! One A4 page: title, timestamp, stock summary table and the low-stock
//! alert list. Layout is computed as a list of blocks first so the content
//! can be checked without parsing PDF output.

use chrono::NaiveDateTime;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::domain::entities::StockLevel;
use crate::error::ReportError;

pub const REPORT_TITLE: &str = "Blood Bank Status Report";

/// Data rendered into the report
pub struct StatusReport<'a> {
    pub generated_at: NaiveDateTime,
    pub stock: &'a [StockLevel],
    pub alerts: &'a [StockLevel],
}

#[derive(Debug, Clone, PartialEq)]
enum Block {
    Title(String),
    Text(String),
    Heading(String),
    TableHeader([String; 4]),
    TableRow([String; 4]),
    Gap,
}

fn layout(report: &StatusReport<'_>) -> Vec<Block> {
    let mut blocks = vec![
        Block::Title(REPORT_TITLE.to_string()),
        Block::Text(report.generated_at.format("%Y-%m-%d %H:%M").to_string()),
        Block::Gap,
        Block::Heading("Stock Summary".to_string()),
        Block::TableHeader([
            "Blood Group".to_string(),
            "Units".to_string(),
            "Threshold".to_string(),
            "Status".to_string(),
        ]),
    ];

    for level in report.stock {
        blocks.push(Block::TableRow([
            level.blood_group.to_string(),
            level.units.to_string(),
            level.threshold.to_string(),
            level.status().to_string(),
        ]));
    }

    blocks.push(Block::Gap);
    blocks.push(Block::Heading("Low Stock Alerts".to_string()));
    if report.alerts.is_empty() {
        blocks.push(Block::Text("No low stock alerts.".to_string()));
    } else {
        for alert in report.alerts {
            blocks.push(Block::Text(format!(
                "{}: {} units (<= threshold {})",
                alert.blood_group, alert.units, alert.threshold
            )));
        }
    }

    blocks
}

/// Render the status report as PDF bytes
pub fn status_report_pdf(report: &StatusReport<'_>) -> Result<Vec<u8>, ReportError> {
    let (doc, page, layer) = PdfDocument::new(REPORT_TITLE, Mm(210.0), Mm(297.0), "Layer 1");
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_err)?;
    let canvas = doc.get_page(page).get_layer(layer);

    let mut y: f32 = 272.0;
    for block in layout(report) {
        match &block {
            Block::Title(text) => {
                canvas.use_text(text.as_str(), 20.0, Mm(20.0), Mm(y), &bold);
                y -= 10.0;
            }
            Block::Heading(text) => {
                canvas.use_text(text.as_str(), 14.0, Mm(20.0), Mm(y), &bold);
                y -= 8.0;
            }
            Block::Text(text) => {
                canvas.use_text(text.as_str(), 11.0, Mm(20.0), Mm(y), &regular);
                y -= 6.0;
            }
            Block::TableHeader(cells) => {
                draw_cells(&canvas, cells, y, &bold);
                y -= 6.0;
            }
            Block::TableRow(cells) => {
                draw_cells(&canvas, cells, y, &regular);
                y -= 6.0;
            }
            Block::Gap => y -= 5.0,
        }
    }

    doc.save_to_bytes().map_err(pdf_err)
}

/// Table columns at fixed offsets from the left margin
fn draw_cells(canvas: &PdfLayerReference, cells: &[String; 4], y: f32, font: &IndirectFontRef) {
    for (cell, x) in cells.iter().zip([20.0, 60.0, 90.0, 125.0]) {
        canvas.use_text(cell.as_str(), 11.0, Mm(x), Mm(y), font);
    }
}

fn pdf_err(e: impl std::fmt::Display) -> ReportError {
    ReportError::Pdf(e.to_string())
}
