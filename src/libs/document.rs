//! Paginated PDF report built from formatted rows.
//!
//! The builder works in two steps. [`DocumentLayout::compose`] arranges the
//! rows into sections of headings, text lines and tables; the layout is plain
//! data and can be inspected without parsing a PDF. The renderer then draws
//! the layout with printpdf's built-in Helvetica fonts.
//!
//! ## Layout
//!
//! - **Section 1**: title, period label, generation timestamp, and a two-column
//!   `Metric | Value` grid table.
//! - **Section 2** (new page): `Agent Productivity` heading and a four-column
//!   agent grid table.
//!
//! Header rows are always drawn, even for empty tables. A table that does not
//! fit on the current page continues on a new page with its header repeated.
//!
//! ## Reproducibility
//!
//! The document id, the trailer `/ID` pair and all metadata dates are derived
//! from the generation timestamp rather than the wall clock, and XMP metadata
//! is disabled. Identical rows, period label and timestamp yield identical
//! bytes.

use super::error::{ReportError, ReportResult};
use super::formatter::{FormattedRows, AGENT_HEADERS, METRIC_HEADERS};
use chrono::{DateTime, Utc};
use printpdf::{
    BuiltinFont, Color, CustomPdfConformance, IndirectFontRef, Line, Mm, PdfConformance, PdfDocument,
    PdfDocumentReference, PdfLayerIndex, PdfLayerReference, PdfPageIndex, Point, Rect, Rgb,
};
use printpdf::lopdf::{Document as RawPdf, Object, StringFormat};
use time::OffsetDateTime;

pub const DOCUMENT_TITLE: &str = "Attendance Report";
pub const METRICS_HEADING: &str = "Key Metrics";
pub const AGENTS_HEADING: &str = "Agent Productivity";

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const LEFT_MARGIN: f32 = 20.0;
const TOP_START: f32 = 277.0;
const BOTTOM_MARGIN: f32 = 20.0;
const ROW_HEIGHT: f32 = 8.0;
const CELL_PADDING: f32 = 2.0;
const TABLE_FONT_SIZE: f32 = 10.0;
const LAYER_NAME: &str = "Layer 1";

/// Millimetres per typographic point.
const PT_TO_MM: f32 = 0.3528;

#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Column widths in millimetres.
    pub widths: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    Text(String),
    Heading(String),
    Table(TableBlock),
}

/// A run of blocks that starts on a fresh page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn tables(&self) -> impl Iterator<Item = &TableBlock> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Title(text) | Block::Text(text) | Block::Heading(text) => Some(text.as_str()),
            Block::Table(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentLayout {
    pub sections: Vec<Section>,
}

impl DocumentLayout {
    /// Arranges formatted rows into the two report sections.
    ///
    /// Fails with [`ReportError::Formatting`] when the headline rows are not
    /// the expected set, before anything is rendered.
    pub fn compose(rows: &FormattedRows, generated_at: DateTime<Utc>, period_label: &str) -> ReportResult<Self> {
        rows.check_headline()?;

        let metrics_table = TableBlock {
            headers: METRIC_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .headline
                .iter()
                .map(|row| vec![row.label.clone(), row.value.text.clone()])
                .collect(),
            widths: vec![110.0, 60.0],
        };

        let agents_table = TableBlock {
            headers: AGENT_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .agents
                .iter()
                .map(|agent| agent.texts().iter().map(|text| text.to_string()).collect())
                .collect(),
            widths: vec![70.0, 35.0, 35.0, 30.0],
        };

        let summary = Section {
            blocks: vec![
                Block::Title(DOCUMENT_TITLE.to_string()),
                Block::Text(format!("Period: {}", period_label)),
                Block::Text(format!("Generated at: {}", generated_at.format("%Y-%m-%d %H:%M UTC"))),
                Block::Heading(METRICS_HEADING.to_string()),
                Block::Table(metrics_table),
            ],
        };

        let agents = Section {
            blocks: vec![Block::Heading(AGENTS_HEADING.to_string()), Block::Table(agents_table)],
        };

        Ok(Self {
            sections: vec![summary, agents],
        })
    }
}

/// Builds the PDF report.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentBuilder;

impl DocumentBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, rows: &FormattedRows, generated_at: DateTime<Utc>, period_label: &str) -> ReportResult<Vec<u8>> {
        let layout = DocumentLayout::compose(rows, generated_at, period_label)?;
        render(&layout, generated_at)
    }
}

/// Draws a composed layout into PDF bytes.
pub fn render(layout: &DocumentLayout, generated_at: DateTime<Utc>) -> ReportResult<Vec<u8>> {
    let stamp = OffsetDateTime::from_unix_timestamp(generated_at.timestamp())
        .map_err(|e| ReportError::Build(format!("invalid generation timestamp: {}", e)))?;

    let (doc, page, layer) = PdfDocument::new(DOCUMENT_TITLE, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
    let doc = doc
        .with_conformance(PdfConformance::Custom(CustomPdfConformance {
            requires_icc_profile: false,
            requires_xmp_metadata: false,
            ..Default::default()
        }))
        .with_document_id(document_id(generated_at))
        .with_creation_date(stamp)
        .with_mod_date(stamp)
        .with_metadata_date(stamp);

    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    {
        let mut canvas = Canvas {
            doc: &doc,
            page,
            layer,
            y: TOP_START,
            regular,
            bold,
        };

        for (index, section) in layout.sections.iter().enumerate() {
            if index > 0 {
                canvas.new_page();
            }
            for block in &section.blocks {
                match block {
                    Block::Title(text) => canvas.line(text, 20.0, true, 10.0),
                    Block::Text(text) => canvas.line(text, 12.0, false, 8.0),
                    Block::Heading(text) => canvas.line(text, 16.0, true, 10.0),
                    Block::Table(table) => canvas.table(table),
                }
            }
        }
    }

    let bytes = doc.save_to_bytes()?;
    stamp_trailer_id(&bytes, &document_id(generated_at))
}

fn document_id(generated_at: DateTime<Utc>) -> String {
    format!("deskreport-{:020}", generated_at.timestamp())
}

/// Replaces the writer's per-save random trailer `/ID` pair with one derived
/// from the generation timestamp.
fn stamp_trailer_id(bytes: &[u8], id: &str) -> ReportResult<Vec<u8>> {
    let mut pdf = RawPdf::load_mem(bytes).map_err(|e| ReportError::Build(format!("cannot reload PDF: {}", e)))?;
    let id = Object::String(id.as_bytes().to_vec(), StringFormat::Literal);
    pdf.trailer.set("ID", Object::Array(vec![id.clone(), id]));

    let mut out = Vec::with_capacity(bytes.len());
    pdf.save_to(&mut out)
        .map_err(|e| ReportError::Build(format!("cannot write PDF: {}", e)))?;
    Ok(out)
}

struct Canvas<'a> {
    doc: &'a PdfDocumentReference,
    page: PdfPageIndex,
    layer: PdfLayerIndex,
    y: f32,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Canvas<'_> {
    fn layer(&self) -> PdfLayerReference {
        self.doc.get_page(self.page).get_layer(self.layer)
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
        self.page = page;
        self.layer = layer;
        self.y = TOP_START;
    }

    fn ensure_room(&mut self, needed: f32) -> bool {
        if self.y - needed < BOTTOM_MARGIN {
            self.new_page();
            return true;
        }
        false
    }

    fn line(&mut self, text: &str, size: f32, bold: bool, advance: f32) {
        self.ensure_room(advance);
        let font = if bold { &self.bold } else { &self.regular };
        let layer = self.layer();
        layer.set_fill_color(black());
        layer.use_text(text, size, Mm(LEFT_MARGIN), Mm(self.y - size * PT_TO_MM), font);
        self.y -= advance;
    }

    fn table(&mut self, table: &TableBlock) {
        self.y -= 2.0;
        // header plus at least one body row stay together
        self.ensure_room(ROW_HEIGHT * 2.0);
        self.row(&table.headers, &table.widths, true);

        for row in &table.rows {
            if self.ensure_room(ROW_HEIGHT) {
                self.row(&table.headers, &table.widths, true);
            }
            self.row(row, &table.widths, false);
        }
        self.y -= 4.0;
    }

    fn row(&mut self, cells: &[String], widths: &[f32], header: bool) {
        let layer = self.layer();
        let top = self.y;
        let bottom = self.y - ROW_HEIGHT;
        let right = LEFT_MARGIN + widths.iter().sum::<f32>();

        if header {
            layer.set_fill_color(Color::Rgb(Rgb::new(0.85, 0.85, 0.85, None)));
            layer.add_rect(Rect::new(Mm(LEFT_MARGIN), Mm(bottom), Mm(right), Mm(top)));
        }

        layer.set_outline_color(black());
        layer.set_outline_thickness(0.5);
        draw_segment(&layer, (LEFT_MARGIN, top), (right, top));
        draw_segment(&layer, (LEFT_MARGIN, bottom), (right, bottom));

        let font = if header { &self.bold } else { &self.regular };
        layer.set_fill_color(black());
        let mut x = LEFT_MARGIN;
        draw_segment(&layer, (x, top), (x, bottom));
        for (cell, width) in cells.iter().zip(widths) {
            let text = fit(cell, width - CELL_PADDING * 2.0, TABLE_FONT_SIZE);
            layer.use_text(text, TABLE_FONT_SIZE, Mm(x + CELL_PADDING), Mm(bottom + 2.5), font);
            x += width;
            draw_segment(&layer, (x, top), (x, bottom));
        }

        self.y = bottom;
    }
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn draw_segment(layer: &PdfLayerReference, from: (f32, f32), to: (f32, f32)) {
    layer.add_line(Line {
        points: vec![(Point::new(Mm(from.0), Mm(from.1)), false), (Point::new(Mm(to.0), Mm(to.1)), false)],
        is_closed: false,
    });
}

/// Truncates text that would overflow a cell, using an average glyph width.
fn fit(text: &str, width: f32, size: f32) -> String {
    let glyph = size * 0.5 * PT_TO_MM;
    let max_chars = (width / glyph).floor().max(1.0) as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}
