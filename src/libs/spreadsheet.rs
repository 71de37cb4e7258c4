//! Excel workbook built from formatted rows.
//!
//! The workbook always contains exactly three sheets, in this order:
//!
//! | Sheet | Content |
//! |---|---|
//! | `Metrics` | title row, blank row, `Metric \| Value` header, one row per headline metric |
//! | `Agents` | `Name \| Attendance Count \| Average Duration \| Satisfaction` header, one row per agent |
//! | `Volume by Hour` | `Hour \| Volume` header, one row per hour bucket |
//!
//! Sheet names and headers are fixed strings that downstream consumers rely
//! on. Sheets without data rows are still written with their headers.
//!
//! Counts and reals are stored as native numbers. The resolution rate is stored
//! as its numeric value with a `0.0"%"` display format. Durations such as
//! "4m 32s" stay text.

use super::error::ReportResult;
use super::formatter::{Cell, CellValue, FormattedRows, AGENT_HEADERS, HOURLY_HEADERS, METRIC_HEADERS};
use rust_xlsxwriter::{Color, Format, Workbook};

pub const SHEET_METRICS: &str = "Metrics";
pub const SHEET_AGENTS: &str = "Agents";
pub const SHEET_VOLUME: &str = "Volume by Hour";
pub const SHEET_NAMES: [&str; 3] = [SHEET_METRICS, SHEET_AGENTS, SHEET_VOLUME];
pub const WORKBOOK_TITLE: &str = "Attendance Report";

const PERCENT_FORMAT: &str = "0.0\"%\"";

#[derive(Debug, Clone, PartialEq)]
pub enum SheetCell {
    Empty,
    Title(String),
    Header(String),
    Text(String),
    Number(f64),
    Percent(f64),
}

impl From<&Cell> for SheetCell {
    fn from(cell: &Cell) -> Self {
        match cell.value {
            CellValue::Number(value) => SheetCell::Number(value),
            CellValue::Percent(value) => SheetCell::Percent(value),
            CellValue::Text => SheetCell::Text(cell.text.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub name: String,
    pub rows: Vec<Vec<SheetCell>>,
    /// Zero-based index of the column header row.
    pub header_row: usize,
}

impl SheetLayout {
    fn new(name: &str, preamble: Vec<Vec<SheetCell>>, headers: &[&str]) -> Self {
        let header_row = preamble.len();
        let mut rows = preamble;
        rows.push(headers.iter().map(|h| SheetCell::Header(h.to_string())).collect());
        Self {
            name: name.to_string(),
            rows,
            header_row,
        }
    }

    pub fn headers(&self) -> &[SheetCell] {
        &self.rows[self.header_row]
    }

    /// Rows below the header.
    pub fn data_rows(&self) -> &[Vec<SheetCell>] {
        &self.rows[self.header_row + 1..]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkbookLayout {
    pub sheets: Vec<SheetLayout>,
}

impl WorkbookLayout {
    /// Arranges formatted rows into the three sheets.
    pub fn compose(rows: &FormattedRows) -> ReportResult<Self> {
        rows.check_headline()?;

        let mut metrics = SheetLayout::new(
            SHEET_METRICS,
            vec![vec![SheetCell::Title(WORKBOOK_TITLE.to_string())], vec![SheetCell::Empty]],
            &METRIC_HEADERS,
        );
        for row in &rows.headline {
            metrics.rows.push(vec![SheetCell::Text(row.label.clone()), SheetCell::from(&row.value)]);
        }

        let mut agents = SheetLayout::new(SHEET_AGENTS, Vec::new(), &AGENT_HEADERS);
        for agent in &rows.agents {
            agents.rows.push(vec![
                SheetCell::Text(agent.name.clone()),
                SheetCell::from(&agent.attendance_count),
                SheetCell::Text(agent.average_duration.clone()),
                SheetCell::from(&agent.satisfaction),
            ]);
        }

        let mut volume = SheetLayout::new(SHEET_VOLUME, Vec::new(), &HOURLY_HEADERS);
        for bucket in &rows.hourly {
            volume
                .rows
                .push(vec![SheetCell::Text(bucket.hour_label.clone()), SheetCell::from(&bucket.volume)]);
        }

        Ok(Self {
            sheets: vec![metrics, agents, volume],
        })
    }

    pub fn sheet(&self, name: &str) -> Option<&SheetLayout> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str()).collect()
    }
}

/// Builds the Excel workbook.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetBuilder;

impl SpreadsheetBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Hourly rows travel inside `rows`; the document builder ignores them.
    pub fn build(&self, rows: &FormattedRows) -> ReportResult<Vec<u8>> {
        let layout = WorkbookLayout::compose(rows)?;
        write(&layout)
    }
}

/// Writes a composed layout into xlsx bytes.
pub fn write(layout: &WorkbookLayout) -> ReportResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new().set_bold().set_background_color(Color::Gray);
    let title_format = Format::new().set_bold().set_font_size(14.0);
    let percent_format = Format::new().set_num_format(PERCENT_FORMAT);

    for sheet in &layout.sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        for (r, cells) in sheet.rows.iter().enumerate() {
            let row = r as u32;
            for (c, cell) in cells.iter().enumerate() {
                let col = c as u16;
                match cell {
                    SheetCell::Empty => {}
                    SheetCell::Title(text) => {
                        worksheet.write_string_with_format(row, col, text, &title_format)?;
                    }
                    SheetCell::Header(text) => {
                        worksheet.write_string_with_format(row, col, text, &header_format)?;
                    }
                    SheetCell::Text(text) => {
                        worksheet.write_string(row, col, text)?;
                    }
                    SheetCell::Number(value) => {
                        worksheet.write_number(row, col, *value)?;
                    }
                    SheetCell::Percent(value) => {
                        worksheet.write_number_with_format(row, col, *value, &percent_format)?;
                    }
                }
            }
        }

        worksheet.autofit();
    }

    Ok(workbook.save_to_buffer()?)
}
