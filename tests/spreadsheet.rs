#[cfg(test)]
mod tests {
    use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
    use deskreport::libs::error::ReportError;
    use deskreport::libs::formatter::{format, FormattedRows};
    use deskreport::libs::source::DemoSource;
    use deskreport::libs::spreadsheet::{
        SheetCell, SpreadsheetBuilder, WorkbookLayout, SHEET_AGENTS, SHEET_METRICS, SHEET_NAMES, SHEET_VOLUME,
        WORKBOOK_TITLE,
    };
    use std::io::Cursor;

    fn open(bytes: Vec<u8>) -> Xlsx<Cursor<Vec<u8>>> {
        open_workbook_from_rs(Cursor::new(bytes)).unwrap()
    }

    fn demo_rows() -> FormattedRows {
        format(&DemoSource::model()).unwrap()
    }

    fn header(text: &str) -> SheetCell {
        SheetCell::Header(text.to_string())
    }

    fn text(value: &str) -> SheetCell {
        SheetCell::Text(value.to_string())
    }

    #[test]
    fn test_three_sheets_in_order() {
        let layout = WorkbookLayout::compose(&demo_rows()).unwrap();
        assert_eq!(layout.sheet_names(), SHEET_NAMES.to_vec());
    }

    #[test]
    fn test_metrics_sheet() {
        let layout = WorkbookLayout::compose(&demo_rows()).unwrap();
        let sheet = layout.sheet(SHEET_METRICS).unwrap();

        assert_eq!(sheet.rows[0], vec![SheetCell::Title(WORKBOOK_TITLE.to_string())]);
        assert_eq!(sheet.rows[1], vec![SheetCell::Empty]);
        assert_eq!(sheet.header_row, 2);
        assert_eq!(sheet.headers(), &[header("Metric"), header("Value")]);

        let data = sheet.data_rows();
        assert_eq!(data.len(), 6);
        assert_eq!(data[0], vec![text("Total Attendance"), SheetCell::Number(1247.0)]);
        assert_eq!(data[2], vec![text("Average Duration"), text("4m 32s")]);
        assert_eq!(data[3], vec![text("Resolution Rate"), SheetCell::Percent(87.3)]);
        assert_eq!(data[4], vec![text("NPS"), SheetCell::Number(8.4)]);
    }

    #[test]
    fn test_agents_sheet() {
        let layout = WorkbookLayout::compose(&demo_rows()).unwrap();
        let sheet = layout.sheet(SHEET_AGENTS).unwrap();

        assert_eq!(sheet.header_row, 0);
        assert_eq!(
            sheet.headers(),
            &[
                header("Name"),
                header("Attendance Count"),
                header("Average Duration"),
                header("Satisfaction")
            ]
        );
        assert_eq!(sheet.data_rows().len(), 4);
        assert_eq!(
            sheet.data_rows()[1],
            vec![text("João Santos"), SheetCell::Number(76.0), text("4m 12s"), SheetCell::Number(4.5)]
        );
    }

    #[test]
    fn test_volume_sheet() {
        let layout = WorkbookLayout::compose(&demo_rows()).unwrap();
        let sheet = layout.sheet(SHEET_VOLUME).unwrap();

        assert_eq!(sheet.headers(), &[header("Hour"), header("Volume")]);
        assert_eq!(sheet.data_rows().len(), 11);
        assert_eq!(sheet.data_rows()[7], vec![text("15:00"), SheetCell::Number(134.0)]);
    }

    #[test]
    fn test_empty_sections_keep_headers() {
        let mut rows = demo_rows();
        rows.agents.clear();
        rows.hourly.clear();

        let layout = WorkbookLayout::compose(&rows).unwrap();
        assert_eq!(layout.sheets.len(), 3);
        for name in [SHEET_AGENTS, SHEET_VOLUME] {
            let sheet = layout.sheet(name).unwrap();
            assert!(!sheet.headers().is_empty());
            assert!(sheet.data_rows().is_empty());
        }

        let bytes = SpreadsheetBuilder::new().build(&rows).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_build_produces_xlsx() {
        let bytes = SpreadsheetBuilder::new().build(&demo_rows()).unwrap();
        // xlsx is a zip container
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_written_workbook_sheets_and_cells() {
        let mut workbook = open(SpreadsheetBuilder::new().build(&demo_rows()).unwrap());
        assert_eq!(workbook.sheet_names(), SHEET_NAMES.to_vec());

        let metrics = workbook.worksheet_range(SHEET_METRICS).unwrap();
        assert_eq!(metrics.get_value((0, 0)), Some(&Data::String(WORKBOOK_TITLE.to_string())));
        assert_eq!(metrics.get_value((2, 0)), Some(&Data::String("Metric".to_string())));
        // B4: total attendance stored as a number
        assert_eq!(metrics.get_value((3, 1)), Some(&Data::Float(1247.0)));
        assert_eq!(metrics.get_value((5, 1)), Some(&Data::String("4m 32s".to_string())));
        assert_eq!(metrics.get_value((6, 1)), Some(&Data::Float(87.3)));

        let agents = workbook.worksheet_range(SHEET_AGENTS).unwrap();
        assert_eq!(agents.height(), 1 + 4);
        assert_eq!(agents.get_value((1, 0)), Some(&Data::String("Ana Silva".to_string())));
        assert_eq!(agents.get_value((1, 1)), Some(&Data::Float(89.0)));
        assert_eq!(agents.get_value((1, 3)), Some(&Data::Float(4.8)));

        let volume = workbook.worksheet_range(SHEET_VOLUME).unwrap();
        assert_eq!(volume.height(), 1 + 11);
        assert_eq!(volume.get_value((11, 1)), Some(&Data::Float(98.0)));
    }

    #[test]
    fn test_written_workbook_with_empty_sections() {
        let mut rows = demo_rows();
        rows.agents.clear();
        rows.hourly.clear();

        let mut workbook = open(SpreadsheetBuilder::new().build(&rows).unwrap());
        assert_eq!(workbook.sheet_names(), SHEET_NAMES.to_vec());

        let agents = workbook.worksheet_range(SHEET_AGENTS).unwrap();
        assert_eq!(agents.height(), 1);
        assert_eq!(agents.get_value((0, 0)), Some(&Data::String("Name".to_string())));

        let volume = workbook.worksheet_range(SHEET_VOLUME).unwrap();
        assert_eq!(volume.height(), 1);
        assert_eq!(volume.get_value((0, 1)), Some(&Data::String("Volume".to_string())));
    }

    #[test]
    fn test_malformed_headline_is_rejected() {
        let mut rows = demo_rows();
        rows.headline[1].label = "Closed".to_string();

        assert!(matches!(SpreadsheetBuilder::new().build(&rows), Err(ReportError::Formatting(_))));
    }
}
