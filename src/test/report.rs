#[cfg(test)]
mod tests {
    use std::fs;

    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    use crate::{
        app::{RunContext, calc::compute_metrics, report::write_csv},
        models::Holding,
    };

    #[test]
    fn every_holding_gets_a_row() {
        let dir = tempdir().unwrap();
        let ctx = RunContext::at(dir.path().join("run")).unwrap();

        let mut holdings = vec![
            Holding::new("TCS".into(), dec!(10), dec!(3200), dec!(3500)),
            Holding::bare("GHOST".into()),
        ];
        compute_metrics(&mut holdings);
        write_csv(&ctx, &holdings).unwrap();

        let report = fs::read_to_string(ctx.report_path()).unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Name,Ticker,Quantity"));
        assert!(lines[1].contains("TCS"));
        assert!(lines[2].contains("GHOST"));
    }

    #[test]
    fn unenriched_holding_has_empty_optional_cells() {
        let dir = tempdir().unwrap();
        let ctx = RunContext::at(dir.path().join("run")).unwrap();

        let holdings = vec![Holding::new("BARE".into(), dec!(1), dec!(10), dec!(12))];
        write_csv(&ctx, &holdings).unwrap();

        let report = fs::read_to_string(ctx.report_path()).unwrap();
        let row = report.lines().nth(1).unwrap();

        // name leads the row and is absent; metrics trail it and are absent
        assert!(row.starts_with(",BARE,1,10,12,"));
        assert!(row.ends_with(",,,,,"));
    }

    #[test]
    fn log_lines_accumulate() {
        let dir = tempdir().unwrap();
        let ctx = RunContext::at(dir.path().join("run")).unwrap();

        ctx.append_log("AAA - Data Not Found").unwrap();
        ctx.append_log("BBB - API error").unwrap();

        let log = fs::read_to_string(ctx.log_path()).unwrap();
        assert_eq!(
            log.lines().collect::<Vec<_>>(),
            ["AAA - Data Not Found", "BBB - API error"]
        );
    }
}
