use std::path::Path;
use acqp::field_table::CSV_FIELDS;
use crate::study::{StudyError, StudyReport};

/// write the study report: one row per scan under the reportable-field
/// header, then the timing footer and the study information block
pub fn write_report(path:&Path,report:&StudyReport) -> Result<(),StudyError> {
    write_rows(path,report).map_err(|e| StudyError::ReportWrite(e.to_string()))
}

fn write_rows(path:&Path,report:&StudyReport) -> Result<(),csv::Error> {
    // footer rows are shorter than scan rows, so the writer must not
    // enforce a fixed record length
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(path)?;

    wtr.write_record(CSV_FIELDS)?;
    for scan in &report.scans {
        let row:Vec<String> = CSV_FIELDS.iter().map(|name| scan.csv_cell(name)).collect();
        wtr.write_record(&row)?;
    }

    wtr.write_record([""])?;
    wtr.write_record(vec![
        String::from("Start date:"),
        report.start.format("%Y-%m-%d").to_string(),
        String::from("Start time:"),
        report.start.format("%H:%M").to_string(),
    ])?;
    wtr.write_record(vec![
        String::from("Finish date:"),
        report.finish.format("%Y-%m-%d").to_string(),
        String::from("Finish time:"),
        report.finish.format("%H:%M").to_string(),
    ])?;
    let elapsed_min = (report.finish - report.start).num_seconds() as f64/60.0;
    wtr.write_record(vec![
        String::from("Elapsed time:"),
        format!("{:.1}",elapsed_min),
        String::from("min"),
    ])?;

    wtr.write_record([""])?;
    wtr.write_record([""])?;
    wtr.write_record(["STUDY INFORMATION"])?;
    wtr.write_record([""])?;
    wtr.write_record(["Subject ID:","",report.subject.subject_id.as_str()])?;
    wtr.write_record(["Study Name:","",report.subject.study_name.as_str()])?;
    wtr.write_record(["Sex:","",report.subject.sex.as_str()])?;
    wtr.write_record(["Weight:","",report.subject.weight.as_str()])?;
    wtr.write_record(["Subject Comments:","",report.subject.subject_comments.as_str()])?;
    wtr.write_record(["Study Comments:","",report.subject.study_comments.as_str()])?;

    wtr.flush()?;
    Ok(())
}
