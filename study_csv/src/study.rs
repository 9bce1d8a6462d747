use std::path::{Path, PathBuf};
use chrono::NaiveDateTime;
use acqp::acqp::{extract, ScanRecord};
use acqp::notice::NoticeSink;
use acqp::subject::{read_subject_info, SubjectInfo};

pub const RAW_DATA_DIR:&str = "Raw_Data";
pub const ACQP_FILE:&str = "acqp";
pub const METHOD_FILE:&str = "method";
pub const SUBJECT_FILE:&str = "subject";

#[derive(Debug,Clone,PartialEq)]
pub enum StudyError {
    RawDataNotFound(PathBuf),
    ExportDirNotFound(PathBuf),
    UnreadableSource(PathBuf),
    NoUsableScans(PathBuf),
    ReportWrite(String),
}

pub struct Study {
    pub study_dir:PathBuf,
    pub data_dir:PathBuf,
}

pub struct StudyReport {
    pub scans:Vec<ScanRecord>,
    pub subject:SubjectInfo,
    pub start:NaiveDateTime,
    pub finish:NaiveDateTime,
}

impl Study {

    pub fn discover(study_dir:&Path) -> Result<Self,StudyError> {
        let raw_dir = study_dir.join(RAW_DATA_DIR);
        if !raw_dir.is_dir() {
            return Err(StudyError::RawDataNotFound(study_dir.to_owned()))
        }
        let entries = utils::get_all_matches(&raw_dir,"*")
            .ok_or(StudyError::ExportDirNotFound(raw_dir.clone()))?;
        // the export dir sits next to the .study file the scanner unpacks.
        // the last directory wins when there are several
        let data_dir = entries.into_iter().filter(|p| p.is_dir()).last()
            .ok_or(StudyError::ExportDirNotFound(raw_dir))?;
        Ok(Self{
            study_dir:study_dir.to_owned(),
            data_dir
        })
    }

    /// numeric subdirectories of the export dir are scans, processed in
    /// ascending scan-number order
    pub fn scan_dirs(&self) -> Vec<(u32,PathBuf)> {
        let entries = utils::get_all_matches(&self.data_dir,"*").unwrap_or(Vec::new());
        let mut scans:Vec<(u32,PathBuf)> = entries.into_iter()
            .filter(|p| p.is_dir())
            .filter_map(|p| {
                let n = p.file_name()?.to_str()?.parse::<u32>().ok()?;
                Some((n,p))
            })
            .collect();
        scans.sort_by_key(|(n,_)| *n);
        scans
    }

    /// run extraction over every scan in the study. a scan whose files are
    /// unreadable or whose save time is missing is reported and skipped;
    /// the study fails only when nothing usable remains or the subject text
    /// cannot be read
    pub fn compile(&self,sink:&mut dyn NoticeSink) -> Result<StudyReport,StudyError> {
        let mut scans = Vec::<ScanRecord>::new();
        for (scan_number,dir) in self.scan_dirs() {
            let acqp_text = match utils::read_to_string(&dir.join(ACQP_FILE)) {
                Some(t) => t,
                None => {
                    println!("scan {}: cannot read {:?}, skipping",scan_number,dir.join(ACQP_FILE));
                    continue
                }
            };
            let method_text = match utils::read_to_string(&dir.join(METHOD_FILE)) {
                Some(t) => t,
                None => {
                    println!("scan {}: cannot read {:?}, skipping",scan_number,dir.join(METHOD_FILE));
                    continue
                }
            };
            match extract(&scan_number.to_string(),&acqp_text,&method_text,sink) {
                Ok(record) => scans.push(record),
                Err(e) => println!("scan {}: {:?}, skipping",scan_number,e)
            }
        }
        if scans.is_empty() {
            return Err(StudyError::NoUsableScans(self.study_dir.clone()))
        }

        let mut start = scans[0].save_time;
        let mut finish = scans[0].save_time;
        for scan in &scans {
            if scan.save_time < start {
                start = scan.save_time;
            }
            if scan.save_time > finish {
                finish = scan.save_time;
            }
        }

        let subject_file = self.data_dir.join(SUBJECT_FILE);
        let subject_text = utils::read_to_string(&subject_file)
            .ok_or(StudyError::UnreadableSource(subject_file))?;
        let subject = read_subject_info(&subject_text,sink);

        Ok(StudyReport{
            scans,
            subject,
            start,
            finish
        })
    }

    pub fn report_path(&self) -> PathBuf {
        let base = match self.study_dir.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => String::from("study")
        };
        self.study_dir.join(format!("{}_acqp.csv",base))
    }
}
