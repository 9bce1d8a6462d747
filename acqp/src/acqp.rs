use std::collections::HashMap;
use chrono::NaiveDateTime;
use regex::Regex;
use param_re::param_re;
use crate::field_table::{FieldSpec, Shape, Source, FIELD_TABLE, PULSE_PROGRAM_FIELD, SAVE_TIME_FIELD, ONE_PULSE_MARKER};
use crate::notice::{Notice, NoticeSink};
use crate::timestamp;

// the save time is not a ##$ parameter. it trails the OWNER line as
// "$$ <stamp> user@host", so it gets its own pattern
const OWNER_STAMP:&str = r"##OWNER=(?:\w+)\s*\$\$\s*([\d\-+.: ]+)";

// the software version line nests two values at once (the full version
// string and the major version), so it is a one-off rather than a template
const PV_VERSION:&str = r"##\$ACQ_sw_version\s*=\s*\(\s*\d+\s*\)\s*<(PV (\d+)\.\d+\.*\d*)>";

#[derive(Debug,Clone,PartialEq)]
pub enum FieldValue {
    Text(String),
    TextList(Vec<String>),
    Float(f64),
    FloatList(Vec<f64>),
    Empty,
}

impl FieldValue {
    /// flatten for a report cell. float sequences are space-joined the way
    /// they read in the source, absent fields become empty cells
    pub fn to_cell(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::TextList(v) => v.join(" "),
            FieldValue::Float(f) => f.to_string(),
            FieldValue::FloatList(v) => utils::vec_to_string(v),
            FieldValue::Empty => String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == FieldValue::Empty
    }
}

#[derive(Debug,Clone,PartialEq)]
pub enum ExtractError {
    MissingRequiredField(&'static str),
}

/// every parameter read from one scan's acqp/method pair. populated once by
/// a single extraction pass and never mutated afterwards
#[derive(Debug,Clone,PartialEq)]
pub struct ScanRecord {
    pub scan_number:String,
    pub save_time:NaiveDateTime,
    fields:HashMap<&'static str,FieldValue>,
}

impl ScanRecord {

    fn new(scan_number:&str,save_time:NaiveDateTime) -> Self {
        Self {
            scan_number:scan_number.to_string(),
            save_time,
            fields:HashMap::new(),
        }
    }

    pub fn get(&self,name:&str) -> FieldValue {
        self.fields.get(name).cloned().unwrap_or(FieldValue::Empty)
    }

    pub fn csv_cell(&self,name:&str) -> String {
        match name {
            "ScanNumber" => self.scan_number.clone(),
            n if n == SAVE_TIME_FIELD => self.save_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            _ => self.get(name).to_cell(),
        }
    }

    fn insert(&mut self,name:&'static str,value:FieldValue){
        self.fields.insert(name,value);
    }
}

pub fn pattern_for(shape:Shape,key:&str) -> Regex {
    match shape {
        Shape::BareWord => param_re::bare_word(key),
        Shape::AngleToken => param_re::angle_token(key),
        Shape::SizedAngleToken => param_re::sized_angle_token(key),
        Shape::AngleTokenArray => param_re::angle_token_array(key),
        Shape::TextBlock => param_re::text_block(key),
        Shape::FloatArray => param_re::float_array(key),
        Shape::OneFloat => param_re::one_float(key),
        Shape::TwoLineText => param_re::two_line_text(key),
        Shape::CommentBlock => param_re::comment_block(key),
    }
}

/// search the text with a shape's pattern and decode the first match. None
/// means the parameter is absent (or unparsable, which is treated the same)
pub fn decode_match(shape:Shape,text:&str,reg:&Regex) -> Option<FieldValue> {
    let caps = reg.captures(text)?;
    let value = match shape {
        Shape::BareWord | Shape::AngleToken | Shape::SizedAngleToken => {
            FieldValue::Text(caps.get(1)?.as_str().to_string())
        }
        Shape::TextBlock => {
            FieldValue::Text(utils::strip_newlines(caps.get(1)?.as_str()))
        }
        Shape::AngleTokenArray => {
            FieldValue::TextList(split_angle_tokens(caps.get(1)?.as_str()))
        }
        Shape::FloatArray => {
            let raw = utils::strip_newlines(caps.get(1)?.as_str());
            let mut values = Vec::<f64>::new();
            for token in raw.split_whitespace() {
                match token.trim_end_matches(',').parse::<f64>() {
                    Ok(v) => values.push(v),
                    Err(_) => return None
                }
            }
            FieldValue::FloatList(values)
        }
        Shape::OneFloat => {
            FieldValue::Float(caps.get(1)?.as_str().parse().ok()?)
        }
        Shape::TwoLineText => {
            let first = caps.get(1)?.as_str();
            let second = caps.get(2)?.as_str();
            FieldValue::TextList(vec![first.to_string(),second.to_string()])
        }
        Shape::CommentBlock => {
            // comments keep the whole match since their contents are not
            // parsed any further
            FieldValue::Text(utils::strip_newlines(caps.get(0)?.as_str()))
        }
    };
    Some(value)
}

// the raw capture looks like "<token one> <token two>". callers get the
// bracket contents in order
fn split_angle_tokens(raw:&str) -> Vec<String> {
    let token_reg = Regex::new(r"<([^>]*)>").expect("invalid regex");
    token_reg.captures_iter(raw)
        .map(|caps| utils::strip_newlines(caps.get(1).map_or("",|m| m.as_str())))
        .collect()
}

/// populate one scan record from its pair of source texts. only a missing
/// save time is fatal; every other absent field is blanked with a notice
pub fn extract(scan_id:&str,acqp_text:&str,method_text:&str,sink:&mut dyn NoticeSink) -> Result<ScanRecord,ExtractError> {

    // the record cannot be ordered without its save time, so that one is
    // looked up before anything else
    let save_time = find_save_time(method_text)
        .ok_or(ExtractError::MissingRequiredField(SAVE_TIME_FIELD))?;
    let mut record = ScanRecord::new(scan_id,save_time);

    for spec in FIELD_TABLE {
        lookup_field(spec,acqp_text,method_text,&mut record,sink);
        if spec.name == PULSE_PROGRAM_FIELD && is_one_pulse(&record) {
            return Ok(record)
        }
    }

    let pv_reg = Regex::new(PV_VERSION).expect("invalid regex");
    match pv_reg.captures(acqp_text) {
        Some(caps) => {
            let version = caps.get(1).map_or("",|m| m.as_str()).to_string();
            let major = caps.get(2).map_or("",|m| m.as_str()).to_string();
            record.insert("PVver",FieldValue::Text(version));
            record.insert("PVverMajor",FieldValue::Text(major));
        }
        None => {
            record.insert("PVver",FieldValue::Empty);
            record.insert("PVverMajor",FieldValue::Empty);
            sink.notice(Notice{
                scope:scan_id.to_string(),
                field:String::from("PVver"),
                key:String::from("##$ACQ_sw_version"),
            });
        }
    }

    Ok(record)
}

fn lookup_field(spec:&FieldSpec,acqp_text:&str,method_text:&str,record:&mut ScanRecord,sink:&mut dyn NoticeSink){
    let text = match spec.source {
        Source::Acqp => acqp_text,
        Source::Method => method_text,
    };
    let reg = pattern_for(spec.shape,spec.key);
    match decode_match(spec.shape,text,&reg) {
        Some(value) => {
            record.insert(spec.name,value);
        }
        None => {
            record.insert(spec.name,FieldValue::Empty);
            sink.notice(Notice{
                scope:record.scan_number.clone(),
                field:spec.name.to_string(),
                key:spec.key.to_string(),
            });
        }
    }
}

fn is_one_pulse(record:&ScanRecord) -> bool {
    match record.get(PULSE_PROGRAM_FIELD) {
        FieldValue::Text(s) => s.to_lowercase().contains(ONE_PULSE_MARKER),
        _=> false
    }
}

fn find_save_time(method_text:&str) -> Option<NaiveDateTime> {
    let reg = Regex::new(OWNER_STAMP).expect("invalid regex");
    let caps = reg.captures(method_text)?;
    timestamp::parse_timestamp(caps.get(1)?.as_str())
}
