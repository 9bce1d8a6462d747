use regex::Regex;
use param_re::param_re;
use crate::notice::{Notice, NoticeSink};

/// study-level attributes read from the per-study subject text. all of them
/// are optional; missing ones stay blank
#[derive(Debug,Clone,PartialEq,Default)]
pub struct SubjectInfo {
    pub subject_id:String,
    pub study_name:String,
    pub sex:String,
    pub weight:String,
    pub subject_comments:String,
    pub study_comments:String,
}

pub fn read_subject_info(subject_text:&str,sink:&mut dyn NoticeSink) -> SubjectInfo {
    SubjectInfo {
        subject_id: grab_group(param_re::sized_angle_token("##$SUBJECT_id"),subject_text,"Subject ID","##$SUBJECT_id",sink),
        study_name: grab_group(param_re::sized_angle_token("##$SUBJECT_study_name"),subject_text,"Study Name","##$SUBJECT_study_name",sink),
        sex: grab_group(param_re::sized_angle_token("##$SUBJECT_sex"),subject_text,"Sex","##$SUBJECT_sex",sink),
        weight: grab_group(param_re::one_float("##$SUBJECT_weight"),subject_text,"Weight","##$SUBJECT_weight",sink),
        // comment fields keep the whole match. the text between the brackets
        // can hold punctuation the patterns make no attempt to parse
        subject_comments: grab_whole(param_re::comment_block("##$SUBJECT_remarks"),subject_text,"Subject Comments","##$SUBJECT_remarks",sink),
        study_comments: grab_whole(param_re::comment_block("##$SUBJECT_comment"),subject_text,"Study Comments","##$SUBJECT_comment",sink),
    }
}

fn grab_group(reg:Regex,text:&str,field:&str,key:&str,sink:&mut dyn NoticeSink) -> String {
    match reg.captures(text) {
        Some(caps) => utils::strip_newlines(caps.get(1).map_or("",|m| m.as_str())),
        None => {
            sink.notice(Notice{
                scope:String::from("subject"),
                field:field.to_string(),
                key:key.to_string(),
            });
            String::new()
        }
    }
}

fn grab_whole(reg:Regex,text:&str,field:&str,key:&str,sink:&mut dyn NoticeSink) -> String {
    match reg.find(text) {
        Some(mat) => utils::strip_newlines(mat.as_str()),
        None => {
            sink.notice(Notice{
                scope:String::from("subject"),
                field:field.to_string(),
                key:key.to_string(),
            });
            String::new()
        }
    }
}
