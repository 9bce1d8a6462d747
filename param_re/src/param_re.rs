use regex::Regex;
use regex::escape;

// building blocks for the value encodings found in paravision parameter files.
// every parameter line starts with the parameter name followed by '=' and one
// of the encodings below. array-valued parameters carry a parenthesized size
// prefix like ( 3 ) or ( 4, 2 ) that is matched structurally and never
// interpreted.
const SIZE_PREFIX:&str = r"\(\s*(?:\d+,*\s*)+\)";
const WORD:&str = r"(\w*)";
const ANGLE_TOKEN:&str = r"<([\w\.\+\-]+)>";
const ANGLE_COMMENT:&str = r"<.*>";
const ANGLE_TOKEN_ARRAY:&str = r"((?:<[\w\s\.\+\-]*>\s*)+)";
const TEXT_RUN:&str = r"([\w\s]+)";
const FLOAT_RUN:&str = r"((?:-*\d+\.*\d*\s*)+)";
const FLOAT:&str = r"(-*\d+\.*\d*)";

fn compile(pattern:String) -> Regex {
    Regex::new(&pattern).expect("invalid regex")
}

/// single run of word characters. capture 1 is the run
pub fn bare_word(param_name:&str) -> Regex {
    compile(format!(r"{}=\s*{}",escape(param_name),WORD))
}

/// single angle-bracketed token directly after the '='. capture 1 is the
/// token contents
pub fn angle_token(param_name:&str) -> Regex {
    compile(format!(r"{}=\s*{}",escape(param_name),ANGLE_TOKEN))
}

/// size prefix followed by a single angle-bracketed token. capture 1 is the
/// token contents
pub fn sized_angle_token(param_name:&str) -> Regex {
    compile(format!(r"{}=\s*{}\s*{}",escape(param_name),SIZE_PREFIX,ANGLE_TOKEN))
}

/// size prefix followed by a run of angle-bracketed tokens. capture 1 is the
/// raw run including the brackets. callers split on bracket boundaries
pub fn angle_token_array(param_name:&str) -> Regex {
    compile(format!(r"{}=\s*{}\s*{}",escape(param_name),SIZE_PREFIX,ANGLE_TOKEN_ARRAY))
}

/// size prefix followed by a run of word/space/newline characters. capture 1
/// is the raw run. callers strip embedded newlines
pub fn text_block(param_name:&str) -> Regex {
    compile(format!(r"{}=\s*{}\s*{}",escape(param_name),SIZE_PREFIX,TEXT_RUN))
}

/// size prefix followed by whitespace-separated signed decimals, possibly
/// wrapped over several lines. capture 1 is the raw run
pub fn float_array(param_name:&str) -> Regex {
    compile(format!(r"{}=\s*{}\s*{}",escape(param_name),SIZE_PREFIX,FLOAT_RUN))
}

/// one signed decimal directly after the '='. capture 1 is the number as text
pub fn one_float(param_name:&str) -> Regex {
    compile(format!(r"{}=\s*{}",escape(param_name),FLOAT))
}

/// word run, newline, word run on the following line. captures 1 and 2 are
/// the two runs
pub fn two_line_text(param_name:&str) -> Regex {
    compile(format!(r"{}=[ \t]*(\w+)[ \t\r]*\n[ \t]*(\w+)",escape(param_name)))
}

/// size prefix followed by an angle-bracketed free-text comment. the comment
/// may contain nested punctuation, so there is no sub-group. the whole match
/// is the usable result
pub fn comment_block(param_name:&str) -> Regex {
    compile(format!(r"{}=\s*{}\s*{}",escape(param_name),SIZE_PREFIX,ANGLE_COMMENT))
}
