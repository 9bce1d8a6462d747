use std::path::{Path, PathBuf};
use std::fs::File;
use std::io::Read;
use glob::{glob, Pattern};

/// slurp a file, returning None when it cannot be opened or read. parameter
/// files come straight off scanner exports, so a missing or unreadable file
/// is an expected condition for the caller to handle
pub fn read_to_string(filepath:&Path) -> Option<String> {
    let mut f = match File::open(filepath) {
        Ok(f) => f,
        Err(_) => return None
    };
    let mut s = String::new();
    match f.read_to_string(&mut s) {
        Ok(_) => Some(s),
        Err(_) => None
    }
}

// single depth search. the directory half of the pattern is a real path
// that may contain glob metacharacters (brackets show up in study names),
// so it gets escaped before the wildcard is joined on
pub fn get_all_matches(dir:&Path,pattern:&str) -> Option<Vec<PathBuf>> {
    let escaped = Pattern::escape(dir.to_str()?);
    let pat = Path::new(&escaped).join(pattern);
    let pat = pat.to_str()?;
    let matches:Vec<PathBuf> = glob(pat).expect("failed to read glob pattern").flat_map(|m| m).collect();
    match matches.is_empty() {
        true => None,
        false => Some(matches)
    }
}

pub fn strip_newlines(s:&str) -> String {
    s.replace('\r',"").replace('\n'," ").trim().to_string()
}

pub fn vec_to_string<T>(vec:&Vec<T>) -> String
    where T:std::string::ToString {
    let vstr:Vec<String> = vec.iter().map(|num| num.to_string()).collect();
    return vstr.join(" ");
}
