use clap;
use std::path::PathBuf;

#[derive(clap::Parser,Debug)]
pub struct StudyCsvArgs {
    /// study directories, each containing a Raw_Data folder with one
    /// unpacked scanner export in it
    pub study_dirs:Vec<PathBuf>,
}
