use clap::Parser;
use acqp::notice::ConsoleSink;
use study_csv::args::StudyCsvArgs;
use study_csv::report::write_report;
use study_csv::study::Study;

fn main(){
    let args = StudyCsvArgs::parse();
    let mut sink = ConsoleSink;
    for study_dir in &args.study_dirs {
        let result = Study::discover(study_dir).and_then(|study| {
            let report = study.compile(&mut sink)?;
            let path = study.report_path();
            write_report(&path,&report)?;
            Ok(path)
        });
        match result {
            Ok(path) => println!("wrote {:?}",path),
            Err(e) => println!("study {:?} skipped: {:?}",study_dir,e)
        }
    }
}
