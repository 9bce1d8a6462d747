use acqp::acqp::{decode_match, extract, pattern_for, ExtractError, FieldValue};
use acqp::field_table::{Shape, SAVE_TIME_FIELD};
use acqp::notice::MemorySink;
use acqp::subject::read_subject_info;

const ACQP_TEXT:&str = "\
##$ACQ_sw_version=( 65 )
<PV 6.0.1>
##$PULPROG=( 32 )
<RARE.ppl>
##$ACQ_protocol_name=( 64 )
<T2_TurboRARE>
##$ACQ_repetition_time=( 1 )
2500
##$ACQ_echo_time=( 3 )
11 22
33
##$ACQ_recov_time=( 1 )
2466.42
##$NECHOES=3
##$RG=101
##$ACQ_flip_angle=90
##$BF1=400.331
##$SW_h=50000
##$BYTORDA=littleEndian
";

const METHOD_TEXT:&str = "\
##$PVM_NAverages=2
##$PVM_NRepetitions=1
##$PVM_RefPowCh1=1.579
##$PVM_SPackArrNSlices=( 1 )
24
##$PVM_NSPacks=1
##$PVM_Fov=( 2 )
30 30
##$PVM_Matrix=( 2 )
256 256
##$PVM_SliceThick=0.5
##$PVM_SPackArrSliceGap=( 1 )
0.1
##$PVM_ObjOrderList=( 24 )
0 12 1 13 2 14 3 15 4 16 5 17 6 18 7 19
8 20 9 21 10 22 11 23
##$PVM_SliceOffset=( 2 )
-0.25 0.25
##$PVM_SPackArrSliceOffset=( 1 )
0
##$PVM_ReadOffset=( 1 )
0
##$PVM_Phase1Offset=( 1 )
0
##$PVM_SPackArrSliceOrient=( 1 )
sagittal
##$PVM_NEvolutionCycles=1
##$ExcPulse1Enum=<Calculated>
##$RefPulse1Enum=<Calculated>
##$PVM_SPackArrReadOrient=( 1 )
H_F
##$PVM_RareFactor=8
##$PVM_FatSupOnOff=On
##$PVM_TriggerModule=Off
##OWNER=nmrsu
$$ 2021-01-01 10:00:00.000 +0100 nmrsu@mri
";

const SUBJECT_TEXT:&str = "\
##$SUBJECT_id=( 60 )
<mouse_042>
##$SUBJECT_study_name=( 64 )
<tumor_baseline>
##$SUBJECT_sex=( 8 )
<M>
##$SUBJECT_weight=23.5
##$SUBJECT_remarks=( 2048 )
<breathing steady, 45 bpm>
##$SUBJECT_comment=( 2048 )
<baseline imaging session>
";

#[test]
fn full_extraction(){
    let mut sink = MemorySink::default();
    let record = extract("4",ACQP_TEXT,METHOD_TEXT,&mut sink).expect("extraction failed");

    assert_eq!(record.scan_number,"4");
    assert_eq!(record.get("PulseProg"),FieldValue::Text(String::from("RARE.ppl")));
    assert_eq!(record.get("acqProtocol"),FieldValue::Text(String::from("T2_TurboRARE")));
    assert_eq!(record.get("RepTime"),FieldValue::FloatList(vec![2500.0]));
    assert_eq!(record.get("EchoTime"),FieldValue::FloatList(vec![11.0,22.0,33.0]));
    assert_eq!(record.csv_cell("EchoTime"),"11 22 33");
    assert_eq!(record.get("nAverages"),FieldValue::Float(2.0));
    assert_eq!(record.get("SliceThick"),FieldValue::Float(0.5));
    assert_eq!(record.get("SliceOffset"),FieldValue::FloatList(vec![-0.25,0.25]));
    assert_eq!(record.get("ImageOrient"),FieldValue::Text(String::from("sagittal")));
    assert_eq!(record.get("ReadOutDir"),FieldValue::Text(String::from("H_F")));
    assert_eq!(record.get("FatSat"),FieldValue::Text(String::from("On")));
    assert_eq!(record.get("ByteOrder"),FieldValue::Text(String::from("littleEndian")));
    assert_eq!(record.get("PVver"),FieldValue::Text(String::from("PV 6.0.1")));
    assert_eq!(record.get("PVverMajor"),FieldValue::Text(String::from("6")));
    assert_eq!(record.csv_cell("SaveTime"),"2021-01-01 10:00:00");

    // flow encoding is not part of this protocol, so those two fields blank
    // with a notice each and nothing else complains
    assert!(record.get("FlowDir").is_empty());
    assert!(record.get("Venc").is_empty());
    let noticed:Vec<String> = sink.notices.iter().map(|n| n.field.clone()).collect();
    assert_eq!(noticed,vec![String::from("FlowDir"),String::from("Venc")]);
}

#[test]
fn extraction_is_idempotent(){
    let mut sink = MemorySink::default();
    let first = extract("4",ACQP_TEXT,METHOD_TEXT,&mut sink).expect("extraction failed");
    let second = extract("4",ACQP_TEXT,METHOD_TEXT,&mut sink).expect("extraction failed");
    assert_eq!(first,second);
}

#[test]
fn optional_field_omission_blanks_only_that_field(){
    let mut baseline_sink = MemorySink::default();
    let baseline = extract("4",ACQP_TEXT,METHOD_TEXT,&mut baseline_sink).expect("extraction failed");

    let without_rare = METHOD_TEXT.replace("##$PVM_RareFactor=8\n","");
    let mut sink = MemorySink::default();
    let record = extract("4",ACQP_TEXT,&without_rare,&mut sink).expect("extraction failed");

    assert!(record.get("RareFactor").is_empty());
    assert_eq!(record.get("FatSat"),baseline.get("FatSat"));
    assert_eq!(record.get("EchoTime"),baseline.get("EchoTime"));

    let rare_notices:Vec<_> = sink.notices.iter().filter(|n| n.field == "RareFactor").collect();
    assert_eq!(rare_notices.len(),1);
    assert_eq!(rare_notices[0].key,"##$PVM_RareFactor");
    assert_eq!(sink.notices.len(),baseline_sink.notices.len()+1);
}

#[test]
fn missing_save_time_is_fatal(){
    let without_owner = METHOD_TEXT.replace("##OWNER=nmrsu\n","x\n");
    let mut sink = MemorySink::default();
    let result = extract("4",ACQP_TEXT,&without_owner,&mut sink);
    assert_eq!(result,Err(ExtractError::MissingRequiredField(SAVE_TIME_FIELD)));
}

#[test]
fn one_pulse_scan_exits_early(){
    let one_pulse_acqp = ACQP_TEXT.replace("<RARE.ppl>","<SinglePulse.ppl>");
    let mut sink = MemorySink::default();
    let record = extract("1",&one_pulse_acqp,METHOD_TEXT,&mut sink).expect("extraction failed");

    // resolved before the check: scan number, save time, pulse program
    assert_eq!(record.get("PulseProg"),FieldValue::Text(String::from("SinglePulse.ppl")));
    assert_eq!(record.csv_cell("SaveTime"),"2021-01-01 10:00:00");

    // everything after the check keeps its default even though the source
    // texts contain the parameters
    assert!(record.get("RepTime").is_empty());
    assert!(record.get("ReceiverGain").is_empty());
    assert!(record.get("Venc").is_empty());
    assert!(record.get("PVver").is_empty());
    assert!(sink.notices.is_empty());
}

#[test]
fn float_array_decodes_across_lines(){
    let text = "##$ACQ_echo_time=( 3 )\n1.0 2.0\n3.0\n";
    let reg = pattern_for(Shape::FloatArray,"##$ACQ_echo_time");
    let value = decode_match(Shape::FloatArray,text,&reg).expect("no match");
    assert_eq!(value,FieldValue::FloatList(vec![1.0,2.0,3.0]));
    assert!(!value.to_cell().contains('\n'));
}

#[test]
fn two_line_text_decodes_both_runs(){
    let text = "##$GO_raw_data_format=GO_32BIT_SGN_INT\nlittleEndian\n";
    let reg = pattern_for(Shape::TwoLineText,"##$GO_raw_data_format");
    let value = decode_match(Shape::TwoLineText,text,&reg).expect("no match");
    assert_eq!(value,FieldValue::TextList(vec![
        String::from("GO_32BIT_SGN_INT"),
        String::from("littleEndian"),
    ]));
}

#[test]
fn angle_token_array_decodes_in_order(){
    let text = "##$ACQ_coil_elements=( 2 )\n<surface coil 1> <volume coil>\n";
    let reg = pattern_for(Shape::AngleTokenArray,"##$ACQ_coil_elements");
    let value = decode_match(Shape::AngleTokenArray,text,&reg).expect("no match");
    assert_eq!(value,FieldValue::TextList(vec![
        String::from("surface coil 1"),
        String::from("volume coil"),
    ]));
}

#[test]
fn subject_info_reads_all_fields(){
    let mut sink = MemorySink::default();
    let info = read_subject_info(SUBJECT_TEXT,&mut sink);
    assert_eq!(info.subject_id,"mouse_042");
    assert_eq!(info.study_name,"tumor_baseline");
    assert_eq!(info.sex,"M");
    assert_eq!(info.weight,"23.5");
    assert!(info.subject_comments.contains("45 bpm"));
    assert!(info.subject_comments.starts_with("##$SUBJECT_remarks="));
    assert!(info.study_comments.contains("baseline imaging session"));
    assert!(sink.notices.is_empty());
}

#[test]
fn subject_sex_missing_blanks_with_notice(){
    let without_sex = SUBJECT_TEXT.replace("##$SUBJECT_sex=( 8 )\n<M>\n","");
    let mut sink = MemorySink::default();
    let info = read_subject_info(&without_sex,&mut sink);
    assert_eq!(info.sex,"");
    assert_eq!(info.subject_id,"mouse_042");
    assert_eq!(sink.notices.len(),1);
    assert_eq!(sink.notices[0].field,"Sex");
}
