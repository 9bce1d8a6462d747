/// the nine value encodings used by the parameter files. each one maps to a
/// template in param_re
#[derive(Debug,Clone,Copy,PartialEq)]
pub enum Shape {
    BareWord,
    AngleToken,
    SizedAngleToken,
    AngleTokenArray,
    TextBlock,
    FloatArray,
    OneFloat,
    TwoLineText,
    CommentBlock,
}

/// which of the two per-scan texts a field is read from. the assignment is
/// fixed per field, never discovered at runtime
#[derive(Debug,Clone,Copy,PartialEq)]
pub enum Source {
    Acqp,
    Method,
}

pub struct FieldSpec {
    pub name:&'static str,
    pub source:Source,
    pub shape:Shape,
    pub key:&'static str,
}

pub const PULSE_PROGRAM_FIELD:&str = "PulseProg";
pub const SAVE_TIME_FIELD:&str = "SaveTime";

// pulse programs containing this marker are one-pulse acquisitions that lack
// most of the remaining parameters, so extraction stops early for them
pub const ONE_PULSE_MARKER:&str = "singlepulse";

// one entry per extracted field, consumed in order by a single loop. the
// pulse program comes first so the one-pulse check can run before anything
// else is looked up
pub const FIELD_TABLE:&[FieldSpec] = &[
    FieldSpec{name:"PulseProg",        source:Source::Acqp,   shape:Shape::SizedAngleToken, key:"##$PULPROG"},
    FieldSpec{name:"RepTime",          source:Source::Acqp,   shape:Shape::FloatArray,      key:"##$ACQ_repetition_time"},
    FieldSpec{name:"nAverages",        source:Source::Method, shape:Shape::OneFloat,        key:"##$PVM_NAverages"},
    FieldSpec{name:"acqProtocol",      source:Source::Acqp,   shape:Shape::SizedAngleToken, key:"##$ACQ_protocol_name"},
    FieldSpec{name:"nRepetitions",     source:Source::Method, shape:Shape::OneFloat,        key:"##$PVM_NRepetitions"},
    FieldSpec{name:"refPower",         source:Source::Method, shape:Shape::OneFloat,        key:"##$PVM_RefPowCh1"},
    FieldSpec{name:"ReceiverGain",     source:Source::Acqp,   shape:Shape::OneFloat,        key:"##$RG"},
    FieldSpec{name:"EchoTime",         source:Source::Acqp,   shape:Shape::FloatArray,      key:"##$ACQ_echo_time"},
    FieldSpec{name:"RecovTime",        source:Source::Acqp,   shape:Shape::FloatArray,      key:"##$ACQ_recov_time"},
    FieldSpec{name:"nEchoes",          source:Source::Acqp,   shape:Shape::OneFloat,        key:"##$NECHOES"},
    FieldSpec{name:"nSlices",          source:Source::Method, shape:Shape::FloatArray,      key:"##$PVM_SPackArrNSlices"},
    FieldSpec{name:"nSlicePacks",      source:Source::Method, shape:Shape::OneFloat,        key:"##$PVM_NSPacks"},
    FieldSpec{name:"FOV",              source:Source::Method, shape:Shape::FloatArray,      key:"##$PVM_Fov"},
    FieldSpec{name:"Matrix",           source:Source::Method, shape:Shape::FloatArray,      key:"##$PVM_Matrix"},
    FieldSpec{name:"SliceThick",       source:Source::Method, shape:Shape::OneFloat,        key:"##$PVM_SliceThick"},
    FieldSpec{name:"SliceSep",         source:Source::Method, shape:Shape::FloatArray,      key:"##$PVM_SPackArrSliceGap"},
    FieldSpec{name:"SliceList",        source:Source::Method, shape:Shape::FloatArray,      key:"##$PVM_ObjOrderList"},
    FieldSpec{name:"SliceOffset",      source:Source::Method, shape:Shape::FloatArray,      key:"##$PVM_SliceOffset"},
    FieldSpec{name:"SlicePackOffset",  source:Source::Method, shape:Shape::FloatArray,      key:"##$PVM_SPackArrSliceOffset"},
    FieldSpec{name:"ReadOffset",       source:Source::Method, shape:Shape::FloatArray,      key:"##$PVM_ReadOffset"},
    FieldSpec{name:"PhaseOffset",      source:Source::Method, shape:Shape::FloatArray,      key:"##$PVM_Phase1Offset"},
    FieldSpec{name:"ImageOrient",      source:Source::Method, shape:Shape::TextBlock,       key:"##$PVM_SPackArrSliceOrient"},
    FieldSpec{name:"nEvolutionCycles", source:Source::Method, shape:Shape::OneFloat,        key:"##$PVM_NEvolutionCycles"},
    FieldSpec{name:"FlipAngle",        source:Source::Acqp,   shape:Shape::OneFloat,        key:"##$ACQ_flip_angle"},
    FieldSpec{name:"BasicFreq",        source:Source::Acqp,   shape:Shape::OneFloat,        key:"##$BF1"},
    FieldSpec{name:"SpecWidth",        source:Source::Acqp,   shape:Shape::OneFloat,        key:"##$SW_h"},
    FieldSpec{name:"ExcitationPulse",  source:Source::Method, shape:Shape::AngleToken,      key:"##$ExcPulse1Enum"},
    FieldSpec{name:"RefocusingPulse",  source:Source::Method, shape:Shape::AngleToken,      key:"##$RefPulse1Enum"},
    FieldSpec{name:"ReadOutDir",       source:Source::Method, shape:Shape::TextBlock,       key:"##$PVM_SPackArrReadOrient"},
    FieldSpec{name:"RareFactor",       source:Source::Method, shape:Shape::OneFloat,        key:"##$PVM_RareFactor"},
    FieldSpec{name:"FatSat",           source:Source::Method, shape:Shape::BareWord,        key:"##$PVM_FatSupOnOff"},
    FieldSpec{name:"Gating",           source:Source::Method, shape:Shape::BareWord,        key:"##$PVM_TriggerModule"},
    FieldSpec{name:"ByteOrder",        source:Source::Acqp,   shape:Shape::BareWord,        key:"##$BYTORDA"},
    FieldSpec{name:"FlowDir",          source:Source::Method, shape:Shape::BareWord,        key:"##$FlowEncodingDirection"},
    FieldSpec{name:"Venc",             source:Source::Method, shape:Shape::OneFloat,        key:"##$FlowRange"},
];

// columns of the per-scan report rows, in emission order. everything else in
// the record is retained in memory but not reported
pub const CSV_FIELDS:&[&str] = &[
    "ScanNumber", "acqProtocol",
    "RepTime", "EchoTime", "FlipAngle", "RareFactor",
    "nEchoes", "FOV", "Matrix", "nSlices", "SliceThick",
    "SliceSep", "nAverages", "nEvolutionCycles", "nRepetitions",
    "FatSat", "Gating", "ImageOrient", "SlicePackOffset",
    "ReadOutDir", "ReadOffset", "PhaseOffset", "ExcitationPulse",
    "RefocusingPulse", "SpecWidth", "refPower", "ReceiverGain",
    "SaveTime", "FlowDir", "Venc",
];
