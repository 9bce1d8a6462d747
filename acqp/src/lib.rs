pub mod acqp;
pub mod field_table;
pub mod notice;
pub mod subject;
pub mod timestamp;
