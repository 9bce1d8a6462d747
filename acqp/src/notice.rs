/// emitted whenever an optional parameter fails to match its pattern. the
/// field is left blank and extraction continues
#[derive(Debug,Clone,PartialEq)]
pub struct Notice {
    pub scope:String,
    pub field:String,
    pub key:String,
}

pub trait NoticeSink {
    fn notice(&mut self,notice:Notice);
}

pub struct ConsoleSink;

impl NoticeSink for ConsoleSink {
    fn notice(&mut self,notice:Notice){
        println!("{}: {} ({}) not found, leaving blank",notice.scope,notice.field,notice.key);
    }
}

#[derive(Debug,Default)]
pub struct MemorySink {
    pub notices:Vec<Notice>
}

impl NoticeSink for MemorySink {
    fn notice(&mut self,notice:Notice){
        self.notices.push(notice);
    }
}
