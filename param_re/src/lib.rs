pub mod param_re;
