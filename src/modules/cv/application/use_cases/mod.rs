pub mod load_cv;
pub mod prefill_cv;
pub mod save_cv;
