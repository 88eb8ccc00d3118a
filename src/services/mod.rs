// Pure rule predicates and update notifications

pub mod notify;
pub mod win_detector;
