pub mod gad7;
pub mod ghq12;
pub mod phq9;

/// Two-week symptom frequency scale shared by PHQ-9 and GAD-7.
pub(crate) const FREQUENCY_SCALE: [(&str, u32); 4] = [
    ("Not at all", 0),
    ("Several days", 1),
    ("More than half the days", 2),
    ("Nearly every day", 3),
];

pub(crate) const TWO_WEEK_STEM: &str =
    "Over the last 2 weeks, how often have you been bothered by the following problem:";
