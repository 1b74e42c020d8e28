mod dashboard;
pub use dashboard::{metric_accent, metric_icon, metric_title, Dashboard};

mod home;
pub use home::Home;
