pub mod dashboard;

pub use dashboard::{render_dashboard, render_dashboard_body};
