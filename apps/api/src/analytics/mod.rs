// Aggregate analytics: one Ikigai summary across every review in the system,
// plus the chart series the dashboard plots from it.

pub mod charts;
pub mod handlers;
pub mod models;
pub mod prompts;
