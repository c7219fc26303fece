pub mod output;
pub mod search;

pub use output::{print_summary, write_icons_csv, write_result_json, write_runs_csv};
pub use search::{run_simulation, summarize, RunRecord, SimulationConfig, SimulationResults, SimulationSummary};
