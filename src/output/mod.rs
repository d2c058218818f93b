pub mod formatter;

pub use formatter::{
    format_age, format_breakdown, format_emissions, format_factor_table, format_history_table,
    format_json, format_report, format_tsv, should_use_colors,
};
