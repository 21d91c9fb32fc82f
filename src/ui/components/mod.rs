pub mod chart_scale;
pub mod detail_table;
pub mod donut_chart;
pub mod freight_table;
pub mod kpi_card;
pub mod margin_indicator;
pub mod parameter_input;
pub mod sensitivity_chart;
pub mod sensitivity_table;
pub mod toast;
pub mod waterfall_chart;
