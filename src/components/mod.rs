pub mod controls;
pub mod force_graph;
pub mod legend;
pub mod tooltip;
