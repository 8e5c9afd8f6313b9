//! Node-detail tabs and view state declared for the miner node class.

use side_config_sdk::{NodeDetailTab, ViewState};

use crate::config::SideConfigModuleConfig;

pub const STATS_STATE: &str = "nodedetail.stats";
pub const GRAPH_STATE: &str = "nodedetail.graph";

fn tab(icon: &str, tooltip: &str, state: &str) -> NodeDetailTab {
    NodeDetailTab {
        icon: icon.to_owned(),
        tooltip: tooltip.to_owned(),
        state: state.to_owned(),
        active: false,
    }
}

/// INFO, STATS and GRAPH, in display order, all inactive.
#[must_use]
pub fn node_detail_tabs(cfg: &SideConfigModuleConfig) -> Vec<NodeDetailTab> {
    vec![
        tab("fa fa-circle-o", "INFO", &cfg.info_state),
        tab("fa fa-area-chart", "STATS", STATS_STATE),
        tab("fa fa-asterisk", "GRAPH", GRAPH_STATE),
    ]
}

/// View state backing the INFO tab.
#[must_use]
pub fn info_view_state(cfg: &SideConfigModuleConfig) -> ViewState {
    ViewState {
        name: cfg.info_state.clone(),
        template_url: cfg.info_template_url.clone(),
        controller: cfg.info_controller.clone(),
        controller_as: "vm".to_owned(),
    }
}
