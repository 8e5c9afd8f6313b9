use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Environment variables with this prefix override file values,
/// e.g. `SIDE_CONFIG_CONFIG_DIR=/opt/minemeld/config`.
pub const ENV_PREFIX: &str = "SIDE_CONFIG_";

/// Configuration for the `side_config` module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SideConfigModuleConfig {
    /// Node class whose detail view gets the side config tabs.
    pub node_class: String,

    /// Appended to the node name to form the store key.
    pub key_suffix: String,

    /// View state of the INFO tab.
    pub info_state: String,

    pub info_template_url: String,

    /// Host controller bound to the INFO view.
    pub info_controller: String,

    /// States starting with this prefix are node-detail views.
    pub node_detail_prefix: String,

    /// Directory of the on-disk side config files, if the file store is used.
    pub config_dir: Option<PathBuf>,
}

impl Default for SideConfigModuleConfig {
    fn default() -> Self {
        Self {
            node_class: "taxiing.node.Miner".to_owned(),
            key_suffix: "_side_config".to_owned(),
            info_state: "nodedetail.taxiinginfo".to_owned(),
            info_template_url: "/extensions/webui/taxiingWebui/taxiing.miner.info.html".to_owned(),
            info_controller: "NodeDetailInfoController".to_owned(),
            node_detail_prefix: "nodedetail.".to_owned(),
            config_dir: None,
        }
    }
}

impl SideConfigModuleConfig {
    /// Load the configuration: defaults, then `path` (YAML) if given, then
    /// `SIDE_CONFIG_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed, contains unknown keys,
    /// or the merged configuration has an empty required value.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }

        let cfg: Self = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("node_class", &self.node_class),
            ("key_suffix", &self.key_suffix),
            ("info_state", &self.info_state),
            ("node_detail_prefix", &self.node_detail_prefix),
        ] {
            if value.trim().is_empty() {
                anyhow::bail!("side config: '{name}' must not be empty");
            }
        }
        Ok(())
    }
}
