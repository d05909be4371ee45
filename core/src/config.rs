use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::history::GapMetric;
use crate::model::family::GoalPolicy;

const CONFIG_FILE_NAME: &str = "config.json";
const DATA_DIR_NAME: &str = ".coophours";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Months of history charted before the current week.
    pub period_length_months: u32,
    /// Gaps wider than this many days get a zero point in the chart.
    pub gap_threshold_days: i64,
    pub gap_metric: GapMetric,
    pub goal: GoalPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            period_length_months: 4,
            gap_threshold_days: 5,
            gap_metric: GapMetric::default(),
            goal: GoalPolicy::default(),
        }
    }
}

impl Config {
    /// Reads `config.json` from `data_dir`, falling back to defaults when
    /// the file does not exist.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self, data_dir: &Path) -> Result<()> {
        fs::create_dir_all(data_dir)?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(data_dir.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }
}

/// `base_dir` if given, otherwise `~/.coophours`.
pub fn resolve_data_dir(base_dir: Option<PathBuf>) -> Result<PathBuf> {
    match base_dir {
        Some(dir) => Ok(dir),
        None => {
            let home_dir = dirs::home_dir()
                .ok_or_else(|| anyhow!("Could not determine home directory"))?;
            Ok(home_dir.join(DATA_DIR_NAME))
        }
    }
}
