use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::bin_constants::DEFAULT_PEPPER_PATH;
use crate::hasher::ProductionHasherConfig;
use crate::lib_constants::{DEFAULT_ARGON2_M_COST, DEFAULT_ARGON2_OUTPUT_LEN, DEFAULT_ARGON2_P_COST, DEFAULT_ARGON2_T_COST};

/// The `[hasher_config]` table. Only used in multi-user mode.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct HasherConfigData {
    /// Memory cost in KiB.
    #[serde(default = "hasher_config_default_m_cost")]
    pub argon2_m_cost: u32,

    #[serde(default = "hasher_config_default_t_cost")]
    pub argon2_t_cost: u32,

    #[serde(default = "hasher_config_default_p_cost")]
    pub argon2_p_cost: u32,

    #[serde(default = "hasher_config_default_output_len")]
    pub argon2_output_len: Option<usize>,

    /// Base64 file written by `notekeeper-gen --generate-pepper`.
    #[serde(default = "hasher_config_default_pepper_path")]
    pub pepper_path: PathBuf,
}

fn hasher_config_default_m_cost() -> u32 {
    DEFAULT_ARGON2_M_COST
}

fn hasher_config_default_t_cost() -> u32 {
    DEFAULT_ARGON2_T_COST
}

fn hasher_config_default_p_cost() -> u32 {
    DEFAULT_ARGON2_P_COST
}

fn hasher_config_default_output_len() -> Option<usize> {
    DEFAULT_ARGON2_OUTPUT_LEN
}

fn hasher_config_default_pepper_path() -> PathBuf {
    DEFAULT_PEPPER_PATH.into()
}

impl HasherConfigData {
    pub fn argon2_params(&self) -> Result<argon2::Params, argon2::Error> {
        argon2::Params::new(
            self.argon2_m_cost,
            self.argon2_t_cost,
            self.argon2_p_cost,
            self.argon2_output_len,
        )
    }

    pub fn to_hasher_config(&self) -> Result<ProductionHasherConfig, argon2::Error> {
        self.argon2_params()
            .map(|params| ProductionHasherConfig::new(params, self.pepper_path.clone()))
    }
}

impl Default for HasherConfigData {
    fn default() -> Self {
        HasherConfigData {
            argon2_m_cost: DEFAULT_ARGON2_M_COST,
            argon2_t_cost: DEFAULT_ARGON2_T_COST,
            argon2_p_cost: DEFAULT_ARGON2_P_COST,
            argon2_output_len: DEFAULT_ARGON2_OUTPUT_LEN,
            pepper_path: DEFAULT_PEPPER_PATH.into(),
        }
    }
}
