use serde::{Deserialize, Serialize};

use crate::regs::RegNames;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisasmConfig {
    /// Address of the first word.
    pub start_address: u32,
    /// Print address and raw word columns before the mnemonic.
    pub list_bytes: bool,
    pub abi_names: bool,
    /// Reserved for pseudo-instruction rendering; currently has no effect.
    pub pseudo: bool,
}

impl Default for DisasmConfig {
    fn default() -> Self {
        Self {
            start_address: 0,
            list_bytes: true,
            abi_names: false,
            pseudo: false,
        }
    }
}

impl DisasmConfig {
    pub fn reg_names(&self) -> RegNames {
        if self.abi_names {
            RegNames::Abi
        } else {
            RegNames::Numeric
        }
    }
}
