//! 고체-기체 가역 반응 Ca(OH)2 ↔ CaO + H2O 의 평형 열역학 계산 모듈 모음.
//! 평형 압력/온도는 `equilibrium`, 에너지 밀도와 왕복 효율은 `storage` 에 둔다.

pub mod equilibrium;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use equilibrium::BracketGrid;
pub use storage::{RoundTripInput, RoundTripResult};

/// 기체 상수 R [J/(mol·K)]
pub const GAS_CONSTANT_J_PER_MOL_K: f64 = 8.314462618;

/// Ca(OH)2 탈수 반응 엔탈피 ΔH [J/mol] (흡열)
pub const CA_OH2_DELTA_H_J_PER_MOL: f64 = 104.4e3;
/// Ca(OH)2 탈수 반응 엔트로피 ΔS [J/(mol·K)]
pub const CA_OH2_DELTA_S_J_PER_MOL_K: f64 = 143.8;
/// Ca(OH)2 몰질량 [g/mol]
pub const CA_OH2_MOLAR_MASS_G_PER_MOL: f64 = 74.09;

/// 반응 열역학 파라미터. 한 번의 실행 동안 변하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reaction {
    /// 반응 엔탈피 ΔH [J/mol]
    pub delta_h_j_per_mol: f64,
    /// 반응 엔트로피 ΔS [J/(mol·K)]
    pub delta_s_j_per_mol_k: f64,
    /// 반응물 몰질량 [g/mol]
    pub molar_mass_g_per_mol: f64,
}

impl Default for Reaction {
    fn default() -> Self {
        Self::calcium_hydroxide()
    }
}

impl Reaction {
    /// Ca(OH)2 ↔ CaO + H2O 문헌값.
    pub fn calcium_hydroxide() -> Self {
        Self {
            delta_h_j_per_mol: CA_OH2_DELTA_H_J_PER_MOL,
            delta_s_j_per_mol_k: CA_OH2_DELTA_S_J_PER_MOL_K,
            molar_mass_g_per_mol: CA_OH2_MOLAR_MASS_G_PER_MOL,
        }
    }

    /// 반응물 1 kg 당 몰수 [mol/kg]
    pub fn mol_per_kg(&self) -> f64 {
        1000.0 / self.molar_mass_g_per_mol
    }
}
