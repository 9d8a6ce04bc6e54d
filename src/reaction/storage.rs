use serde::{Deserialize, Serialize};

use super::Reaction;
use crate::units::{convert_energy, EnergyUnit};

/// 단순 왕복 효율 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundTripInput {
    /// 저장 매체 질량(kg)
    pub mass_kg: f64,
    /// 매체 비열 [J/(kg·K)]
    pub cp_j_per_kg_k: f64,
    /// 충전(탈수) 온도(K)
    pub t_charge_k: f64,
    /// 방전(수화) 온도(K)
    pub t_discharge_k: f64,
    /// 현열 기준 온도(K)
    pub t_ref_k: f64,
}

impl Default for RoundTripInput {
    fn default() -> Self {
        Self {
            mass_kg: 10.0,
            cp_j_per_kg_k: 900.0,
            t_charge_k: 900.0,
            t_discharge_k: 500.0,
            t_ref_k: 298.15,
        }
    }
}

/// 왕복 효율 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundTripResult {
    /// 반응열(J)
    pub reaction_energy_j: f64,
    /// 충전 시 투입 에너지 = 반응열 + 충전 현열 (J)
    pub energy_in_j: f64,
    /// 방전 시 회수 에너지 = 반응열 + 방전 현열 (J)
    pub energy_out_j: f64,
    /// 효율(무차원). 범위 제한 없음
    pub efficiency: f64,
}

impl Reaction {
    /// 반응물 1 kg 당 이론 저장 에너지 밀도(kWh/kg).
    pub fn energy_density_kwh_per_kg(&self) -> f64 {
        let j_per_kg = self.delta_h_j_per_mol * self.mol_per_kg();
        convert_energy(j_per_kg, EnergyUnit::Joule, EnergyUnit::KilowattHour)
    }

    /// 반응열과 현열만 고려한 왕복 효율을 계산한다.
    ///
    /// 충전 온도 > 방전 온도 > 기준 온도일 때 (0, 1] 범위가 나오며,
    /// 그 밖의 입력도 그대로 계산한다.
    pub fn round_trip_efficiency(&self, input: &RoundTripInput) -> RoundTripResult {
        let reaction_energy_j = self.delta_h_j_per_mol * self.mol_per_kg() * input.mass_kg;
        let sensible_in = input.cp_j_per_kg_k * input.mass_kg * (input.t_charge_k - input.t_ref_k);
        let sensible_out =
            input.cp_j_per_kg_k * input.mass_kg * (input.t_discharge_k - input.t_ref_k);
        let energy_in_j = reaction_energy_j + sensible_in;
        let energy_out_j = reaction_energy_j + sensible_out;
        RoundTripResult {
            reaction_energy_j,
            energy_in_j,
            energy_out_j,
            efficiency: energy_out_j / energy_in_j,
        }
    }
}
