/// 에너지 단위. 내부 기준은 줄(J)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyUnit {
    Joule,
    Kilojoule,
    KilowattHour,
}

const J_PER_KWH: f64 = 3.6e6;

fn to_joule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Joule => value,
        EnergyUnit::Kilojoule => value * 1000.0,
        EnergyUnit::KilowattHour => value * J_PER_KWH,
    }
}

fn from_joule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Joule => value,
        EnergyUnit::Kilojoule => value / 1000.0,
        EnergyUnit::KilowattHour => value / J_PER_KWH,
    }
}

/// 에너지를 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    from_joule(to_joule(value, from), to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kwh_to_joule() {
        let j = convert_energy(1.0, EnergyUnit::KilowattHour, EnergyUnit::Joule);
        assert_eq!(j, 3.6e6);
        let kj = convert_energy(j, EnergyUnit::Joule, EnergyUnit::Kilojoule);
        assert_eq!(kj, 3600.0);
    }
}
