use std::fs;
use std::path::Path;

/// 요약 텍스트 두 줄을 만든다.
pub fn format_summary(energy_density_kwh_per_kg: f64, round_trip_efficiency: f64) -> String {
    format!(
        "Energy density (theoretical): {energy_density_kwh_per_kg:.4} kWh/kg\n\
         Simplified round-trip efficiency: {round_trip_efficiency:.3}\n"
    )
}

/// 요약 파일을 기록한다. 기존 내용은 덮어쓴다.
pub fn write_summary(
    path: &Path,
    energy_density_kwh_per_kg: f64,
    round_trip_efficiency: f64,
) -> std::io::Result<()> {
    fs::write(
        path,
        format_summary(energy_density_kwh_per_kg, round_trip_efficiency),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_lines_with_fixed_precision() {
        let text = format_summary(0.391_42, 0.815_46);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Energy density (theoretical): 0.3914 kWh/kg",
                "Simplified round-trip efficiency: 0.815",
            ]
        );
    }
}
