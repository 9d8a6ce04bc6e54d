use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::report::{self, ReportError, ReportOutcome};
use crate::units::{convert_temperature, TemperatureUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 설정 로드/검증 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 보고서 생성 오류
    #[error("보고서 생성 오류: {0}")]
    Report(#[from] ReportError),
}

/// 설정에 따라 평형 계산 보고서를 만들고 완료 메시지를 출력한다.
pub fn run(config: &Config) -> Result<ReportOutcome, AppError> {
    let reaction = config.reaction;
    info!(
        delta_h = reaction.delta_h_j_per_mol,
        delta_s = reaction.delta_s_j_per_mol_k,
        molar_mass = reaction.molar_mass_g_per_mol,
        "평형 계산 시작"
    );

    // 1 bar 평형 온도는 운전 조건 파악용으로만 기록한다
    if let Some(t_k) = reaction.find_temperature_on_grid(1.0, &config.grid.bracket_grid()) {
        let t_c = convert_temperature(t_k, TemperatureUnit::Kelvin, TemperatureUnit::Celsius);
        info!("1 bar 평형 온도: {t_k:.1} K ({t_c:.1} °C)");
    }

    let outcome = report::generate(&reaction, config)?;
    info!(
        energy_density = outcome.energy_density_kwh_per_kg,
        efficiency = outcome.round_trip_efficiency,
        "보고서 생성 완료"
    );
    println!(
        "Advanced simulation complete. Check {}/.",
        config.output.dir.display()
    );
    Ok(outcome)
}
