//! 평형 계산 결과를 그래프 두 장과 요약 텍스트로 내보내는 보고서 생성기.

pub mod plots;
pub mod summary;

use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::reaction::Reaction;

/// p_eq-T 그래프 파일 이름
pub const P_EQ_VS_T_FILE: &str = "advanced_p_eq_vs_T.png";
/// T_eq-p 그래프 파일 이름
pub const T_EQ_VS_P_FILE: &str = "advanced_Teq_vs_p.png";
/// 요약 텍스트 파일 이름
pub const SUMMARY_FILE: &str = "advanced_summary.txt";

/// 보고서 생성 중 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ReportError {
    /// 디렉터리 생성/파일 쓰기 실패
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 그래프 렌더링 실패
    #[error("그래프 생성 오류: {0}")]
    Plot(String),
}

/// 보고서 생성 결과. 기록한 파일 경로와 요약 값을 담는다.
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub p_eq_plot: PathBuf,
    pub t_eq_plot: PathBuf,
    pub summary: PathBuf,
    /// 이론 에너지 밀도(kWh/kg)
    pub energy_density_kwh_per_kg: f64,
    /// 단순 왕복 효율
    pub round_trip_efficiency: f64,
    /// 온도 격자 안에서 평형 온도를 찾지 못한 압력 샘플 수
    pub unresolved_pressures: usize,
}

/// 압력 스윕 각 점의 평형 온도. 찾지 못한 점은 `None`.
pub fn equilibrium_temperature_sweep(
    reaction: &Reaction,
    cfg: &Config,
) -> Vec<(f64, Option<f64>)> {
    let grid = cfg.grid.bracket_grid();
    cfg.grid
        .pressure_sweep()
        .points()
        .into_iter()
        .map(|p| (p, reaction.find_temperature_on_grid(p, &grid)))
        .collect()
}

/// 출력 디렉터리를 만들고 그래프 두 장과 요약 파일을 기록한다.
/// 기존 파일은 덮어쓴다.
pub fn generate(reaction: &Reaction, cfg: &Config) -> Result<ReportOutcome, ReportError> {
    let dir = &cfg.output.dir;
    fs::create_dir_all(dir)?;
    let size = (cfg.output.width_px, cfg.output.height_px);

    let temps = cfg.grid.temperature_sweep().points();
    tracing::debug!(samples = temps.len(), "p_eq 스윕");
    let p_eq_curve: Vec<(f64, f64)> = temps
        .iter()
        .map(|&t| (t, reaction.equilibrium_pressure_bar(t)))
        .collect();
    let p_eq_plot = dir.join(P_EQ_VS_T_FILE);
    plots::render_p_eq_vs_t(&p_eq_plot, size, &p_eq_curve)
        .map_err(|e| ReportError::Plot(e.to_string()))?;
    info!(path = %p_eq_plot.display(), "p_eq-T 그래프 저장");

    let t_eq_curve = equilibrium_temperature_sweep(reaction, cfg);
    let unresolved_pressures = t_eq_curve.iter().filter(|(_, t)| t.is_none()).count();
    if unresolved_pressures > 0 {
        warn!(
            count = unresolved_pressures,
            "온도 격자 범위 밖의 압력이 있어 그래프에 공백이 생깁니다"
        );
    }
    let t_eq_plot = dir.join(T_EQ_VS_P_FILE);
    plots::render_t_eq_vs_p(&t_eq_plot, size, &t_eq_curve)
        .map_err(|e| ReportError::Plot(e.to_string()))?;
    info!(path = %t_eq_plot.display(), "T_eq-p 그래프 저장");

    let energy_density_kwh_per_kg = reaction.energy_density_kwh_per_kg();
    let round_trip_efficiency = reaction.round_trip_efficiency(&cfg.round_trip).efficiency;
    let summary = dir.join(SUMMARY_FILE);
    summary::write_summary(&summary, energy_density_kwh_per_kg, round_trip_efficiency)?;
    info!(path = %summary.display(), "요약 저장");

    Ok(ReportOutcome {
        p_eq_plot,
        t_eq_plot,
        summary,
        energy_density_kwh_per_kg,
        round_trip_efficiency,
        unresolved_pressures,
    })
}
