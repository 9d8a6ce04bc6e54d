use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::reaction::{BracketGrid, Reaction, RoundTripInput};
use crate::sweep::Sweep;

/// 스윕 격자 설정.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// 온도 하한(K)
    pub t_min_k: f64,
    /// 온도 상한(K)
    pub t_max_k: f64,
    /// 평형 온도 역산용 샘플 수
    pub bracket_samples: usize,
    /// p_eq-T 그래프용 샘플 수
    pub plot_samples: usize,
    /// 압력 스윕 하한 지수(10^x bar)
    pub p_min_exp: f64,
    /// 압력 스윕 상한 지수(10^x bar)
    pub p_max_exp: f64,
    /// 압력 스윕 샘플 수
    pub pressure_samples: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        let bracket = BracketGrid::default();
        Self {
            t_min_k: bracket.t_min_k,
            t_max_k: bracket.t_max_k,
            bracket_samples: bracket.samples,
            plot_samples: 500,
            p_min_exp: -4.0,
            p_max_exp: 1.0,
            pressure_samples: 200,
        }
    }
}

impl GridConfig {
    /// 평형 온도 역산 격자.
    pub fn bracket_grid(&self) -> BracketGrid {
        BracketGrid {
            t_min_k: self.t_min_k,
            t_max_k: self.t_max_k,
            samples: self.bracket_samples,
        }
    }

    /// p_eq-T 그래프 온도 스윕.
    pub fn temperature_sweep(&self) -> Sweep {
        Sweep::linear(self.t_min_k, self.t_max_k, self.plot_samples)
    }

    /// T_eq-p 그래프 압력 스윕(bar).
    pub fn pressure_sweep(&self) -> Sweep {
        Sweep::log10(self.p_min_exp, self.p_max_exp, self.pressure_samples)
    }
}

/// 결과 파일 출력 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// 출력 디렉터리. 없으면 생성한다.
    pub dir: PathBuf,
    /// 그래프 가로 픽셀
    pub width_px: u32,
    /// 그래프 세로 픽셀
    pub height_px: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("outputs"),
            width_px: 1200,
            height_px: 900,
        }
    }
}

/// 애플리케이션 설정을 표현한다. 기본값은 Ca(OH)2 문헌값과 기본 스윕이다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reaction: Reaction,
    pub round_trip: RoundTripInput,
    pub grid: GridConfig,
    pub output: OutputConfig,
}

/// 설정 로드/검증 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 물리적으로 의미 없는 설정 값
    #[error("잘못된 설정 값: {0}")]
    Invalid(String),
}

/// 경로가 주어지면 TOML 설정을 읽고, 없으면 기본 설정을 돌려준다.
/// 어느 경우든 검증을 통과한 설정만 반환한다.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let cfg = match path {
        Some(p) => load_from(p)?,
        None => Config::default(),
    };
    cfg.validate()?;
    Ok(cfg)
}

/// TOML 파일에서 설정을 읽는다. 빠진 항목은 기본값으로 채운다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "설정 파일 로드");
    Ok(cfg)
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}

impl Config {
    /// 설정을 TOML 문자열로 직렬화한다.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 계산이 성립하지 않는 값을 걸러낸다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.reaction;
        let g = &self.grid;
        let rt = &self.round_trip;
        let finite = [
            ("reaction.delta_h_j_per_mol", r.delta_h_j_per_mol),
            ("reaction.delta_s_j_per_mol_k", r.delta_s_j_per_mol_k),
            ("reaction.molar_mass_g_per_mol", r.molar_mass_g_per_mol),
            ("grid.t_min_k", g.t_min_k),
            ("grid.t_max_k", g.t_max_k),
            ("grid.p_min_exp", g.p_min_exp),
            ("grid.p_max_exp", g.p_max_exp),
            ("round_trip.mass_kg", rt.mass_kg),
            ("round_trip.cp_j_per_kg_k", rt.cp_j_per_kg_k),
            ("round_trip.t_charge_k", rt.t_charge_k),
            ("round_trip.t_discharge_k", rt.t_discharge_k),
            ("round_trip.t_ref_k", rt.t_ref_k),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{name} 값 {value} 은 유한한 수가 아닙니다")));
        }
        if !(r.molar_mass_g_per_mol > 0.0) {
            return Err(invalid("몰질량은 0보다 커야 합니다"));
        }
        if !(g.t_min_k > 0.0) {
            return Err(invalid("온도 하한은 0 K 보다 커야 합니다"));
        }
        if !(g.t_max_k > g.t_min_k) {
            return Err(invalid(format!(
                "온도 상한 {} K 가 하한 {} K 이하입니다",
                g.t_max_k, g.t_min_k
            )));
        }
        if g.bracket_samples < 2 || g.plot_samples < 2 || g.pressure_samples < 2 {
            return Err(invalid("샘플 수는 2 이상이어야 합니다"));
        }
        if !(g.p_max_exp > g.p_min_exp) {
            return Err(invalid("압력 스윕 상한 지수가 하한 이하입니다"));
        }
        if !(rt.mass_kg > 0.0) || !(rt.cp_j_per_kg_k > 0.0) {
            return Err(invalid("질량과 비열은 0보다 커야 합니다"));
        }
        if self.output.width_px == 0 || self.output.height_px == 0 {
            return Err(invalid("그래프 크기는 0일 수 없습니다"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = load(None).expect("default config");
        assert_eq!(cfg.grid.bracket_samples, 2000);
        assert_eq!(cfg.grid.plot_samples, 500);
        assert_eq!(cfg.grid.pressure_samples, 200);
        assert_eq!(cfg.output.dir, PathBuf::from("outputs"));
        assert_eq!(cfg.reaction, Reaction::calcium_hydroxide());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [round_trip]
            mass_kg = 25.0

            [output]
            dir = "custom"
            "#,
        )
        .expect("parse");
        assert_eq!(cfg.round_trip.mass_kg, 25.0);
        assert_eq!(cfg.round_trip.cp_j_per_kg_k, 900.0);
        assert_eq!(cfg.output.dir, PathBuf::from("custom"));
        assert_eq!(cfg.output.width_px, 1200);
        assert_eq!(cfg.grid, GridConfig::default());
    }

    #[test]
    fn toml_string_parses_back() {
        let cfg = Config::default();
        let text = cfg.to_toml_string().expect("serialize");
        assert!(text.contains("[reaction]"));
        let parsed: Config = toml::from_str(&text).expect("parse");
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn rejects_inverted_temperature_range() {
        let mut cfg = Config::default();
        cfg.grid.t_min_k = 1300.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_single_sample_grid() {
        let mut cfg = Config::default();
        cfg.grid.bracket_samples = 1;
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_infinite_temperature_limit() {
        let cfg: Config = toml::from_str("[grid]\nt_max_k = inf\n").expect("parse");
        match cfg.validate() {
            Err(ConfigError::Invalid(msg)) => assert!(msg.contains("grid.t_max_k"), "{msg}"),
            other => panic!("expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn rejects_nan_round_trip_input() {
        let mut cfg = Config::default();
        cfg.round_trip.t_ref_k = f64::NAN;
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
        let mut cfg = Config::default();
        cfg.grid.p_min_exp = f64::NEG_INFINITY;
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.toml");
        fs::write(&path, "[reaction]\ndelta_h_j_per_mol = 100000.0\n").expect("write");
        let cfg = load(Some(&path)).expect("load");
        assert_eq!(cfg.reaction.delta_h_j_per_mol, 100000.0);
        assert_eq!(cfg.reaction.delta_s_j_per_mol_k, 143.8);
    }
}
