use super::{Reaction, GAS_CONSTANT_J_PER_MOL_K};
use crate::sweep::linspace;

/// 평형 온도 역산에 쓰는 온도 샘플 격자.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketGrid {
    /// 하한 온도(K)
    pub t_min_k: f64,
    /// 상한 온도(K)
    pub t_max_k: f64,
    /// 샘플 개수
    pub samples: usize,
}

impl Default for BracketGrid {
    fn default() -> Self {
        Self {
            t_min_k: 300.0,
            t_max_k: 1200.0,
            samples: 2000,
        }
    }
}

impl BracketGrid {
    /// 인접 샘플 간 온도 간격(K). 역산 정밀도의 상한이 된다.
    pub fn spacing_k(&self) -> f64 {
        (self.t_max_k - self.t_min_k) / (self.samples.saturating_sub(1).max(1)) as f64
    }
}

/// numpy 부호 규약: 0 은 0, NaN 은 NaN.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        // 0 또는 NaN 은 그대로 돌려준다
        x
    }
}

impl Reaction {
    /// Van't Hoff 식으로 평형 압력(bar)을 계산한다.
    ///
    /// `ln p = -ΔH/(R·T) + ΔS/R`. `t_k > 0` 은 호출자 책임이며 검사하지 않는다.
    pub fn equilibrium_pressure_bar(&self, t_k: f64) -> f64 {
        let r = GAS_CONSTANT_J_PER_MOL_K;
        let ln_p = -self.delta_h_j_per_mol / (r * t_k) + self.delta_s_j_per_mol_k / r;
        ln_p.exp()
    }

    /// 기본 격자(300~1200 K, 2000점)로 목표 압력의 평형 온도(K)를 찾는다.
    pub fn find_temperature_for_pressure(&self, p_target_bar: f64) -> Option<f64> {
        self.find_temperature_on_grid(p_target_bar, &BracketGrid::default())
    }

    /// 주어진 격자에서 `ln p_eq(T) - ln p_target` 의 첫 부호 변화를 찾아
    /// 할선 한 번으로 보간한 평형 온도(K)를 돌려준다.
    ///
    /// 부호 변화가 없으면(범위 밖 압력, 0 이하 압력, NaN) `None`.
    /// 가장 낮은 온도의 교차점만 사용하며 반복 보정은 하지 않는다.
    pub fn find_temperature_on_grid(&self, p_target_bar: f64, grid: &BracketGrid) -> Option<f64> {
        let temps = linspace(grid.t_min_k, grid.t_max_k, grid.samples);
        let ln_target = p_target_bar.ln();
        let diffs: Vec<f64> = temps
            .iter()
            .map(|&t| self.equilibrium_pressure_bar(t).ln() - ln_target)
            .collect();

        let i = diffs
            .windows(2)
            .position(|w| sign(w[0]) * sign(w[1]) <= 0.0)?;
        let (t1, t2) = (temps[i], temps[i + 1]);
        let (f1, f2) = (diffs[i], diffs[i + 1]);
        let denom = f2 - f1;
        if denom == 0.0 {
            // 양 끝 모두 정확히 0인 평탄 구간
            return Some(t1);
        }
        Some(t1 - f1 * (t2 - t1) / denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_follows_numpy() {
        assert_eq!(sign(3.0), 1.0);
        assert_eq!(sign(-0.5), -1.0);
        assert_eq!(sign(0.0), 0.0);
        assert!(sign(f64::NAN).is_nan());
    }

    #[test]
    fn default_grid_spacing() {
        let grid = BracketGrid::default();
        assert!((grid.spacing_k() - 900.0 / 1999.0).abs() < 1e-12);
    }

    #[test]
    fn flat_pressure_returns_lower_sample() {
        // ΔH = 0 이면 p_eq 가 온도와 무관하므로 모든 차이가 정확히 0
        let flat = Reaction {
            delta_h_j_per_mol: 0.0,
            ..Reaction::default()
        };
        let grid = BracketGrid {
            t_min_k: 400.0,
            t_max_k: 500.0,
            samples: 5,
        };
        let p = flat.equilibrium_pressure_bar(450.0);
        assert_eq!(flat.equilibrium_pressure_bar(400.0), p);
        let t = flat.find_temperature_on_grid(p, &grid).expect("flat bracket");
        assert_eq!(t, 400.0);
    }

    #[test]
    fn exact_sample_hit_returns_sample() {
        let reaction = Reaction::default();
        let grid = BracketGrid {
            t_min_k: 300.0,
            t_max_k: 1200.0,
            samples: 10,
        };
        // 격자점 400 K 에서의 압력을 목표로 하면 400 K 근방이 나와야 한다
        let p = reaction.equilibrium_pressure_bar(400.0);
        let t = reaction.find_temperature_on_grid(p, &grid).expect("bracket");
        assert!((t - 400.0).abs() < 1e-6, "t={t}");
    }
}
