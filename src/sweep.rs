//! 온도/압력 스윕용 샘플 격자 생성.
//!
//! 선형 격자는 `start + i * step` 으로 만들고 마지막 점을 `stop` 으로 고정한다.
//! 로그 격자는 지수 구간을 선형으로 나눈 뒤 `10^x` 로 변환한다.

/// 격자 간격 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepType {
    /// 균등 간격
    Linear,
    /// 10의 거듭제곱 기준 로그 간격
    Log10,
}

/// 단일 스윕 정의.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    /// 시작 값. `Log10` 이면 지수(예: -4 → 1e-4)
    pub start: f64,
    /// 끝 값. `Log10` 이면 지수
    pub stop: f64,
    /// 점 개수
    pub num_points: usize,
    pub sweep_type: SweepType,
}

impl Sweep {
    /// 선형 스윕을 만든다.
    pub fn linear(start: f64, stop: f64, num_points: usize) -> Self {
        Self {
            start,
            stop,
            num_points,
            sweep_type: SweepType::Linear,
        }
    }

    /// `10^start_exp` 부터 `10^stop_exp` 까지의 로그 스윕을 만든다.
    pub fn log10(start_exp: f64, stop_exp: f64, num_points: usize) -> Self {
        Self {
            start: start_exp,
            stop: stop_exp,
            num_points,
            sweep_type: SweepType::Log10,
        }
    }

    /// 스윕의 모든 점을 생성한다.
    pub fn points(&self) -> Vec<f64> {
        match self.sweep_type {
            SweepType::Linear => linspace(self.start, self.stop, self.num_points),
            SweepType::Log10 => logspace(self.start, self.stop, self.num_points),
        }
    }
}

/// `[start, stop]` 구간을 `n` 개의 균등 간격 점으로 나눈다. 양 끝점을 포함한다.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|i| i as f64 * step + start).collect();
            // 누적 오차 없이 끝점 고정
            points[n - 1] = stop;
            points
        }
    }
}

/// `10^start_exp` ~ `10^stop_exp` 구간의 로그 간격 점을 만든다.
pub fn logspace(start_exp: f64, stop_exp: f64, n: usize) -> Vec<f64> {
    linspace(start_exp, stop_exp, n)
        .into_iter()
        .map(|x| 10f64.powf(x))
        .collect()
}
