use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

const CAPTION_FONT: (&str, u32) = ("sans-serif", 28);

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// 연속된 `Some` 구간만 이어 선분 목록으로 나눈다. `None` 은 그래프의 공백이 된다.
pub fn split_segments(points: &[(f64, Option<f64>)]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for &(x, y) in points {
        match y {
            Some(y) => current.push((x, y)),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// 평형 압력(로그 축) - 온도 그래프를 PNG 로 그린다.
pub fn render_p_eq_vs_t(
    out_path: &Path,
    size: (u32, u32),
    curve: &[(f64, f64)],
) -> Result<(), Box<dyn Error>> {
    let (t_lo, t_hi) = bounds(curve.iter().map(|&(t, _)| t)).ok_or("빈 온도 스윕")?;
    let (p_lo, p_hi) = bounds(curve.iter().map(|&(_, p)| p).filter(|&p| p > 0.0))
        .ok_or("양수 평형 압력이 없습니다")?;

    let root = BitMapBackend::new(out_path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Ca(OH)2 <-> CaO + H2O: p_eq vs T", CAPTION_FONT)
        .margin(16)
        .x_label_area_size(56)
        .y_label_area_size(90)
        .build_cartesian_2d(t_lo..t_hi, (p_lo..p_hi).log_scale())?;

    chart
        .configure_mesh()
        .x_desc("Temperature (K)")
        .y_desc("Equilibrium Pressure (bar)")
        .y_label_formatter(&|p| format!("{p:.0e}"))
        .bold_line_style(BLACK.mix(0.25))
        .light_line_style(BLACK.mix(0.08))
        .draw()?;

    chart.draw_series(LineSeries::new(
        curve.iter().copied(),
        BLUE.stroke_width(2),
    ))?;

    root.present()?;
    Ok(())
}

/// 평형 온도 - 압력(로그 축) 그래프를 PNG 로 그린다.
/// 평형 온도를 찾지 못한 점은 선을 끊어 공백으로 둔다.
pub fn render_t_eq_vs_p(
    out_path: &Path,
    size: (u32, u32),
    curve: &[(f64, Option<f64>)],
) -> Result<(), Box<dyn Error>> {
    let (p_lo, p_hi) = bounds(curve.iter().map(|&(p, _)| p).filter(|&p| p > 0.0))
        .ok_or("빈 압력 스윕")?;
    let segments = split_segments(curve);
    // 유효한 점이 하나도 없으면 축만 그린다
    let (t_lo, t_hi) = bounds(segments.iter().flatten().map(|&(_, t)| t)).unwrap_or((0.0, 1.0));
    let pad = ((t_hi - t_lo) * 0.05).max(1.0);

    let root = BitMapBackend::new(out_path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Equilibrium Temperature vs Pressure", CAPTION_FONT)
        .margin(16)
        .x_label_area_size(56)
        .y_label_area_size(90)
        .build_cartesian_2d((p_lo..p_hi).log_scale(), (t_lo - pad)..(t_hi + pad))?;

    chart
        .configure_mesh()
        .x_desc("Pressure (bar)")
        .y_desc("Equilibrium Temperature (K)")
        .x_label_formatter(&|p| format!("{p:.0e}"))
        .bold_line_style(BLACK.mix(0.25))
        .light_line_style(BLACK.mix(0.08))
        .draw()?;

    for segment in segments {
        chart.draw_series(LineSeries::new(segment, BLUE.stroke_width(2)))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaps_split_segments() {
        let pts = [
            (1.0, None),
            (2.0, Some(10.0)),
            (3.0, Some(11.0)),
            (4.0, None),
            (5.0, Some(12.0)),
        ];
        let segments = split_segments(&pts);
        assert_eq!(segments, vec![vec![(2.0, 10.0), (3.0, 11.0)], vec![(5.0, 12.0)]]);
    }

    #[test]
    fn bounds_skip_non_finite() {
        let b = bounds([3.0, f64::NAN, -1.0, f64::INFINITY].into_iter());
        assert_eq!(b, Some((-1.0, 3.0)));
        assert_eq!(bounds(std::iter::empty()), None);
    }
}
