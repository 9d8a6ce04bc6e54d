//! 보고서에 필요한 최소한의 단위 변환 모음.

pub mod energy;
pub mod temperature;

pub use energy::{convert_energy, EnergyUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
