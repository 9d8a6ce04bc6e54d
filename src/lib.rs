//! Ca(OH)2 ↔ CaO + H2O 열화학 축열 평형 계산 라이브러리.
//! 계산 로직을 CLI 와 분리하여 테스트와 재사용을 쉽게 한다.

pub mod app;
pub mod config;
pub mod reaction;
pub mod report;
pub mod sweep;
pub mod units;
