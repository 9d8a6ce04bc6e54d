use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thermochem_storage::config::{self, Config, ConfigError};
use thermochem_storage::app;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "thermochem_storage")]
#[command(about = "Ca(OH)2 <-> CaO + H2O equilibrium and storage report", long_about = None)]
struct Cli {
    /// TOML 설정 파일 경로. 없으면 기본값을 사용한다.
    #[arg(long)]
    config: Option<PathBuf>,
    /// 출력 디렉터리 (기본: outputs)
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// 적용될 설정을 TOML 로 출력하고 종료한다.
    #[arg(long)]
    print_config: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 보고서를 생성한다.
fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// 설정 파일과 명령행 덮어쓰기를 합쳐 최종 설정을 만든다.
fn resolve_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut cfg = config::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.output_dir {
        cfg.output.dir = dir.clone();
    }
    Ok(cfg)
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = resolve_config(&cli)?;
    if cli.print_config {
        print!("{}", cfg.to_toml_string()?);
        return Ok(());
    }
    app::run(&cfg)?;
    Ok(())
}
