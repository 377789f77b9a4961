use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, Command};
use energy_net::{NetworkConfig, System};
use nalgebra::DMatrix;
use std::sync::Arc;

/// `NAME:VALUE` 형식 인자 분리
fn split_pair<'a>(raw: &'a str, flag: &str) -> Result<(&'a str, &'a str)> {
    match raw.split_once(':') {
        Some((left, right)) if !left.is_empty() && !right.is_empty() => Ok((left, right)),
        _ => bail!("--{} expects NAME:VALUE, got \"{}\"", flag, raw),
    }
}

fn build_command() -> Command {
    Command::new("energy-net")
        .version("0.1.0")
        .about("에너지 노드 네트워크 구성 및 출력 도구")
        .arg(
            Arg::new("name")
                .long("name")
                .short('n')
                .value_name("NAME")
                .help("시스템 이름")
        )
        .arg(
            Arg::new("layer")
                .long("layer")
                .short('l')
                .value_name("NAME:COUNT")
                .action(ArgAction::Append)
                .help("기본 상태 노드 COUNT개를 가진 레이어 추가 (반복 가능)")
        )
        .arg(
            Arg::new("couple")
                .long("couple")
                .short('c')
                .value_name("X:Y")
                .action(ArgAction::Append)
                .help("레이어 X에서 Y로의 결합 등록 (반복 가능)")
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("레이어 기본값 JSON 설정 파일")
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("없는 레이어를 결합하면 에러로 종료")
        )
}

fn main() -> Result<()> {
    env_logger::init();

    let matches = build_command().get_matches();

    let config = match matches.get_one::<String>("config") {
        Some(path) => NetworkConfig::from_json_file(path)?,
        None => NetworkConfig::default(),
    };
    let name = matches.get_one::<String>("name").map(String::as_str);
    let mut system = System::with_config(name, config)?;

    for raw in matches.get_many::<String>("layer").unwrap_or_default() {
        let (layer_name, count) = split_pair(raw, "layer")?;
        let count: usize = count
            .parse()
            .with_context(|| format!("invalid node count in --layer {}", raw))?;
        system.add_named_layer(layer_name, count, None, None)?;
    }

    let strict = matches.get_flag("strict");
    for raw in matches.get_many::<String>("couple").unwrap_or_default() {
        let (x, y) = split_pair(raw, "couple")?;
        let rows = system.layer(y).map_or(0, |l| l.num_nodes());
        let cols = system.layer(x).map_or(0, |l| l.num_nodes());
        let matrix = Arc::new(DMatrix::<f64>::identity(rows, cols));

        if strict {
            system.try_couple_layers(x, y, matrix)?;
        } else if !system.couple_layers(x, y, matrix) {
            log::info!("skipping coupling {}: layer missing", raw);
        }
    }

    print!("{}", system);
    Ok(())
}
