use anyhow::Context;
use clap::Parser;
use exif_timeline::{cli::Cli, export, timeline, Config};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::io::IsTerminal;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    // Auto は端末判定をしないため、リダイレクト時は明示的に無効化する
    let color = if std::io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    TermLogger::init(
        level,
        ConfigBuilder::new().set_time_level(LevelFilter::Off).build(),
        TerminalMode::Stderr,
        color,
    )
    .context("ロガーの初期化に失敗")?;

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(cli.input, cli.output, cli.media_prefix);
    log::debug!("設定: {:?}", config);

    // 1. スキャン・抽出・並べ替え
    let document =
        timeline::process_images_in_directory(&config.input_dir, &config.media_url_prefix)?;

    // 2. 表示してから保存
    let json = export::to_json(&document)?;
    if !cli.no_print {
        println!("{}", json);
    }
    export::write_json(&json, &config.output_path)?;
    log::info!("結果を保存: {}", config.output_path.display());

    Ok(())
}
