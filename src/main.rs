use anyhow::{Context, Result};
use voiceover_gen::{
    log_debug, print_summary, setup_logging, BatchGenerator, EdgeTts, GeneratorConfig,
    ProgressTracker,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = GeneratorConfig::load().context("Не удалось загрузить настройки генератора")?;
    setup_logging(config.log_level_filter()?);

    for profile in &config.voice_profiles {
        let coverage = if profile.is_primary() { "all scripts" } else { "clips" };
        println!(
            "Voice: {} | Rate: {} | Suffix: '{}' ({})",
            profile.voice, profile.rate, profile.suffix, coverage
        );
    }
    println!("Output: {}\n", config.output_dir.display());

    let progress = ProgressTracker::with_callback(Box::new(|percent, status| {
        log_debug(&format!("[{:5.1}%] {}", percent, status));
    }));

    let tts = EdgeTts::new(&config.audio_format);
    let generator = BatchGenerator::new(config, tts)?.with_progress(progress);

    generator
        .preflight()
        .await
        .context("Проверка голосов не пройдена")?;

    let (index, summary_path) = generator
        .run()
        .await
        .context("Генерация прервана, сводка не записана")?;

    println!("\n{} audio files generated.", index.len());
    println!("Durations saved to: {}", summary_path.display());

    let config = generator.config();
    print_summary(&index, &config.catalog, &config.voice_profiles);

    Ok(())
}
