use crate::batch::ResultIndex;
use crate::catalog::{ScriptCatalog, ScriptGroup};
use crate::voice::VoiceProfile;
use std::io::{self, Write};

/// Сумма секунд для ключей сценариев с данным суффиксом.
/// Отсутствующие в сводке ключи пропускаются.
pub fn total_seconds(index: &ResultIndex, keys: &[&str], suffix: &str) -> f64 {
    keys.iter()
        .filter_map(|key| index.get(&format!("{}{}", key, suffix)))
        .fold(0.0, |total, record| total + record.seconds)
}

fn clip_set_title(prefix: &str) -> String {
    match prefix.strip_prefix("clip") {
        Some(number) if !number.is_empty() => format!("CLIP {}", number),
        _ => prefix.to_uppercase(),
    }
}

fn write_block<W: Write>(
    out: &mut W,
    title: &str,
    index: &ResultIndex,
    keys: &[&str],
    suffix: &str,
) -> io::Result<()> {
    writeln!(out, "\n--- {} ---", title)?;
    for key in keys {
        let result_key = format!("{}{}", key, suffix);
        if let Some(record) = index.get(&result_key) {
            writeln!(out, "  {}: {:.1}s", result_key, record.seconds)?;
        }
    }
    writeln!(out, "  TOTAL: {:.1}s", total_seconds(index, keys, suffix))
}

/// Пишет отчёт по группам: полная и короткая версии, затем каждый набор клипов
/// для основного голоса и отдельно для каждого дополнительного голоса.
pub fn write_summary<W: Write>(
    out: &mut W,
    index: &ResultIndex,
    catalog: &ScriptCatalog,
    profiles: &[VoiceProfile],
) -> io::Result<()> {
    for group in [ScriptGroup::Full, ScriptGroup::Brief] {
        let keys = catalog.keys_in_group(group);
        if !keys.is_empty() {
            write_block(out, group.title(), index, &keys, "")?;
        }
    }

    let clip_sets = catalog.clip_sets();
    for profile in profiles {
        for (prefix, keys) in &clip_sets {
            let title = if profile.is_primary() {
                clip_set_title(prefix)
            } else {
                format!("{} ({})", clip_set_title(prefix), profile.suffix)
            };
            write_block(out, &title, index, keys, &profile.suffix)?;
        }
    }

    Ok(())
}

/// Печатает отчёт в stdout. Ошибки вывода игнорируются.
pub fn print_summary(index: &ResultIndex, catalog: &ScriptCatalog, profiles: &[VoiceProfile]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = write_summary(&mut out, index, catalog, profiles);
    let _ = out.flush();
}
