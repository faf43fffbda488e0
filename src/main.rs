use animotion_config::AnimotionConfig;
use animotion_core::{Category, CodeFormat, Session};
use animotion_io::{Artifact, ClipboardSink, Exporter, SystemClipboard};
use anyhow::{Context, Result};

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let config = AnimotionConfig::load();
    let session = build_session(&config)?;

    let visible = session.visible();
    println!("=== {} ({}) ===", session.category().label(), visible.len());
    if visible.is_empty() {
        println!("No animations found.");
    }
    for animation in &visible {
        let marker = if animation.id == session.selected().id { "*" } else { " " };
        println!("{marker} {:<16} {}", animation.id, animation.category);
    }
    println!();

    let artifact = Artifact::from_session(&session);
    println!("=== {} [{}] ===", session.selected().name, artifact.file_name);
    println!("{}", artifact.contents);

    if let Some(dir) = &config.export.dir {
        let path = Exporter::new(dir).write(&artifact)?;
        println!("\nWrote {}", path.display());
    }

    if config.export.copy_to_clipboard {
        match SystemClipboard::new().and_then(|mut clipboard| clipboard.copy_text(&artifact.contents)) {
            Ok(()) => println!("Copied to clipboard."),
            Err(e) => log::warn!("clipboard copy skipped: {}", e),
        }
    }

    Ok(())
}

fn build_session(config: &AnimotionConfig) -> Result<Session> {
    let mut session = Session::default();

    if let Some(category) = &config.session.category {
        let category: Category = category.parse().context("invalid session.category")?;
        session.set_category(category);
    }
    if let Some(search) = &config.session.search {
        session.set_search_text(search.as_str());
    }
    if let Some(id) = &config.session.animation {
        let selected = session.select(id);
        if selected.id != id.as_str() {
            log::warn!("unknown animation {:?}, showing {:?}", id, selected.id);
        }
    }

    let format: CodeFormat = config
        .export
        .format
        .parse()
        .context("invalid export.format")?;
    session.set_format(format);

    log::info!(
        "session ready: animation={} format={}",
        session.selected().id,
        session.format()
    );
    Ok(session)
}
