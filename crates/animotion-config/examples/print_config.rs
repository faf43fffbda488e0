/// Example program to print the loaded settings
///
/// Run with: cargo run -p animotion-config --example print_config

fn main() {
    let config = animotion_config::AnimotionConfig::load();

    println!("=== Animotion Settings ===\n");

    println!("Session:");
    println!("  Animation: {:?}", config.session.animation);
    println!("  Category: {:?}", config.session.category);
    println!("  Search: {:?}", config.session.search);
    println!();

    println!("Export:");
    println!("  Format: {}", config.export.format);
    println!("  Directory: {:?}", config.export.dir);
    println!("  Copy To Clipboard: {}", config.export.copy_to_clipboard);
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Settings ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize settings: {}", e);
        }
    }
}
