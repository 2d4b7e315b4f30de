use keyed_kv::{Dictionary, HomeRenovation};
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, or `info` when it is unset or unparsable.
fn log_filter(rust_log: Option<String>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();

    println!("Key-Reporting Dictionary Demo");
    println!("=============================\n");

    let instrumentation = keyed_kv::install()?;
    println!("Installed {} interception points\n", instrumentation.len());

    println!("Lookup of a missing key (i32 -> String):");
    let names = instrumentation.wrap(Dictionary::<i32, String>::new());
    if let Err(e) = names.get(&5) {
        println!("  {:?}: {}\n", e.kind(), e);
    }

    println!("Duplicate insert (String -> i32):");
    let mut prices = instrumentation.wrap(Dictionary::<String, i32>::new());
    prices.add("gold".to_string(), 250)?;
    if let Err(e) = prices.add("gold".to_string(), 300) {
        println!("  {:?}: {}\n", e.kind(), e);
    }

    println!("Lookup of an existing record (i32 -> HomeRenovation):");
    let mut renovations = instrumentation.wrap(Dictionary::<i32, HomeRenovation>::new());
    renovations.add(
        0,
        HomeRenovation {
            text_strings_key: "Renovation_Crib".to_string(),
            price: 15000,
            ..Default::default()
        },
    )?;
    let renovation = renovations.get(&0)?;
    println!("  {} ({}g)\n", renovation.text_strings_key, renovation.price);

    println!("Lookup of a missing key on an unhooked instantiation (bool -> String):");
    let flags = instrumentation.wrap(Dictionary::<bool, String>::new());
    if let Err(e) = flags.get(&true) {
        println!("  {:?}: {}", e.kind(), e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_log_filter_honours_rust_log() {
        let filter = log_filter(Some("debug".to_string()));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = log_filter(Some("keyed_kv=trace".to_string()));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }
}
