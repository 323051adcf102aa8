use gringotts_core::{
    config::CurrencyConfig,
    error::Result,
    format::Pattern,
    Stack,
};

/// A host would normally pull this out of its own config file.
const CONFIG: &str = r#"{
    "name": "crown",
    "name_plural": "crowns",
    "digits": 2,
    "denominations": [
        { "kind": "gold_ingot", "value": 1, "name": "gold", "name_plural": "gold" },
        { "kind": "iron_nugget", "value": "0.10", "name": "iron", "name_plural": "iron" },
        { "kind": "gold_nugget", "value": "0.01", "name": "nugget", "name_plural": "nuggets" },
        { "kind": "emerald", "value": 5 }
    ]
}"#;

fn example() -> Result<String> {
    let config: CurrencyConfig<String> = serde_json::from_str(CONFIG)
        .expect("demo config is valid json");
    let currency = config.into_currency()?;

    // what a player might be carrying. the dirt is worth nothing.
    let purse = vec![
        Some(Stack::new("gold_ingot".to_string(), 3)),
        Some(Stack::new("gold_nugget".to_string(), 47)),
        None,
        Some(Stack::new("emerald".to_string(), 2)),
        Some(Stack::new("dirt".to_string(), 64)),
    ];
    let cents: i64 = purse.iter().map(|slot| currency.value(slot)).sum();

    let pattern: Pattern = "%.2f".parse()?;
    Ok(format!("{} {} ({})", currency.display_value(cents), currency.name_plural(), currency.format_cents(&pattern, cents)))
}

fn main() {
    println!("Your purse holds {}", example().unwrap());
}
