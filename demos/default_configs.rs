use bscalc_lib::{calculate, default_configs, FormFields};

fn main() {
    let fields = FormFields::new("100", "100", "1", "0.05", "0.2", "Put");

    println!("bscalc-lib Default Configuration Examples\n");

    // 1. Standard configuration
    println!("1. Standard Configuration (reference behaviour):");
    let standard = default_configs::standard();
    println!("   Decimals: {}", standard.display.decimals);
    println!("   Option type matching: {:?}", standard.kind_matching);
    println!("   Result: {}\n", calculate(&fields, &standard));

    // 2. Lenient configuration
    println!("2. Lenient Configuration (any casing of call/put):");
    let lenient = default_configs::lenient();
    println!("   Option type matching: {:?}", lenient.kind_matching);
    println!("   Result: {}\n", calculate(&fields, &lenient));

    // 3. Precise configuration
    println!("3. Precise Configuration (six decimals):");
    let precise = default_configs::precise();
    println!("   Decimals: {}", precise.display.decimals);
    let lower = FormFields {
        kind: "put".to_string(),
        ..fields.clone()
    };
    println!("   Result: {}\n", calculate(&lower, &precise));

    // Configuration as TOML, ready to save and pass to `bscalc --config`
    println!("Lenient configuration as TOML:");
    match lenient.to_toml_string() {
        Ok(text) => println!("{}", text),
        Err(e) => println!("❌ Serialisation failed: {}", e),
    }
}
