fn main() {
    // Validate the embedded table TOML at compile time.
    validate_toml(
        "src/table/default_table.toml",
        include_str!("src/table/default_table.toml"),
    );
    println!("cargo:rerun-if-changed=src/table/default_table.toml");
}

fn validate_toml(path: &str, content: &str) {
    let value = match content.parse::<toml::Table>() {
        Ok(v) => v,
        Err(_) => panic!("{path} contains invalid TOML"),
    };
    for section in ["vowels", "consonants"] {
        if !matches!(value.get(section), Some(toml::Value::Array(a)) if !a.is_empty()) {
            panic!("{path} is missing a non-empty [[{section}]] array");
        }
    }
}
