use pathstore::{Mode, SharedStore, SourceLoader};
use toml::Table;

fn main() -> Result<(), pathstore::Error> {
    let mut store = SourceLoader::new()
        .with_file_in("demos/", "/default.toml")
        .with_file("demos/local.toml")
        .load()?;

    // Nested writes create intermediate tables
    store.put("database.pool.size", 8_i64, Mode::Resolved);

    // Merge always targets the literal top-level key
    let mut overrides = Table::new();
    overrides.insert("debug".into(), true.into());
    store.merge("app", overrides, Mode::Resolved)?;

    println!("app: {:?}", store.item("app.name", Mode::Resolved)?);
    println!("debug: {:?}", store.item("app.debug", Mode::Resolved)?);
    println!("pool: {:?}", store.exists_or("database.pool.size", 1_i64, Mode::Resolved));
    println!("timeout: {:?}", store.exists_or("database.timeout", 30_i64, Mode::Resolved));

    if let Err(e) = store.item("database.host", Mode::Literal) {
        println!("literal lookup: {e}");
    }

    let shared = SharedStore::new(store);
    shared.set_item("database.host", "db.internal", Mode::Resolved)?;
    println!("host: {:?}", shared.item("database.host", Mode::Resolved)?);

    Ok(())
}
