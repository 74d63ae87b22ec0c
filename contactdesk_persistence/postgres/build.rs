use std::{
    collections::BTreeMap,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

fn main() {
    println!("cargo::rerun-if-changed=migrations");

    let out = PathBuf::from(std::env::var("OUT_DIR").unwrap()).join("migrations.rs");
    write_migrations(&out, &read_migrations());
    println!("cargo::rustc-env=MIGRATIONS={}", out.display());
}

#[derive(Default)]
struct Scripts {
    up: String,
    down: String,
}

/// Pairs `<name>.up.sql` and `<name>.down.sql`, ordered by name.
fn read_migrations() -> BTreeMap<String, Scripts> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations");

    let mut migrations = BTreeMap::<String, Scripts>::new();
    for entry in dir.read_dir().unwrap() {
        let path = entry.unwrap().path();
        let file_name = path.file_name().unwrap().to_str().unwrap().to_owned();

        let (name, up) = if let Some(name) = file_name.strip_suffix(".up.sql") {
            (name, true)
        } else if let Some(name) = file_name.strip_suffix(".down.sql") {
            (name, false)
        } else {
            continue;
        };

        let content = std::fs::read_to_string(&path).unwrap();
        let scripts = migrations.entry(name.to_owned()).or_default();
        if up {
            scripts.up = content;
        } else {
            scripts.down = content;
        }
    }
    migrations
}

fn write_migrations(path: &Path, migrations: &BTreeMap<String, Scripts>) {
    let mut writer = BufWriter::new(std::fs::File::create(path).unwrap());
    writer.write_all(b"&[").unwrap();
    for (name, Scripts { up, down }) in migrations {
        write!(
            writer,
            "Migration{{name:{name:?},up:{up:?},down:{down:?}}},"
        )
        .unwrap();
    }
    writer.write_all(b"]").unwrap();
    writer.flush().unwrap();
}
