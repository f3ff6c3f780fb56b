use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

fn main() {
    if let Err(e) = generate() {
        eprintln!("build script failed: {}", e);
        std::process::exit(1);
    }
}

fn generate() -> io::Result<()> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").map_err(io::Error::other)?;
    let data_dir = Path::new(&manifest_dir).join("data").canonicalize()?;

    let out_dir = env::var("OUT_DIR").map_err(io::Error::other)?;
    let dest_path = Path::new(&out_dir).join("builtin_lessons.rs");
    let mut f = fs::File::create(&dest_path)?;

    // Lesson files in name order; the numeric prefix sets catalog order
    let mut entries: Vec<_> = fs::read_dir(&data_dir)?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| ext == "toml")
                .unwrap_or(false)
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    writeln!(f, "static BUILTIN_LESSONS: &[(&str, &str)] = &[")?;
    for entry in &entries {
        let filename = entry.file_name().to_string_lossy().to_string();
        let abs_path = entry.path().canonicalize()?;
        writeln!(
            f,
            "    (\"{}\", include_str!({:?})),",
            filename,
            abs_path.display().to_string()
        )?;
    }
    writeln!(f, "];")?;

    println!("cargo:rerun-if-changed={}", data_dir.display());
    for entry in &entries {
        println!("cargo:rerun-if-changed={}", entry.path().display());
    }

    Ok(())
}
