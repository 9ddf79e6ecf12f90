use anyhow::{Context, Result};
use clap::ValueEnum;
use hasty_compiler::{ComponentRegistry, CompileError};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, SystemTime};

/// Extension of DSL source files.
pub const SOURCE_EXT: &str = "hsty";

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUT_DIR: &str = "target/hasty-gen";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EmitMode {
    /// The compiled JSX component
    Jsx,
    /// Token dump
    Tokens,
    /// Source syntax tree dump
    Ast,
    /// Emission tree dump
    Ir,
}

impl EmitMode {
    fn file_name(self, stem: &str) -> String {
        match self {
            EmitMode::Jsx => format!("{stem}.jsx"),
            EmitMode::Tokens => format!("{stem}.tokens.txt"),
            EmitMode::Ast => format!("{stem}.ast.txt"),
            EmitMode::Ir => format!("{stem}.ir.txt"),
        }
    }
}

/// Run the pipeline on `src` up to the stage `emit` asks for.
pub fn emit_source(
    src: &str,
    emit: EmitMode,
    registry: &ComponentRegistry,
) -> Result<String, CompileError> {
    if emit == EmitMode::Jsx {
        return hasty_compiler::compile_with(src, registry);
    }
    let tokens = hasty_compiler::tokenize(src)?;
    if emit == EmitMode::Tokens {
        return Ok(format!("{tokens:#?}"));
    }
    let ast = hasty_compiler::parse(&tokens)?;
    if emit == EmitMode::Ast {
        return Ok(format!("{ast:#?}"));
    }
    Ok(format!("{:#?}", hasty_compiler::transform(&ast)))
}

/// Compile one `.hsty` file, or every `.hsty` file under a directory, into
/// `out_dir`. Directory inputs keep their relative layout. Returns the
/// written paths in the order they were compiled.
pub fn build_cmd(input: &Path, out_dir: Option<&Path>, emit: EmitMode) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

    let sources: Vec<(PathBuf, PathBuf)> = if input.is_dir() {
        collect_sources(input, &out_dir)
            .into_iter()
            .map(|p| {
                let rel = p.strip_prefix(input).unwrap_or(&p).to_path_buf();
                (p, rel)
            })
            .collect()
    } else {
        let rel = input
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("component.hsty"));
        vec![(input.to_path_buf(), rel)]
    };

    if sources.is_empty() {
        log::warn!("no .{SOURCE_EXT} files found under {}", input.display());
    }

    let registry = ComponentRegistry::builtin();
    let mut written = Vec::with_capacity(sources.len());
    for (src_path, rel) in sources {
        let src = fs::read_to_string(&src_path)
            .with_context(|| format!("failed to read {}", src_path.display()))?;
        let mut code = emit_source(&src, emit, registry)
            .with_context(|| format!("failed to compile {}", src_path.display()))?;
        code.push('\n');

        let stem = rel
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("component");
        let out_path = match rel.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => out_dir.join(parent).join(emit.file_name(stem)),
            None => out_dir.join(emit.file_name(stem)),
        };
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&out_path, code)
            .with_context(|| format!("failed to write {}", out_path.display()))?;

        log::info!("compiled {} -> {}", src_path.display(), out_path.display());
        written.push(out_path);
    }
    Ok(written)
}

/// Source text and its compiled output, one after the other.
pub fn show_cmd(input: &Path) -> Result<String> {
    let src =
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?;
    let jsx = hasty_compiler::compile(&src)
        .with_context(|| format!("failed to compile {}", input.display()))?;
    Ok(format!(
        "// {}\n{}\n\n// compiled\n{}\n",
        input.display(),
        src.trim_end(),
        jsx
    ))
}

/// `.hsty` files under `dir`, sorted, skipping anything inside `skip`.
pub fn collect_sources(dir: &Path, skip: &Path) -> Vec<PathBuf> {
    fn walk(p: &Path, skip: &Path, out: &mut Vec<PathBuf>) {
        if let Ok(rd) = fs::read_dir(p) {
            for e in rd.flatten() {
                let path = e.path();
                if path.starts_with(skip) {
                    continue;
                }
                if path.is_dir() {
                    walk(&path, skip, out);
                } else if path.extension().and_then(|x| x.to_str()) == Some(SOURCE_EXT) {
                    out.push(path);
                }
            }
        }
    }
    let mut out = Vec::new();
    walk(dir, skip, &mut out);
    out.sort();
    out
}

fn latest_mtime(dir: &Path, skip: &Path) -> SystemTime {
    collect_sources(dir, skip)
        .iter()
        .filter_map(|p| fs::metadata(p).and_then(|m| m.modified()).ok())
        .max()
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

/// Polling watcher: rebuilds `dir` whenever a `.hsty` file under it
/// changes. Compile errors are logged and watching continues.
/// Reads `r` (rebuild) and `q` (quit) from stdin.
pub fn watch_cmd(dir: &Path, out_dir: Option<&Path>, interval: Duration) -> Result<()> {
    let out = out_dir
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

    let rebuild = || match build_cmd(dir, Some(&out), EmitMode::Jsx) {
        Ok(files) => log::info!("[watch] built {} file(s)", files.len()),
        Err(e) => log::error!("[watch] {e:#}"),
    };

    // command channel: 'r' => rebuild, 'q' => quit
    let (tx, rx) = mpsc::channel::<char>();
    thread::spawn(move || {
        let mut buf = [0u8; 1];
        let stdin = io::stdin();
        let mut handle = stdin.lock();
        while let Ok(n) = handle.read(&mut buf) {
            if n == 0 {
                break;
            }
            let ch = (buf[0] as char).to_ascii_lowercase();
            if (ch == 'r' || ch == 'q') && tx.send(ch).is_err() {
                break;
            }
        }
    });

    println!("[watch] Watching {} (press 'r' to rebuild, 'q' to quit)", dir.display());
    rebuild();
    let mut last = latest_mtime(dir, &out);
    loop {
        thread::sleep(interval);
        match rx.try_recv() {
            Ok('r') => {
                log::info!("[watch] manual rebuild");
                rebuild();
            }
            Ok('q') => {
                println!("[watch] Quit requested");
                break;
            }
            _ => {}
        }
        let now = latest_mtime(dir, &out);
        if now > last {
            log::info!("[watch] change detected");
            last = now;
            rebuild();
        }
    }
    Ok(())
}
