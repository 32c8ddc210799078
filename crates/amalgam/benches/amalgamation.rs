use std::{fmt::Write as _, fs, path::Path};

use amalgam::Amalgamator;
use criterion::{Criterion, criterion_group, criterion_main};
use tempfile::TempDir;

const HEADERS_PER_LEVEL: usize = 8;
const LEVELS: usize = 4;

/// Build a tree of `LEVELS` directories, each header including the next level's headers
fn generate_tree(root: &Path) -> std::path::PathBuf {
    for level in 0..LEVELS {
        let dir = root.join(format!("level{level}"));
        fs::create_dir_all(&dir).expect("Failed to create level directory");

        for index in 0..HEADERS_PER_LEVEL {
            let mut text = String::from("#pragma once\n#include <vector>\n#include <memory>\n");
            if level + 1 < LEVELS {
                for child in 0..HEADERS_PER_LEVEL {
                    writeln!(text, "#include \"../level{}/h{child}.hpp\"", level + 1).unwrap();
                }
            }
            for line in 0..50 {
                writeln!(text, "inline int fn_{level}_{index}_{line}() {{ return {line}; }}").unwrap();
            }
            fs::write(dir.join(format!("h{index}.hpp")), text).expect("Failed to write header");
        }
    }

    let entry = root.join("entry.hpp");
    let mut text = String::from("#pragma once\n");
    for index in 0..HEADERS_PER_LEVEL {
        writeln!(text, "#include \"level0/h{index}.hpp\"").unwrap();
    }
    fs::write(&entry, text).expect("Failed to write entry header");
    entry
}

fn benchmark_amalgamation(c: &mut Criterion) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let entry = generate_tree(temp.path());
    let output = temp.path().join("single.hpp");
    let amalgamator = Amalgamator::default();

    let mut group = c.benchmark_group("amalgamation");
    group.bench_function("resolve_tree", |b| {
        b.iter(|| amalgamator.resolve(&entry).expect("resolve failed"));
    });
    group.bench_function("amalgamate_tree", |b| {
        b.iter(|| {
            amalgamator
                .amalgamate(&entry, &output)
                .expect("amalgamate failed")
        });
    });
    group.finish();
}

criterion_group!(benches, benchmark_amalgamation);
criterion_main!(benches);
