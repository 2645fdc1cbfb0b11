use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::fs;
use tempfile::TempDir;

use modlint::{Cli, OutputFormat, PrivateMatch, run_scan};

fn create_test_cli(root: std::path::PathBuf) -> Cli {
    Cli {
        root,
        format: OutputFormat::Terminal,
        strict: false,
        prefix: "zmap".to_string(),
        markers: vec![],
        private_match: PrivateMatch::Substring,
        header_ext: "h".to_string(),
        source_ext: "c".to_string(),
        quiet: true,
        verbose: false,
    }
}

/// One directory per module: a public header, a private header, and a source
/// file that includes its own private header plus the previous module's
/// (a violation) and a few system headers.
fn setup_tree(modules: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    for i in 0..modules {
        let module_dir = temp_dir.path().join(format!("zmapMod{i}"));
        fs::create_dir_all(&module_dir).unwrap();

        fs::write(
            module_dir.join(format!("zmapMod{i}.h")),
            format!("#include <zmapMod{i}_P.h>\n#include <glib.h>\n"),
        )
        .unwrap();
        fs::write(module_dir.join(format!("zmapMod{i}_P.h")), "").unwrap();

        let prev = if i == 0 { modules - 1 } else { i - 1 };
        fs::write(
            module_dir.join(format!("zmapMod{i}.c")),
            format!(
                "#include <stdio.h>\n#include <zmapMod{i}.h>\n#include <zmapMod{i}_P.h>\n#include <zmapMod{prev}_P.h>\n"
            ),
        )
        .unwrap();
    }

    temp_dir
}

fn bench_full_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_scan");

    for modules in [10, 50, 200] {
        let tree = setup_tree(modules);
        let cli = create_test_cli(tree.path().to_path_buf());

        group.bench_with_input(
            BenchmarkId::from_parameter(modules),
            &cli,
            |b, cli| {
                b.iter(|| {
                    let report = run_scan(black_box(cli)).unwrap();
                    black_box(report)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_full_scan);
criterion_main!(benches);
