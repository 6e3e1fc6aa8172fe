//! Benchmarks for key-bind parsing and loading
//!
//! Run with: cargo bench parse

use keybinds::keymap::{parse_line, parse_source, ActionNames, KeyBindRepository};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const DESCRIPTORS: &[&str] = &[
    "+forward", "+back", "+left", "+right", "+jump", "+duck", "+attack", "slot1", "autobuy",
    "<unbound>",
];

fn source(line_count: usize) -> String {
    let mut out = String::from("// generated\n");
    for i in 0..line_count {
        let descriptor = DESCRIPTORS[i % DESCRIPTORS.len()];
        out.push_str(&format!("bind \"key{}\" \"{}\"\n", i % 64, descriptor));
    }
    out
}

// ============================================================================
// Line parsing
// ============================================================================

#[divan::bench]
fn parse_single_line() {
    divan::black_box(parse_line(divan::black_box(r#"bind "mouse1" "+attack""#)));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn parse_source_lines(bencher: divan::Bencher, line_count: usize) {
    let text = source(line_count);
    bencher.bench(|| parse_source(divan::black_box(&text)).count());
}

// ============================================================================
// Table building
// ============================================================================

#[divan::bench(args = [100, 1_000, 10_000])]
fn apply_source_to_table(bencher: divan::Bencher, line_count: usize) {
    let text = source(line_count);
    bencher.bench(|| {
        let mut repo = KeyBindRepository::new(ActionNames::builtin());
        repo.apply_source(divan::black_box(&text));
        repo.len()
    });
}

#[divan::bench]
fn lookup_in_full_table(bencher: divan::Bencher) {
    let mut repo = KeyBindRepository::new(ActionNames::builtin());
    repo.apply_source(&source(64));
    bencher.bench(|| repo.lookup(divan::black_box("key63")).is_some());
}
