use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Number of Taylor terms covered by the generated tables
const MAX_TERMS: usize = 128;

/// Denominators of the sine recurrence: (2n)(2n+1), index 0 unused
fn compute_sin_denominators() -> [f64; MAX_TERMS] {
    (0..MAX_TERMS)
        .map(|n| if n == 0 { 1.0 } else { ((2 * n) * (2 * n + 1)) as f64 })
        .collect::<Vec<f64>>()
        .try_into()
        .unwrap()
}

/// Denominators of the cosine recurrence: (2n-1)(2n), index 0 unused
fn compute_cos_denominators() -> [f64; MAX_TERMS] {
    (0..MAX_TERMS)
        .map(|n| if n == 0 { 1.0 } else { ((2 * n - 1) * (2 * n)) as f64 })
        .collect::<Vec<f64>>()
        .try_into()
        .unwrap()
}

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("series_tables.rs");
    let mut f = File::create(dest_path).unwrap();

    writeln!(&mut f, "/// Largest term count the series tables support").unwrap();
    writeln!(&mut f, "pub const MAX_TERMS: usize = {};", MAX_TERMS).unwrap();
    let sin_table = compute_sin_denominators();
    writeln!(&mut f, "const SIN_DENOMINATORS: [f64; {}] = {:?};", sin_table.len(), sin_table).unwrap();
    let cos_table = compute_cos_denominators();
    writeln!(&mut f, "const COS_DENOMINATORS: [f64; {}] = {:?};", cos_table.len(), cos_table).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}
