use std::path::Path;
use std::process::Command;

fn main() {
    generate_tailwind();
}

/// Compile `tailwind.css` into `assets/tailwind.css`.
///
/// Without the Tailwind CLI installed (`npm install` in this crate) the input
/// is copied through unchanged so `asset!()` still resolves.
fn generate_tailwind() {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let tailwind_input = manifest_dir.join("tailwind.css");
    let tailwind_output = manifest_dir.join("assets/tailwind.css");

    println!("cargo:rerun-if-changed={}", tailwind_input.display());
    println!(
        "cargo:rerun-if-changed={}",
        manifest_dir.join("../folio-ui/src").display()
    );
    println!("cargo:rerun-if-changed={}", manifest_dir.join("src").display());

    let tailwind_bin = manifest_dir.join("node_modules/.bin/tailwindcss");
    if !tailwind_bin.exists() {
        println!("cargo:warning=tailwindcss not installed, copying tailwind.css unprocessed");
        std::fs::copy(&tailwind_input, &tailwind_output).expect("Failed to copy tailwind.css");
        return;
    }

    let output = Command::new(&tailwind_bin)
        .arg("-i")
        .arg(&tailwind_input)
        .arg("-o")
        .arg(&tailwind_output)
        .current_dir(manifest_dir)
        .output();

    match output {
        Ok(output) if output.status.success() => {}
        Ok(output) => {
            eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
            eprintln!("STDOUT: {}", String::from_utf8_lossy(&output.stdout));
            panic!("Tailwind CSS generation failed");
        }
        Err(e) => panic!("Failed to run tailwindcss: {}", e),
    }
}
