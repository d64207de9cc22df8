use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::thread;
use std::time::Duration;

const DEFAULT_PDFIUM_VERSION: &str = "7529";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=DOC2KG_PDFIUM_PREBUILT");
    println!("cargo:rerun-if-env-changed=PDFIUM_VERSION");

    if env::var_os("CARGO_FEATURE_BUNDLED_PDFIUM").is_none() {
        return;
    }

    let target = env::var("TARGET").expect("cargo sets TARGET for build scripts");
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts"));
    let pdfium_dir = out_dir.join("pdfium");

    if let Some(prebuilt) = env::var_os("DOC2KG_PDFIUM_PREBUILT") {
        let prebuilt_path = PathBuf::from(prebuilt);
        if !prebuilt_path.exists() {
            panic!(
                "DOC2KG_PDFIUM_PREBUILT points to '{}' but the directory does not exist",
                prebuilt_path.display()
            );
        }
        copy_prebuilt(&prebuilt_path, &pdfium_dir)
            .unwrap_or_else(|err| panic!("Failed to copy pdfium from {}: {}", prebuilt_path.display(), err));
    }

    let (runtime_lib_name, runtime_subdir) = runtime_library_info(&target);
    let runtime_dir = pdfium_dir.join(runtime_subdir);

    if !runtime_dir.join(runtime_lib_name).exists() {
        download_and_extract(&pdfium_url(&target), &pdfium_dir);
    }

    // Read back with option_env! when the library binds pdfium at runtime.
    println!("cargo:rustc-env=DOC2KG_BUNDLED_PDFIUM_DIR={}", runtime_dir.display());
}

fn pdfium_url(target: &str) -> String {
    let platform = if target.contains("darwin") {
        "mac"
    } else if target.contains("linux") {
        "linux"
    } else if target.contains("windows") {
        "win"
    } else {
        panic!("No prebuilt pdfium for target {}", target);
    };

    let arch = if target.contains("aarch64") {
        "arm64"
    } else if target.contains("i686") {
        "x86"
    } else if target.contains("arm") {
        "arm"
    } else {
        "x64"
    };

    let version = env::var("PDFIUM_VERSION")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_PDFIUM_VERSION.to_string());

    format!(
        "https://github.com/bblanchon/pdfium-binaries/releases/download/chromium/{}/pdfium-{}-{}.tgz",
        version, platform, arch
    )
}

fn download_and_extract(url: &str, dest_dir: &Path) {
    fs::create_dir_all(dest_dir).expect("Failed to create pdfium directory");

    let archive_path = dest_dir.join("pdfium.tgz");
    let archive = archive_path.to_str().expect("OUT_DIR is valid UTF-8");
    let retries = 3;
    let mut last_error = String::new();

    for attempt in 1..=retries {
        let _ = fs::remove_file(&archive_path);
        match Command::new("curl").args(["-f", "-L", "-o", archive, url]).status() {
            Ok(status) if status.success() => {
                last_error.clear();
                break;
            }
            Ok(status) => last_error = format!("curl exited with {:?}", status.code()),
            Err(err) => last_error = format!("failed to spawn curl: {}", err),
        }

        if attempt == retries {
            panic!("Failed to download pdfium from {} after {} attempts: {}", url, retries, last_error);
        }

        println!(
            "cargo:warning=pdfium download failed (attempt {}/{}): {}",
            attempt, retries, last_error
        );
        thread::sleep(Duration::from_secs(2 << attempt));
    }

    let dest = dest_dir.to_str().expect("OUT_DIR is valid UTF-8");
    let status = Command::new("tar")
        .args(["-xzf", archive, "-C", dest])
        .status()
        .expect("Failed to execute tar");
    let _ = fs::remove_file(&archive_path);

    if !status.success() {
        panic!("Failed to extract pdfium archive from {}", url);
    }
}

fn runtime_library_info(target: &str) -> (&'static str, &'static str) {
    if target.contains("windows") {
        ("pdfium.dll", "bin")
    } else if target.contains("darwin") {
        ("libpdfium.dylib", "lib")
    } else {
        ("libpdfium.so", "lib")
    }
}

fn copy_prebuilt(src: &Path, dst: &Path) -> io::Result<()> {
    if dst.exists() {
        fs::remove_dir_all(dst)?;
    }
    copy_dir_all(src, dst)
}

fn copy_dir_all(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target_path = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_all(&entry.path(), &target_path)?;
        } else {
            fs::copy(entry.path(), &target_path)?;
        }
    }
    Ok(())
}
