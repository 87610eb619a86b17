use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

pub fn create_file(path: &Path, size: usize) -> PathBuf {
    let mut file = File::create(path).unwrap();
    file.write_all(&vec![0xAB; size]).unwrap();
    path.to_path_buf()
}

/// Lays out `a.png` (1000 bytes), `b.jpg` (2000 bytes), a nested
/// `sub/c.jpeg` (500 bytes) and some non-image files.
pub fn create_image_tree(root: &Path) -> Vec<PathBuf> {
    let subdir = root.join("sub");
    fs::create_dir(&subdir).unwrap();

    let images = vec![
        create_file(&root.join("a.png"), 1000),
        create_file(&root.join("b.jpg"), 2000),
        create_file(&subdir.join("c.jpeg"), 500),
    ];

    create_file(&root.join("notes.txt"), 10);
    create_file(&subdir.join("UPPER.PNG"), 10);

    images
}

/// Writes a stand-in for `cwebp`: answers `-version`, and for
/// `-q Q SRC -o DST` writes the first quarter of SRC to DST.
#[cfg(unix)]
pub fn create_fake_cwebp(dir: &Path) -> PathBuf {
    create_script(
        dir,
        "fake-cwebp",
        r#"if [ "$1" = "-version" ]; then echo "1.3.2"; exit 0; fi
size=$(wc -c < "$3")
head -c $((size / 4)) "$3" > "$5""#,
    )
}

/// A `cwebp` that answers `-version` but fails every conversion.
#[cfg(unix)]
pub fn create_failing_cwebp(dir: &Path) -> PathBuf {
    create_script(
        dir,
        "failing-cwebp",
        r#"if [ "$1" = "-version" ]; then exit 0; fi
echo "Could not process file $3" >&2
exit 255"#,
    )
}

#[cfg(unix)]
fn create_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}
