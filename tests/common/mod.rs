use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Write a ZIP archive containing `files` (name -> bytes).
pub fn build_zip(path: &Path, files: &[(&str, &[u8])]) {
    let file = fs::File::create(path).expect("Failed to create zip fixture");
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    for (name, content) in files {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap();
}

/// Write a gzip-compressed TAR archive containing `files` (name -> bytes).
pub fn build_tar_gz(path: &Path, files: &[(&str, &[u8])]) {
    let file = fs::File::create(path).expect("Failed to create tar.gz fixture");
    let encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for (name, content) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, *name, *content).unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap();
}

/// Write a standalone gzip file holding `content`.
pub fn build_gz(path: &Path, content: &[u8]) {
    let file = fs::File::create(path).expect("Failed to create gz fixture");
    let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    encoder.write_all(content).unwrap();
    encoder.finish().unwrap();
}
