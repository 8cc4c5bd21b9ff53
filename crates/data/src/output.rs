use anyhow::Context;
use sealpool_core::{write_report, Pool, Side};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes one side's report to `path`, creating its parent directory if
/// needed. The file is flushed and closed before this returns.
pub fn write_pool_file(path: &Path, side: Side, pool: &Pool) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_report(pool, side, &mut out).with_context(|| format!("write {}", path.display()))?;
    out.flush().with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn writes_report_into_new_directory() {
        let dir = unique_temp_dir();
        let path = dir.join("nested").join("corp-3-42.txt");
        let mut pool = Pool::new();
        pool.add("Hedge Fund");
        pool.add("Hedge Fund");
        pool.add("Enigma");
        write_pool_file(&path, Side::Corp, &pool).expect("write");
        let body = fs::read_to_string(&path).expect("read back");
        assert_eq!(
            body,
            "The Shadow: Pulling the Strings\nEnigma x1\nHedge Fund x2\n"
        );
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn empty_pool_writes_banner_only() {
        let dir = unique_temp_dir();
        let path = dir.join("runner-0-7.txt");
        write_pool_file(&path, Side::Runner, &Pool::new()).expect("write");
        let body = fs::read_to_string(&path).expect("read back");
        assert_eq!(body, "The Masque: Cyber General\n");
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let blocker = unique_temp_dir();
        fs::write(&blocker, "not a directory").expect("write blocker");
        let err = write_pool_file(&blocker.join("corp-1-1.txt"), Side::Corp, &Pool::new())
            .expect_err("file in the way");
        assert!(format!("{err:#}").contains("create"));
        let _ = fs::remove_file(blocker);
    }

    fn unique_temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "sealpool_output_test_{}_{}",
            std::process::id(),
            nanos
        ))
    }
}
