//! Test helpers: a stand-in for `meson` that needs no Meson install.
//!
//! `format --check-only [-c cfg] FILE...` exits 1 when any file contains the
//! marker `UNFORMATTED`; `format [-c cfg] -i FILE...` strips the marker.

use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

const STUB: &str = r#"#!/bin/sh
[ "$1" = "format" ] || exit 2
shift
mode=check
while [ $# -gt 0 ]; do
  case "$1" in
    --check-only) mode=check; shift ;;
    -i) mode=inplace; shift ;;
    -c) shift 2 ;;
    *) break ;;
  esac
done
status=0
for f in "$@"; do
  [ -f "$f" ] || { status=2; continue; }
  if [ "$mode" = check ]; then
    if grep -q UNFORMATTED "$f"; then status=1; fi
  else
    sed -i 's/ *UNFORMATTED//' "$f"
  fi
done
exit $status
"#;

static STUB_PATH: OnceLock<String> = OnceLock::new();

/// Absolute path to the stub formatter. Written once per test binary so
/// concurrent tests never exec a file another thread still holds open.
pub fn stub_formatter() -> String {
    STUB_PATH
        .get_or_init(|| {
            let dir = Box::leak(Box::new(tempfile::tempdir().unwrap()));
            let path = dir.path().join("fake-meson");
            std::fs::write(&path, STUB).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            wait_until_executable(&path);
            path.to_string_lossy().to_string()
        })
        .clone()
}

// ETXTBSY: a sibling test forked while the script was still open for write.
fn wait_until_executable(path: &Path) {
    for _ in 0..50 {
        match std::process::Command::new(path).output() {
            Err(e) if e.raw_os_error() == Some(26) => std::thread::sleep(Duration::from_millis(20)),
            _ => return,
        }
    }
}
