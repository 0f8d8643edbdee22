#![allow(dead_code)]
use std::fs;
use std::io::Result as IoResult;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Bold red `error:` header the compiler starts its failures with.
pub const ERROR_HEADER: &str = "\x1b[1m\x1b[91merror\x1b[39m:\x1b[0m";

/// A temporary working directory holding a fake compiler and a source file.
pub struct TestWorkspace {
    /// When this is dropped, the directory and its contents are removed.
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> IoResult<Self> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path().to_path_buf();
        fs::write(root.join("a.aga"), "const x = 1;\n")?;
        Ok(TestWorkspace { temp_dir, root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes an executable shell script standing in for `agalang-core`.
    ///
    /// `stdout` and `stderr` are written verbatim before exiting with `code`.
    #[cfg(unix)]
    pub fn fake_tool(
        &self,
        name: &str,
        stdout: &str,
        stderr: &str,
        code: i32,
    ) -> IoResult<PathBuf> {
        use std::os::unix::fs::PermissionsExt;
        let out_file = self.root.join(format!("{}.stdout", name));
        let err_file = self.root.join(format!("{}.stderr", name));
        fs::write(&out_file, stdout)?;
        fs::write(&err_file, stderr)?;
        let script = self.root.join(name);
        fs::write(
            &script,
            format!(
                "#!/bin/sh\n[ \"$1\" = tokens ] || exit 64\ncat '{}'\ncat '{}' >&2\nexit {}\n",
                out_file.display(),
                err_file.display(),
                code
            ),
        )?;
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;
        Ok(script)
    }

    pub fn write_config(&self, contents: &str) -> IoResult<PathBuf> {
        let path = self.root.join("agal-tokens.toml");
        fs::write(&path, contents)?;
        Ok(path)
    }
}

/// A small dump in the envelope the compiler prints: one declaration and one use.
pub fn sample_dump() -> String {
    r#"{"file":[
{"definition":{"line":1,"column":7},
 "location":{"start":{"line":1,"column":7},"end":{"line":1,"column":8},
             "length":1,"file_name":"a.aga"},
 "token_type":"Variable","token_modifier":["Constant"],
 "data_type":{"class":"agal","type":"numero"},"is_original_decl":true},
{"definition":{"line":1,"column":7},
 "location":{"start":{"line":2,"column":1},"end":{"line":2,"column":2},
             "length":1,"file_name":"a.aga"},
 "token_type":"Variable","token_modifier":["Constant"],"data_type":null}
],"mod":{}}"#
        .to_string()
}
