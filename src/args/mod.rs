//! Proxy argument construction.
//!
//! # Data Flow
//! ```text
//! Environment + LauncherConfig
//!     → builder.rs (fixed prefix, port, service selection)
//!     → extra.rs (ESPv2_ARGS delimiter handling)
//!     → CommandLine (argv for process handoff)
//! ```

pub mod builder;
pub mod extra;

use serde::{Serialize, Serializer};
use std::ffi::{OsStr, OsString};

pub use builder::build_args;
pub use extra::parse_extra_args;

/// Full argument vector for the proxy, `argv[0]` being the program.
///
/// Arguments are OS strings so environment values reach the proxy byte for
/// byte, valid UTF-8 or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    argv: Vec<OsString>,
}

impl CommandLine {
    /// Start a command line for `program`.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            argv: vec![program.into()],
        }
    }

    pub fn push(&mut self, arg: impl Into<OsString>) {
        self.argv.push(arg.into());
    }

    pub fn extend<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.argv.extend(args.into_iter().map(Into::into));
    }

    /// The executable path.
    pub fn program(&self) -> &OsStr {
        &self.argv[0]
    }

    /// Arguments after the program.
    pub fn args(&self) -> &[OsString] {
        &self.argv[1..]
    }

    /// Everything, program included.
    pub fn argv(&self) -> &[OsString] {
        &self.argv
    }

    /// Whether any element, program included, equals `arg` exactly.
    pub fn contains(&self, arg: impl AsRef<OsStr>) -> bool {
        let arg = arg.as_ref();
        self.argv.iter().any(|a| a.as_os_str() == arg)
    }
}

/// Serialized as an array of strings; invalid UTF-8 is replaced with U+FFFD.
impl Serialize for CommandLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.argv.iter().map(|a| a.to_string_lossy()))
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, arg) in self.argv.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_and_args() {
        let mut cmd = CommandLine::new("/usr/local/bin/python");
        cmd.push("/apiproxy/start_proxy.py");
        cmd.extend(["--a", "--b"]);

        assert_eq!(cmd.program(), "/usr/local/bin/python");
        assert_eq!(cmd.args(), ["/apiproxy/start_proxy.py", "--a", "--b"]);
        assert_eq!(cmd.argv().len(), 4);
        assert!(cmd.contains("--b"));
    }

    #[test]
    fn test_serializes_as_array() {
        let mut cmd = CommandLine::new("prog");
        cmd.push("x");
        assert_eq!(serde_json::to_string(&cmd).unwrap(), r#"["prog","x"]"#);
        assert_eq!(cmd.to_string(), "prog x");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_argument_kept_verbatim() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"--service_json_path=/etc/svc-\xff.json");
        let mut cmd = CommandLine::new("prog");
        cmd.push(raw);

        assert_eq!(cmd.args()[0].as_bytes(), raw.as_bytes());
        assert_eq!(
            serde_json::to_string(&cmd).unwrap(),
            "[\"prog\",\"--service_json_path=/etc/svc-\u{FFFD}.json\"]"
        );
    }
}
