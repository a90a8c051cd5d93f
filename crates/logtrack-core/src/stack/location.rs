//! Location-based stack inspector

use std::env;
use std::path::Path;

use once_cell::sync::Lazy;

use super::traits::{CallSite, StackInspector};

/// Stem of the running executable, resolved once per process
static PROGRAM_NAME: Lazy<Option<String>> = Lazy::new(|| {
    env::current_exe()
        .ok()
        .as_deref()
        .and_then(file_stem)
});

/// Name of the running program, if the platform can tell
pub fn program_name() -> Option<&'static str> {
    PROGRAM_NAME.as_deref()
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
}

/// Describes callers from their `#[track_caller]` location
///
/// `short` yields `src/main.rs:42`. `last_file` names the program as a whole
/// (the executable's stem), so every module of one program agrees on it; the
/// call site's file stem is only used when the executable cannot be found.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationInspector;

impl LocationInspector {
    pub fn new() -> Self {
        Self
    }

    /// `last_file` as derived from the call site alone
    pub fn site_file(site: &CallSite) -> String {
        file_stem(Path::new(site.file())).unwrap_or_else(|| "unknown".to_string())
    }
}

impl StackInspector for LocationInspector {
    fn short(&self, site: &CallSite) -> String {
        format!("{}:{}", site.file(), site.line())
    }

    fn last_file(&self, site: &CallSite) -> String {
        match program_name() {
            Some(name) => name.to_string(),
            None => Self::site_file(site),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short() {
        let site = CallSite::new("src/bin/server.rs", 42, 9);
        assert_eq!(LocationInspector.short(&site), "src/bin/server.rs:42");
        assert_eq!(LocationInspector.short_exclude(&site, 1), "src/bin/server.rs:42");
    }

    #[test]
    fn test_last_file_names_the_program() {
        let inspector = LocationInspector::new();
        let from_server = inspector.last_file(&CallSite::new("src/bin/server.rs", 1, 1));
        let from_worker = inspector.last_file(&CallSite::new("src/worker/mod.rs", 9, 1));

        assert_eq!(from_server, from_worker);
        assert!(!from_server.is_empty());
        if let Some(name) = program_name() {
            assert_eq!(from_server, name);
        }
    }

    #[test]
    fn test_program_name_matches_current_exe() {
        let exe = env::current_exe().unwrap();
        assert_eq!(program_name(), file_stem(&exe).as_deref());
    }

    #[test]
    fn test_site_file_fallback() {
        assert_eq!(LocationInspector::site_file(&CallSite::new("src/bin/server.rs", 1, 1)), "server");
        assert_eq!(LocationInspector::site_file(&CallSite::new("main.rs", 1, 1)), "main");
        assert_eq!(LocationInspector::site_file(&CallSite::new("", 1, 1)), "unknown");
    }

    #[test]
    fn test_caller_tracks_this_file() {
        let site = CallSite::caller();
        assert!(site.file().ends_with("location.rs"));
        assert_eq!(LocationInspector::site_file(&site), "location");
        assert!(site.line() > 0);
    }

    #[test]
    fn test_track_caller_skips_wrapper_frames() {
        #[track_caller]
        fn wrapper() -> CallSite {
            CallSite::caller()
        }

        let expected_line = line!() + 1;
        let site = wrapper();
        assert_eq!(site.line(), expected_line);
    }

    #[test]
    fn test_call_site_display() {
        assert_eq!(CallSite::new("a.rs", 3, 7).to_string(), "a.rs:3:7");
    }
}
