//! Maps the running host onto the buildbot's platform directory layout.
//!
//! Only Windows and Apple get special-cased names; every other OS family
//! passes through lowercased. The buildbot publishes x86 and x86_64 trees,
//! so any 64-bit machine string maps to `x86_64`.

/// Remote directory components for the host platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
    pub os_family: String,
    pub arch: String,
}

/// Target for the running host.
pub fn target() -> BuildTarget {
    BuildTarget {
        os_family: os_family_for(std::env::consts::OS),
        arch: arch_for(std::env::consts::ARCH),
    }
}

/// Buildbot OS directory for a raw platform identifier.
pub fn os_family_for(os: &str) -> String {
    match os {
        "windows" | "win32" => "windows".to_string(),
        "macos" | "darwin" => "apple/osx".to_string(),
        other => other.to_ascii_lowercase(),
    }
}

/// Buildbot architecture directory for a raw machine string.
pub fn arch_for(machine: &str) -> String {
    if machine.ends_with("64") {
        "x86_64".to_string()
    } else {
        "x86".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_amd64() {
        assert_eq!(os_family_for("win32"), "windows");
        assert_eq!(arch_for("AMD64"), "x86_64");
    }

    #[test]
    fn apple_is_special_cased() {
        assert_eq!(os_family_for("darwin"), "apple/osx");
        assert_eq!(os_family_for("macos"), "apple/osx");
    }

    #[test]
    fn other_families_pass_through_lowercased() {
        assert_eq!(os_family_for("linux"), "linux");
        assert_eq!(os_family_for("FreeBSD"), "freebsd");
    }

    #[test]
    fn arch_word_width() {
        assert_eq!(arch_for("x86_64"), "x86_64");
        assert_eq!(arch_for("aarch64"), "x86_64");
        assert_eq!(arch_for("i686"), "x86");
        assert_eq!(arch_for("armv7l"), "x86");
    }

    #[test]
    fn host_target_is_nonempty() {
        let t = target();
        assert!(!t.os_family.is_empty());
        assert!(!t.arch.is_empty());
    }
}
